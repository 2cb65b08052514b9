use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

/// Database file used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:demo.db";

/// Command line flags
#[derive(Debug, Default, Parser)]
#[command(
    name = "client_crud",
    about = "Insert, read, update and delete one client in a SQLite database"
)]
pub struct Cli {
    /// Overrides DATABASE_URL
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,
}

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are picked up if the file exists.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        Self::from_pairs(std::env::vars())
    }

    /// Build configuration from explicit key/value pairs instead of the process environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Apply command line overrides on top of the environment
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        self
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Load the environment and merge in command line flags
pub fn init(cli: &Cli) -> Result<Config> {
    let config = Config::load()?.with_cli(cli);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_file() {
        let config = Config::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn reads_database_url_from_environment() {
        let config = Config::from_pairs([("DATABASE_URL", "sqlite:other.db")]).unwrap();
        assert_eq!(config.database_url(), "sqlite:other.db");
    }

    #[test]
    fn cli_flag_wins_over_environment() {
        let cli = Cli::parse_from(["client_crud", "--database-url", "sqlite::memory:"]);
        let config = Config::from_pairs([("DATABASE_URL", "sqlite:other.db")])
            .unwrap()
            .with_cli(&cli);
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn no_flags_keeps_environment_value() {
        let cli = Cli::parse_from(["client_crud"]);
        let config = Config::from_pairs([("DATABASE_URL", "sqlite:other.db")])
            .unwrap()
            .with_cli(&cli);
        assert_eq!(config.database_url(), "sqlite:other.db");
    }
}
