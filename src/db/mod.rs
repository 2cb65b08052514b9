mod error;

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::Client;

pub use error::DbError;

pub type Result<T> = std::result::Result<T, DbError>;

/// Single connection to the embedded SQLite database
pub struct Database {
    conn: SqliteConnection,
}

impl Database {
    /// Open the database named in the configuration
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(config.database_url()).await
    }

    /// Open `url`, creating an empty database file if none exists.
    /// The schema is never created here.
    pub async fn connect(url: &str) -> Result<Self> {
        let connect_err = |source: sqlx::Error| DbError::Connect {
            url: url.to_string(),
            source,
        };
        let options = SqliteConnectOptions::from_str(url)
            .map_err(connect_err)?
            .create_if_missing(true);
        let conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(connect_err)?;
        info!(url, "database opened");

        Ok(Self { conn })
    }

    /// Close the connection. Consumes the handle so it can only happen once.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        info!("database closed");
        Ok(())
    }

    // Client operations

    /// Insert a client and return the id assigned by the database.
    /// The `id` field of the argument is ignored.
    pub async fn insert_client(&mut self, client: &Client) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO clients (fio, login, birthday, email) VALUES ($1, $2, $3, $4)",
        )
        .bind(client.full_name.as_str())
        .bind(client.login.as_str())
        .bind(client.birthday.as_str())
        .bind(client.email.as_str())
        .execute(&mut self.conn)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "client inserted");

        Ok(id)
    }

    /// Fetch one client. Zero matching rows is reported as [`DbError::NotFound`].
    pub async fn select_client(&mut self, id: i64) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, fio, login, birthday, email FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&mut self.conn)
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => DbError::NotFound(id),
            other => DbError::Sqlx(other),
        })?;
        debug!(id, "client selected");

        Ok(client)
    }

    /// Change the login of a client.
    ///
    /// An id that matches no row is not an error; the call succeeds and
    /// nothing changes.
    pub async fn update_client_login(&mut self, login: &str, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE clients SET login = $1 WHERE id = $2")
            .bind(login)
            .bind(id)
            .execute(&mut self.conn)
            .await?;
        debug!(id, rows_affected = result.rows_affected(), "client login updated");

        Ok(())
    }

    /// Delete a client. Deleting a missing id succeeds, same as update.
    pub async fn delete_client(&mut self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut self.conn)
            .await?;
        debug!(id, rows_affected = result.rows_affected(), "client deleted");

        Ok(())
    }
}

#[cfg(test)]
const SCHEMA: &str = include_str!("../../schema.sql");

#[cfg(test)]
async fn create_schema(db: &mut Database) {
    sqlx::query(SCHEMA).execute(&mut db.conn).await.unwrap();
}

/// In-memory database with the clients table in place
#[cfg(test)]
pub(crate) async fn test_db() -> Database {
    let mut db = Database::connect("sqlite::memory:").await.unwrap();
    create_schema(&mut db).await;
    db
}
