use thiserror::Error;

/// Failures surfaced by the data-access layer
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("client with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound(_))
    }
}
