#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("table {0} does not exist")]
    MissingTable(&'static str),

    #[error("invalid ticket status: {0}")]
    InvalidStatus(String),

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
