use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// sqlx SQLite url, database file is created when missing
    pub db_connection_string: String,
    pub db_max_connections: u32,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_TRACKER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_TRACKER_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_TRACKER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKET_TRACKER_DB_CONNECTION_STRING")?;
        let db_max_connections = Self::env_var("TICKET_TRACKER_DB_MAX_CONNECTIONS")?.parse()?;
        let max_http_content_len = Self::env_var("TICKET_TRACKER_MAX_HTTP_CONTENT_LEN")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_max_connections,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
