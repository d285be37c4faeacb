use std::env;
use std::path::PathBuf;

use barberbook_client::ClientConfig;
use eyre::Result;
use tracing::Level;

/// Configuration for the interactive client.
///
/// All values come from environment variables:
///
/// - `USER_SERVICE_URL` / `SHOP_SERVICE_URL` / `APPOINTMENT_SERVICE_URL`
///   (see `barberbook_client::config`)
/// - `BARBERBOOK_SESSION_FILE`: path of the session file
///   (default: `.barberbook/session.json`)
/// - `LOG_LEVEL`: logging level (default: "info")
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URLs for the backend services.
    pub client: ClientConfig,

    /// Where the session store lives on disk.
    pub session_file: PathBuf,

    /// Log level for the application.
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let client = ClientConfig::from_env();

        let session_file = env::var("BARBERBOOK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".barberbook/session.json"));

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            client,
            session_file,
            log_level,
        })
    }
}
