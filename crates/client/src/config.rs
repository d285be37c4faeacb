//! Client configuration.
//!
//! Base URLs for the three backend services, loaded from the environment:
//!
//! - `USER_SERVICE_URL` (default: `http://localhost:8081`)
//! - `SHOP_SERVICE_URL` (default: `http://localhost:8082`)
//! - `APPOINTMENT_SERVICE_URL` (default: `http://localhost:8083`)

use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the user (identity) service.
    pub user_service_url: String,

    /// Base URL of the shop service.
    pub shop_service_url: String,

    /// Base URL of the appointment service.
    pub appointment_service_url: String,
}

impl ClientConfig {
    /// Load service base URLs from environment variables, falling back to
    /// the local development ports.
    pub fn from_env() -> Self {
        Self {
            user_service_url: base_url("USER_SERVICE_URL", "http://localhost:8081"),
            shop_service_url: base_url("SHOP_SERVICE_URL", "http://localhost:8082"),
            appointment_service_url: base_url("APPOINTMENT_SERVICE_URL", "http://localhost:8083"),
        }
    }
}

fn base_url(var: &str, default: &str) -> String {
    let url = env::var(var).unwrap_or_else(|_| default.to_string());
    url.trim_end_matches('/').to_string()
}
