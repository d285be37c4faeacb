//! # BarberBook API Client
//!
//! REST client for the three BarberBook backend services:
//!
//! - **user service** (default `http://localhost:8081`): identity and
//!   profile operations
//! - **shop service** (default `http://localhost:8082`): shops, services,
//!   employees, owner management
//! - **appointment service** (default `http://localhost:8083`):
//!   availability feeds and the appointment lifecycle
//!
//! Every call sends and receives JSON; protected calls carry an
//! `Authorization: Bearer <token>` header. The API surface is expressed as
//! one trait per backend concern ([`users::UserApi`], [`shops::ShopApi`],
//! [`availability::AvailabilityApi`], [`appointments::AppointmentApi`]),
//! all implemented by [`ApiClient`]; the [`mock`] module provides mockall
//! doubles for workflow tests.
//!
//! Failure mapping is uniform (see [`http`]): connection problems become
//! [`BookingError::Network`], non-2xx responses become
//! [`BookingError::Api`] carrying the server's `message` field when the
//! body has one. There are no retries and no client-side timeouts.
//!
//! [`BookingError::Network`]: barberbook_core::errors::BookingError::Network
//! [`BookingError::Api`]: barberbook_core::errors::BookingError::Api

pub mod appointments;
pub mod availability;
pub mod config;
pub mod endpoints;
pub mod http;
pub mod mock;
pub mod shops;
pub mod users;

pub use appointments::AppointmentApi;
pub use availability::AvailabilityApi;
pub use config::ClientConfig;
pub use shops::ShopApi;
pub use users::UserApi;

/// Concrete client over `reqwest`, shared by every API trait impl.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
