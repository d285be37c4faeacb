//! # BarberBook App
//!
//! The controller layer of the client. Each workflow owns the state one of
//! the original pages held and exposes operations the user can trigger; the
//! console adapter in [`console`] is the only place that prints anything.
//!
//! - [`guard`]: authentication gate for protected flows
//! - [`workflows::auth`]: login, registration, profile editing
//! - [`workflows::shops`]: public listing, search, shop detail
//! - [`workflows::booking`]: slot selection and booking/reschedule
//! - [`workflows::dashboard`]: the customer's appointments
//! - [`workflows::owner`]: shop-owner management
//!
//! Workflows are generic over the API traits from `barberbook-client`, so
//! tests drive them with mocks and the binary drives them with the real
//! `ApiClient`.

pub mod config;
pub mod console;
pub mod guard;
pub mod view;
pub mod workflows;
