//! # BarberBook Core
//!
//! Domain types and pure logic for the BarberBook booking client. This crate
//! holds everything that does not touch the network or the filesystem:
//!
//! - **Models**: wire types for the user, shop, and appointment services
//! - **Availability**: the bookable-slot filter applied to availability feeds
//! - **Time formatting**: normalization of user-facing times to `HH:MM:SS`
//! - **Session**: token claims inspection and session lifecycle state
//! - **Validation**: client-side form checks run before any network call
//!
//! The current date and wall-clock time are always passed in as parameters,
//! never read ambiently, so every function here is deterministic under test.

pub mod availability;
pub mod errors;
pub mod models;
pub mod session;
pub mod time_format;
pub mod validation;
