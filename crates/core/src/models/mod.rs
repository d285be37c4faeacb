pub mod appointment;
pub mod employee;
pub mod service;
pub mod shop;
pub mod time_slot;
pub mod user;
