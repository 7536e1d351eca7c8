//! API endpoint handlers, one module per page of the portal.

pub mod appointments;
pub mod auth;
pub mod departments;
pub mod health;
pub mod history;
pub mod payments;
pub mod sessions;
