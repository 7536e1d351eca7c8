//! Typed data-transfer schemas for the clinic API.
//!
//! Every payload is decoded into one of these structs at the client
//! boundary; nothing downstream works on untyped JSON.

pub mod appointment;
pub mod clinic_session;
pub mod diagnosis;
pub mod encounter;
pub mod enums;
pub mod history;
pub mod lab;
pub mod payment;
pub mod prescription;
pub mod profile;
pub mod requests;
pub mod timestamp;

pub use appointment::*;
pub use clinic_session::*;
pub use diagnosis::*;
pub use encounter::*;
pub use enums::*;
pub use history::*;
pub use lab::*;
pub use payment::*;
pub use prescription::*;
pub use profile::*;
pub use requests::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
