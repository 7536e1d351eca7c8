//! Signed-in user state.
//!
//! The session lives behind `SessionStore` and is handed to the HTTP layer
//! explicitly; nothing reads it as ambient global state. `SessionPolicy`
//! applies the fixed time-to-live from login.

mod policy;
mod store;

pub use policy::*;
pub use store::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{SessionUser, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub role: UserRole,
    pub login_time: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored session is unreadable: {0}")]
    Corrupt(String),

    #[error("Session lock poisoned")]
    LockPoisoned,
}
