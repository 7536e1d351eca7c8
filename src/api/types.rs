//! Shared state for the portal API layer.

use std::sync::Arc;

use chrono::Utc;

use crate::api::error::ApiError;
use crate::client::ClinicApiClient;
use crate::models::UserRole;
use crate::session::{AuthSession, SessionPolicy, SessionStore};

/// Shared context for all API routes.
///
/// The session is always read through `sessions` and `policy`, so every
/// handler sees the same expiry rules.
#[derive(Clone)]
pub struct ApiContext {
    pub client: Arc<ClinicApiClient>,
    pub sessions: Arc<dyn SessionStore>,
    pub policy: SessionPolicy,
}

impl ApiContext {
    pub fn new(
        client: Arc<ClinicApiClient>,
        sessions: Arc<dyn SessionStore>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            client,
            sessions,
            policy,
        }
    }

    /// The signed-in session, or `Unauthorized` when there is none or it
    /// has expired.
    pub fn current_session(&self) -> Result<AuthSession, ApiError> {
        self.policy
            .restore(self.sessions.as_ref(), Utc::now())?
            .ok_or(ApiError::Unauthorized)
    }

    /// Like `current_session`, but the user must also hold `role`.
    pub fn require_role(&self, role: UserRole) -> Result<AuthSession, ApiError> {
        let session = self.current_session()?;
        if session.role != role {
            return Err(ApiError::Forbidden(format!(
                "This page is for {} accounts",
                role.as_str()
            )));
        }
        Ok(session)
    }
}
