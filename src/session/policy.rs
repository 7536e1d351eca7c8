use chrono::{DateTime, Duration, Utc};

use crate::models::{SessionUser, UserRole};
use super::{AuthSession, SessionError, SessionStore};

/// Sessions last a fixed time from login.
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub ttl: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
        }
    }
}

impl SessionPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn is_expired(&self, session: &AuthSession, now: DateTime<Utc>) -> bool {
        now - session.login_time >= self.ttl
    }

    /// Returns the stored session if it is still valid.
    ///
    /// Expired or unreadable sessions are cleared and reported as signed out.
    pub fn restore(
        &self,
        store: &dyn SessionStore,
        now: DateTime<Utc>,
    ) -> Result<Option<AuthSession>, SessionError> {
        let session = match store.load() {
            Ok(Some(session)) => session,
            Ok(None) => return Ok(None),
            Err(SessionError::Corrupt(detail)) => {
                tracing::warn!(detail = %detail, "Discarding unreadable stored session");
                store.clear()?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if self.is_expired(&session, now) {
            tracing::info!(user_id = session.user.user_id, "Stored session expired");
            store.clear()?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    pub fn login(
        &self,
        store: &dyn SessionStore,
        user: SessionUser,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<AuthSession, SessionError> {
        let session = AuthSession {
            user,
            role,
            login_time: now,
        };
        store.save(&session)?;
        tracing::info!(user_id = session.user.user_id, role = role.as_str(), "Signed in");
        Ok(session)
    }

    pub fn logout(&self, store: &dyn SessionStore) -> Result<(), SessionError> {
        store.clear()
    }
}
