use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{AuthSession, SessionError};

/// Persistence for the signed-in user. One session at a time.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<AuthSession>, SessionError>;
    fn save(&self, session: &AuthSession) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// JSON file on disk, the portal's equivalent of browser local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;

        // Readers never see a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e)),
        }
    }
}

/// In-process store. Nothing survives a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        let slot = self.slot.lock().map_err(|_| SessionError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        let mut slot = self.slot.lock().map_err(|_| SessionError::LockPoisoned)?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.slot.lock().map_err(|_| SessionError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
