//! JSON persistence for sessions under ~/.math-quest/ (or any root directory).

use super::types::Session;
use crate::constants::DATA_DIR_NAME;
use crate::error::{QuestError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Stores one `<session_id>.json` file per session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store in `~/.math-quest/`.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(QuestError::NoHomeDir)?;
        Ok(Self::new(home_dir.join(DATA_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(session_id)))
    }

    pub fn exists(&self, session_id: &str) -> bool {
        self.path_for(session_id).exists()
    }

    /// Load a session. Fails on a missing or unreadable file.
    pub fn load(&self, session_id: &str) -> Result<Session> {
        let json = fs::read_to_string(self.path_for(session_id))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load a session, starting fresh when the file is missing or corrupt.
    pub fn load_or_default(&self, session_id: &str) -> Session {
        if !self.exists(session_id) {
            return Session::new(session_id);
        }
        match self.load(session_id) {
            Ok(mut session) => {
                if session.session_id.is_empty() {
                    session.session_id = session_id.to_string();
                }
                session
            }
            Err(e) => {
                warn!(session_id, error = %e, "unreadable session file, starting fresh");
                Session::new(session_id)
            }
        }
    }

    /// Save as pretty-printed JSON, creating the root directory if needed.
    pub fn save(&self, session: &Session) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(&session.session_id);
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&path, json)?;
        info!(session_id = %session.session_id, coins = session.coins, "session saved");
        Ok(path)
    }
}

/// Keep ids from escaping the store directory.
fn file_stem(session_id: &str) -> String {
    let stem: String = session_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "default".to_string()
    } else {
        stem
    }
}
