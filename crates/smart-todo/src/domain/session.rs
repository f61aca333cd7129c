//! Session persistence.
//!
//! The issued token and the cached user live in a JSON file under the
//! client directory until logout clears them.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::entities::Session;
use crate::errors::{ClientError, ClientResult};

/// Stores the authenticated session on disk.
pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the client directory.
    pub fn new(client_dir: impl AsRef<Path>) -> Self {
        Self {
            session_path: client_dir.as_ref().join("session.json"),
        }
    }

    /// Load the stored session, if any.
    pub async fn load(&self) -> ClientResult<Option<Session>> {
        match fs::read_to_string(&self.session_path).await {
            Ok(content) => {
                let session: Session = serde_json::from_str(&content)?;
                Ok(Some(session))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::FileReadError {
                path: self.session_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Persist a session.
    pub async fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.session_path, content)
            .await
            .map_err(|e| ClientError::FileWriteError {
                path: self.session_path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Forget the session. No server call is made.
    pub async fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.session_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::FileWriteError {
                path: self.session_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
