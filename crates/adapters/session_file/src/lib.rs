//! # alumnet-adapter-session-file
//!
//! File-backed session provider: the admin bearer token persisted as a single
//! line on disk, the native counterpart of the browser client keeping it in
//! local storage. An absent or empty file means nobody is logged in.
//!
//! ## Dependency rule
//!
//! Depends on `alumnet-app` (port traits) and `alumnet-domain` only.

use std::io;
use std::path::{Path, PathBuf};

use alumnet_app::ports::session::SessionProvider;
use alumnet_domain::auth::BearerToken;

/// Session provider reading the bearer token from a file.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this session reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating the directories or writing the
    /// file.
    pub fn store(&self, token: &BearerToken) -> io::Result<()> {
        let parent = self.path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, token.as_str())
    }

    /// Remove the persisted token. Missing file counts as already logged out.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than the file not existing.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

impl SessionProvider for FileSession {
    fn bearer_token(&self) -> Option<BearerToken> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(BearerToken::new(token))
                }
            }
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "failed to read session file");
                }
                None
            }
        }
    }
}
