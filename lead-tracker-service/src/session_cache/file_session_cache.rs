use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_api::service::session_cache::SessionCache;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Session cache persisted as a single JSON document on the local disk.
pub struct FileSessionCache {
    path: PathBuf,
}

impl FileSessionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ApiError {
    ApiError::StoreError(format!("Session cache {}: {}", path.display(), err))
}

impl SessionCache for FileSessionCache {
    fn load(&self) -> ApiResult<Option<ActiveSession>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, e)),
        };

        match serde_json::from_str(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable cached session");
                Ok(None)
            }
        }
    }

    fn store(&self, session: &ActiveSession) -> ApiResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let json = serde_json::to_string(session)
            .map_err(|e| ApiError::StoreError(format!("Failed to serialize session: {e}")))?;
        fs::write(&self.path, json).map_err(|e| io_error(&self.path, e))
    }

    fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }
}
