use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Identity and permission of the logged-in user.
///
/// Derived from the user account at login and cached client-side; every operation that
/// depends on who is calling receives it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub email: String,
    pub display_name: String,
    pub can_delete: bool,
}

impl ActiveSession {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, can_delete: bool) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            can_delete,
        }
    }

    /// Fails with `AuthorizationError` naming `action` unless the session may delete.
    pub fn require_can_delete(&self, action: &str) -> ApiResult<()> {
        if self.can_delete {
            Ok(())
        } else {
            Err(ApiError::AuthorizationError(format!(
                "{} requires the delete permission ({} does not hold it)",
                action, self.email
            )))
        }
    }
}
