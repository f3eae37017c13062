//! Login, registration and the cached session.
//!
//! The permission flag of a session is derived at login: the configured administrator email
//! always holds it, everybody else holds it only when their `users` entry grants it.

use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_api::service::{IdentityProvider, SessionCache};
use lead_tracker_api::Settings;
use lead_tracker_db::models::user::user_account::UserAccountModel;
use lead_tracker_db::repository::{Create, FindById, UserRepository};
use lead_tracker_db::utils::to_heapless;
use std::sync::Arc;
use tracing::{info, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct IdentityGate {
    settings: Settings,
    provider: Arc<dyn IdentityProvider>,
    users: Arc<dyn UserRepository>,
    cache: Arc<dyn SessionCache>,
}

impl IdentityGate {
    pub fn new(
        settings: Settings,
        provider: Arc<dyn IdentityProvider>,
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn SessionCache>,
    ) -> Self {
        Self {
            settings,
            provider,
            users,
            cache,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<ActiveSession> {
        let account = match self.provider.sign_in(email, password).await {
            Ok(account) => account,
            Err(e) => {
                warn!(email = %email.trim(), error = %e, "login rejected");
                return Err(e);
            }
        };

        let profile = self.users.find_by_id(account.subject_id).await?;
        let display_name = profile
            .as_ref()
            .map(|p| p.display_name.to_string())
            .unwrap_or_default();
        let can_delete = self.settings.is_admin_email(&account.email)
            || profile.as_ref().is_some_and(|p| p.can_delete);

        let session = ActiveSession::new(account.email, display_name, can_delete);
        self.cache.store(&session)?;
        info!(email = %session.email, can_delete, "logged in");
        Ok(session)
    }

    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
        pin: &str,
    ) -> ApiResult<ActiveSession> {
        if pin != self.settings.master_pin {
            warn!(email = %email.trim(), "registration rejected: wrong pin");
            return Err(ApiError::AuthorizationError(
                "Registration pin is not valid".to_string(),
            ));
        }

        let display_name = display_name.trim();
        let email = email.trim().to_lowercase();
        if display_name.is_empty() || email.is_empty() {
            return Err(ApiError::ValidationError(
                "Display name and email are required".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::ValidationError(format!(
                "Password must have at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let stored_name = to_heapless(display_name, "display_name").map_err(ApiError::ValidationError)?;
        let stored_email = to_heapless(&email, "email").map_err(ApiError::ValidationError)?;

        let account = self.provider.sign_up(&email, password).await?;
        let can_delete = self.settings.is_admin_email(&account.email);
        self.users
            .create(UserAccountModel {
                id: account.subject_id,
                email: stored_email,
                display_name: stored_name,
                can_delete,
            })
            .await?;

        let session = ActiveSession::new(account.email, display_name, can_delete);
        self.cache.store(&session)?;
        info!(email = %session.email, can_delete, "registered new account");
        Ok(session)
    }

    pub fn logout(&self) -> ApiResult<()> {
        self.cache.clear()?;
        info!("logged out");
        Ok(())
    }

    /// Reads the cached session without contacting the identity provider.
    pub fn restore_session(&self) -> ApiResult<Option<ActiveSession>> {
        self.cache.load()
    }
}
