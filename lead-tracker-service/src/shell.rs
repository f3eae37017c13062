//! Session and screen state of the application shell.

use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_db::repository::Subscription;
use std::sync::Arc;
use tracing::{debug, info};

use crate::identity_gate::IdentityGate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Clients,
    FollowUp,
    Reports,
    UserAdmin,
}

/// Holds the logged-in identity, the active screen and the live subscription of that
/// screen. Without a session the shell is locked behind the identity gate.
pub struct Shell {
    gate: Arc<IdentityGate>,
    session: Option<ActiveSession>,
    screen: Screen,
    subscription: Option<Subscription>,
}

impl Shell {
    pub fn new(gate: Arc<IdentityGate>) -> Self {
        Self {
            gate,
            session: None,
            screen: Screen::Menu,
            subscription: None,
        }
    }

    /// Unlocks the shell with the cached session, if any.
    pub fn start(&mut self) -> ApiResult<Option<&ActiveSession>> {
        self.session = self.gate.restore_session()?;
        self.screen = Screen::Menu;
        Ok(self.session.as_ref())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<&ActiveSession> {
        let session = self.gate.login(email, password).await?;
        Ok(self.unlock(session))
    }

    pub async fn register(
        &mut self,
        display_name: &str,
        email: &str,
        password: &str,
        pin: &str,
    ) -> ApiResult<&ActiveSession> {
        let session = self.gate.register(display_name, email, password, pin).await?;
        Ok(self.unlock(session))
    }

    fn unlock(&mut self, session: ActiveSession) -> &ActiveSession {
        self.release_subscription();
        self.screen = Screen::Menu;
        self.session.insert(session)
    }

    pub fn session(&self) -> Option<&ActiveSession> {
        self.session.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.session.is_none()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    /// Switches screens, releasing the subscription of the screen being left.
    pub fn navigate(&mut self, screen: Screen) -> ApiResult<()> {
        let session = self.session.as_ref().ok_or_else(|| {
            ApiError::AuthorizationError("Login required".to_string())
        })?;
        if screen == Screen::UserAdmin {
            session.require_can_delete("User administration")?;
        }
        if screen != self.screen {
            self.release_subscription();
            debug!(from = ?self.screen, to = ?screen, "navigate");
            self.screen = screen;
        }
        Ok(())
    }

    /// Hands the live subscription of the active screen to the shell.
    pub fn attach(&mut self, subscription: Subscription) {
        self.release_subscription();
        self.subscription = Some(subscription);
    }

    /// Clears the session, the screen and the active subscription.
    pub fn logout(&mut self) -> ApiResult<()> {
        self.release_subscription();
        self.session = None;
        self.screen = Screen::Menu;
        self.gate.logout()?;
        info!("shell locked");
        Ok(())
    }

    fn release_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
    }
}
