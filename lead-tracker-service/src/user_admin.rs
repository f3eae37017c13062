//! Management of the `users` collection.
//!
//! Everything except renaming requires the delete permission. The collection always keeps
//! at least one account holding that permission. The configured administrator email holds it
//! whatever its stored flag says, the same way login derives it.

use lead_tracker_api::domain::session::ActiveSession;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_api::Settings;
use lead_tracker_db::models::user::user_account::{UserAccountModel, UserUpdate};
use lead_tracker_db::repository::{DeleteById, LoadAll, Subscribe, Subscription, UpdateById, UserRepository};
use lead_tracker_db::utils::to_heapless;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct UserAdministration {
    settings: Settings,
    users: Arc<dyn UserRepository>,
}

impl UserAdministration {
    pub fn new(settings: Settings, users: Arc<dyn UserRepository>) -> Self {
        Self { settings, users }
    }

    /// Whether a login as `account` would be granted the delete permission.
    pub fn holds_permission(&self, account: &UserAccountModel) -> bool {
        account.can_delete || self.settings.is_admin_email(&account.email)
    }

    /// All accounts, or nothing (without contacting the store) when the caller may not
    /// administer users.
    pub async fn list(&self, session: &ActiveSession) -> ApiResult<Vec<UserAccountModel>> {
        if !session.can_delete {
            return Ok(Vec::new());
        }
        Ok(self.users.load_all().await?)
    }

    pub async fn subscribe<F>(&self, session: &ActiveSession, on_change: F) -> ApiResult<Subscription>
    where
        F: Fn(Vec<UserAccountModel>) + Send + Sync + 'static,
    {
        session.require_can_delete("Managing users")?;
        Ok(self.users.subscribe(Arc::new(on_change)).await?)
    }

    pub async fn rename(
        &self,
        session: &ActiveSession,
        id: Uuid,
        new_name: &str,
    ) -> ApiResult<UserAccountModel> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ApiError::ValidationError("Display name is required".to_string()));
        }
        let display_name = to_heapless(new_name, "display_name").map_err(ApiError::ValidationError)?;

        let updated = self
            .users
            .update_by_id(id, UserUpdate::display_name(display_name))
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {id}")))?;
        info!(user_id = %id, renamed_by = %session.email, "user renamed");
        Ok(updated)
    }

    /// Flips the delete permission of an account.
    pub async fn toggle_permission(
        &self,
        session: &ActiveSession,
        id: Uuid,
    ) -> ApiResult<UserAccountModel> {
        session.require_can_delete("Changing permissions")?;
        let (target, other_holders) = self.load_target(id).await?;

        let mut toggled = target.clone();
        toggled.can_delete = !target.can_delete;
        if self.holds_permission(&target) && !self.holds_permission(&toggled) && other_holders == 0 {
            return Err(refuse_last_admin(session, id, "revoke the permission of"));
        }

        let updated = self
            .users
            .update_by_id(id, UserUpdate::can_delete(!target.can_delete))
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {id}")))?;
        info!(user_id = %id, can_delete = updated.can_delete, changed_by = %session.email, "permission changed");
        Ok(updated)
    }

    /// Removes an account. The caller has already confirmed the deletion with the user.
    pub async fn delete(&self, session: &ActiveSession, id: Uuid) -> ApiResult<()> {
        session.require_can_delete("Deleting a user")?;
        let (target, other_holders) = self.load_target(id).await?;
        if self.holds_permission(&target) && other_holders == 0 {
            return Err(refuse_last_admin(session, id, "delete"));
        }

        if !self.users.delete_by_id(id).await? {
            return Err(ApiError::NotFound(format!("User {id}")));
        }
        info!(user_id = %id, deleted_by = %session.email, "user deleted");
        Ok(())
    }

    /// Loads the target account along with the number of other accounts holding the permission.
    async fn load_target(&self, id: Uuid) -> ApiResult<(UserAccountModel, usize)> {
        let users = self.users.load_all().await?;
        let target = users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("User {id}")))?;

        let other_holders = users
            .iter()
            .filter(|u| u.id != id && self.holds_permission(u))
            .count();
        Ok((target, other_holders))
    }
}

fn refuse_last_admin(session: &ActiveSession, id: Uuid, action: &str) -> ApiError {
    warn!(user_id = %id, requested_by = %session.email, "refusing to remove the last administrator");
    ApiError::AuthorizationError(format!("Cannot {action} the last account allowed to delete"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{admin_session, member_session, TestBackend, MASTER_PIN};
    use lead_tracker_db::repository::Create;
    use tokio::sync::mpsc;
    use tokio_test::assert_ok;

    fn account(email: &str, can_delete: bool) -> UserAccountModel {
        UserAccountModel {
            id: Uuid::new_v4(),
            email: to_heapless(email, "email").unwrap(),
            display_name: to_heapless("Someone", "display_name").unwrap(),
            can_delete,
        }
    }

    async fn seed(backend: &TestBackend) -> (UserAccountModel, UserAccountModel) {
        let admin = backend.store.users().create(account("admin@example.com", true)).await.unwrap();
        let member = backend.store.users().create(account("ana@example.com", false)).await.unwrap();
        (admin, member)
    }

    #[tokio::test]
    async fn test_list_requires_permission() -> ApiResult<()> {
        let backend = TestBackend::new();
        seed(&backend).await;
        let admin_users = backend.user_admin();

        assert_eq!(admin_users.list(&admin_session()).await?.len(), 2);

        backend.store.users().set_unavailable(true);
        // No store call is made for an unprivileged caller.
        assert!(admin_users.list(&member_session()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_permission_is_visible_in_list() -> ApiResult<()> {
        let backend = TestBackend::new();
        let (_, member) = seed(&backend).await;
        let admin_users = backend.user_admin();

        let updated = admin_users.toggle_permission(&admin_session(), member.id).await?;
        assert!(updated.can_delete);

        let listed = admin_users.list(&admin_session()).await?;
        assert!(listed.iter().find(|u| u.id == member.id).expect("member").can_delete);

        let updated = admin_users.toggle_permission(&admin_session(), member.id).await?;
        assert!(!updated.can_delete);
        Ok(())
    }

    #[tokio::test]
    async fn test_member_cannot_toggle_or_delete() {
        let backend = TestBackend::new();
        let (admin, member) = seed(&backend).await;
        let admin_users = backend.user_admin();
        let writes = backend.store.users().write_count();

        assert!(matches!(
            admin_users.toggle_permission(&member_session(), member.id).await,
            Err(ApiError::AuthorizationError(_))
        ));
        assert!(matches!(
            admin_users.delete(&member_session(), admin.id).await,
            Err(ApiError::AuthorizationError(_))
        ));
        assert!(matches!(
            admin_users.subscribe(&member_session(), |_| {}).await,
            Err(ApiError::AuthorizationError(_))
        ));
        assert_eq!(backend.store.users().write_count(), writes);
    }

    #[tokio::test]
    async fn test_last_administrator_is_kept() -> ApiResult<()> {
        let backend = TestBackend::new();
        let boss = backend.store.users().create(account("boss@example.com", true)).await.unwrap();
        let member = backend.store.users().create(account("ana@example.com", false)).await.unwrap();
        let admin_users = backend.user_admin();

        assert!(matches!(
            admin_users.toggle_permission(&admin_session(), boss.id).await,
            Err(ApiError::AuthorizationError(_))
        ));
        assert!(matches!(
            admin_users.delete(&admin_session(), boss.id).await,
            Err(ApiError::AuthorizationError(_))
        ));

        // With a second holder the first one may step down.
        admin_users.toggle_permission(&admin_session(), member.id).await?;
        let demoted = admin_users.toggle_permission(&admin_session(), boss.id).await?;
        assert!(!demoted.can_delete);
        Ok(())
    }

    #[tokio::test]
    async fn test_administrator_email_counts_as_holder() -> ApiResult<()> {
        let backend = TestBackend::new();
        let (admin, _) = seed(&backend).await;
        let boss = backend.store.users().create(account("boss@example.com", true)).await.unwrap();
        let admin_users = backend.user_admin();

        // Clearing the stored flag of the administrator email leaves it a holder.
        let cleared = admin_users.toggle_permission(&admin_session(), admin.id).await?;
        assert!(!cleared.can_delete);
        assert!(admin_users.holds_permission(&cleared));

        let demoted = admin_users.toggle_permission(&admin_session(), boss.id).await?;
        assert!(!demoted.can_delete);
        assert_ok!(admin_users.delete(&admin_session(), boss.id).await);

        assert!(matches!(
            admin_users.delete(&admin_session(), admin.id).await,
            Err(ApiError::AuthorizationError(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_toggled_permission_applies_at_next_login() -> ApiResult<()> {
        let backend = TestBackend::new();
        let gate = backend.identity_gate();
        let admin_users = backend.user_admin();
        let admin = gate.register("Boss", "admin@example.com", "secret1", MASTER_PIN).await?;
        let member = gate.register("Ana", "ana@example.com", "secret1", MASTER_PIN).await?;
        assert!(!member.can_delete);

        let member_id = admin_users
            .list(&admin)
            .await?
            .into_iter()
            .find(|u| u.email.as_str() == "ana@example.com")
            .expect("member listed")
            .id;

        admin_users.toggle_permission(&admin, member_id).await?;
        let granted = gate.login("ana@example.com", "secret1").await?;
        assert!(granted.can_delete);
        assert_eq!(gate.restore_session()?, Some(granted));

        admin_users.toggle_permission(&admin, member_id).await?;
        assert!(!gate.login("ana@example.com", "secret1").await?.can_delete);
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_and_delete() -> ApiResult<()> {
        let backend = TestBackend::new();
        let (_, member) = seed(&backend).await;
        let admin_users = backend.user_admin();

        let renamed = admin_users.rename(&member_session(), member.id, "  Ana Maria ").await?;
        assert_eq!(renamed.display_name.as_str(), "Ana Maria");
        assert!(matches!(
            admin_users.rename(&member_session(), member.id, "   ").await,
            Err(ApiError::ValidationError(_))
        ));
        let accented = "Peña".repeat(25);
        let renamed = admin_users.rename(&member_session(), member.id, &accented).await?;
        assert_eq!(renamed.display_name.as_str(), accented);
        assert!(matches!(
            admin_users.rename(&member_session(), member.id, &format!("{accented}ñ")).await,
            Err(ApiError::ValidationError(_))
        ));
        assert!(matches!(
            admin_users.rename(&member_session(), Uuid::new_v4(), "Ghost").await,
            Err(ApiError::NotFound(_))
        ));

        assert_ok!(admin_users.delete(&admin_session(), member.id).await);
        assert_eq!(admin_users.list(&admin_session()).await?.len(), 1);
        assert!(matches!(
            admin_users.delete(&admin_session(), member.id).await,
            Err(ApiError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_delivers_users() -> ApiResult<()> {
        let backend = TestBackend::new();
        seed(&backend).await;
        let admin_users = backend.user_admin();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = admin_users
            .subscribe(&admin_session(), move |users| {
                let _ = tx.send(users);
            })
            .await?;
        assert_eq!(rx.recv().await.expect("initial snapshot").len(), 2);
        subscription.release();
        Ok(())
    }
}
