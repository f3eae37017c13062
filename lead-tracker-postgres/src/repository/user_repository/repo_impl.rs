use lead_tracker_db::models::user::user_account::UserAccountModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use std::error::Error;
use std::sync::Arc;

pub const USERS_COLLECTION: &str = "users";

pub struct UserRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl UserRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for UserAccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserAccountModel {
            id: row.try_get("id")?,
            email: get_heapless_string(row, "email")?,
            display_name: get_heapless_string(row, "display_name")?,
            can_delete: row.try_get("can_delete")?,
        })
    }
}
