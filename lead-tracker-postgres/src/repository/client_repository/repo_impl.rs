use lead_tracker_db::models::client::client_record::ClientRecordModel;
use lead_tracker_db::models::client::follow_up_note::FollowUpNote;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::types::Json;
use sqlx::Row;
use std::error::Error;
use std::sync::Arc;

pub const CLIENTS_COLLECTION: &str = "clients";

pub struct ClientRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl ClientRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ClientRecordModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let notes: Json<Vec<FollowUpNote>> = row.try_get("notes")?;
        Ok(ClientRecordModel {
            id: row.try_get("id")?,
            company: get_heapless_string(row, "company")?,
            contact_name: get_heapless_string(row, "contact_name")?,
            email: get_heapless_string(row, "email")?,
            full_name: get_optional_heapless_string(row, "full_name")?,
            industry: get_optional_heapless_string(row, "industry")?,
            phone: get_optional_heapless_string(row, "phone")?,
            comment: row.try_get("comment")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            created_by: get_heapless_string(row, "created_by")?,
            notes: notes.0,
        })
    }
}
