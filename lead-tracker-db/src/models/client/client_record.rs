use heapless::String as HeaplessString;
use lead_tracker_api::domain::client_fields::NewClientFields;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client::common_enums::ClientStatus;
use crate::models::client::follow_up_note::FollowUpNote;
use crate::models::identifiable::Identifiable;
use crate::utils::{to_heapless, to_optional_heapless};

/// # Documentation
/// A client or lead tracked by the team, stored in the `clients` collection.
/// `notes` is append-only: entries are never removed or reordered once written.
/// Bounded fields are sized in bytes (`utils::BYTES_PER_CHAR` per character), so the
/// 100 and 50 character limits hold for any script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecordModel {
    /// Assigned by the store on creation (`Uuid::nil()` until then)
    pub id: Uuid,

    /// Company or brand name
    pub company: HeaplessString<400>,

    /// Person to contact at the company
    pub contact_name: HeaplessString<400>,

    pub email: HeaplessString<400>,

    pub full_name: Option<HeaplessString<400>>,

    /// Line of business
    pub industry: Option<HeaplessString<400>>,

    pub phone: Option<HeaplessString<200>>,

    pub comment: Option<String>,

    pub status: ClientStatus,

    /// Creation time, formatted once with `utils::TIMESTAMP_FORMAT` and never recomputed
    pub created_at: String,

    /// Email of the user who registered the record
    pub created_by: HeaplessString<400>,

    /// Follow-up history in chronological order
    pub notes: Vec<FollowUpNote>,
}

impl ClientRecordModel {
    /// Builds an unsaved record from validated input.
    pub fn from_fields(
        fields: &NewClientFields,
        created_by: &str,
        created_at: String,
    ) -> Result<Self, String> {
        Ok(Self {
            id: Uuid::nil(),
            company: to_heapless(&fields.company, "company")?,
            contact_name: to_heapless(&fields.contact_name, "contact_name")?,
            email: to_heapless(&fields.email, "email")?,
            full_name: to_optional_heapless(fields.full_name.as_deref(), "full_name")?,
            industry: to_optional_heapless(fields.industry.as_deref(), "industry")?,
            phone: to_optional_heapless(fields.phone.as_deref(), "phone")?,
            comment: fields.comment.clone(),
            status: ClientStatus::Pending,
            created_at,
            created_by: to_heapless(created_by, "created_by")?,
            notes: Vec::new(),
        })
    }
}

impl Identifiable for ClientRecordModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Partial update of a client record.
///
/// The note is appended by the store itself, never by rewriting the whole note list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientUpdate {
    pub append_note: Option<FollowUpNote>,
    pub status: Option<ClientStatus>,
}

impl ClientUpdate {
    pub fn note(note: FollowUpNote, status: Option<ClientStatus>) -> Self {
        Self {
            append_note: Some(note),
            status,
        }
    }

    pub fn status(status: ClientStatus) -> Self {
        Self {
            append_note: None,
            status: Some(status),
        }
    }

    pub fn apply_to(&self, record: &mut ClientRecordModel) {
        if let Some(note) = &self.append_note {
            record.notes.push(note.clone());
        }
        if let Some(status) = self.status {
            record.status = status;
        }
    }
}
