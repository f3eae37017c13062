use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// Application-side profile of an identity provider account, stored in the `users`
/// collection under the provider's subject id. Text fields hold up to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccountModel {
    /// Subject id issued by the identity provider
    pub id: Uuid,

    /// Lower-cased, unique and immutable
    pub email: HeaplessString<400>,

    pub display_name: HeaplessString<400>,

    /// Grants deletion of records and user administration
    pub can_delete: bool,
}

impl Identifiable for UserAccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Partial update of a user account. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub display_name: Option<HeaplessString<400>>,
    pub can_delete: Option<bool>,
}

impl UserUpdate {
    pub fn display_name(display_name: HeaplessString<400>) -> Self {
        Self {
            display_name: Some(display_name),
            can_delete: None,
        }
    }

    pub fn can_delete(can_delete: bool) -> Self {
        Self {
            display_name: None,
            can_delete: Some(can_delete),
        }
    }

    pub fn apply_to(&self, account: &mut UserAccountModel) {
        if let Some(name) = &self.display_name {
            account.display_name = name.clone();
        }
        if let Some(flag) = self.can_delete {
            account.can_delete = flag;
        }
    }
}
