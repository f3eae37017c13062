use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiResult;

/// Input for registering a new client record.
///
/// Company, contact and email are required; the remaining fields are optional and blank
/// optional values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewClientFields {
    #[validate(length(min = 1, max = 100, message = "company is required (max 100 chars)"))]
    pub company: String,

    #[validate(length(min = 1, max = 100, message = "contact name is required (max 100 chars)"))]
    pub contact_name: String,

    #[validate(length(min = 1, max = 100, message = "email is required (max 100 chars)"))]
    pub email: String,

    #[validate(length(max = 100))]
    pub full_name: Option<String>,

    #[validate(length(max = 100))]
    pub industry: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    pub comment: Option<String>,
}

impl NewClientFields {
    pub fn new(
        company: impl Into<String>,
        contact_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            contact_name: contact_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Trims every field and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            company: self.company.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            email: self.email.trim().to_string(),
            full_name: optional(self.full_name),
            industry: optional(self.industry),
            phone: optional(self.phone),
            comment: optional(self.comment),
        }
    }

    /// Normalizes and validates, returning the cleaned fields.
    pub fn validated(self) -> ApiResult<Self> {
        let fields = self.normalized();
        fields.validate()?;
        Ok(fields)
    }
}
