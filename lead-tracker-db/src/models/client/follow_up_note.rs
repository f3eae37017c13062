use serde::{Deserialize, Serialize};

use crate::utils::now_timestamp;

/// A timestamped free-text entry in a client record's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpNote {
    /// Formatted with `utils::TIMESTAMP_FORMAT`
    pub timestamp: String,
    pub text: String,
}

impl FollowUpNote {
    /// A note stamped with the current local time.
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            timestamp: now_timestamp(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for FollowUpNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.timestamp, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_stored_shape() {
        let note = FollowUpNote {
            timestamp: "2024-05-03 09:00:00".into(),
            text: "Called back".into(),
        };
        assert_eq!(note.to_string(), "2024-05-03 09:00:00: Called back");

        // Notes are kept as JSON objects inside the record's note list.
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::json!({"timestamp": "2024-05-03 09:00:00", "text": "Called back"})
        );
    }
}
