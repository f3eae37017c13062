use lead_tracker_api::domain::report::StatusFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "client_status", rename_all = "PascalCase")]
pub enum ClientStatus {
    #[default]
    Pending,
    Closed,
}

impl ClientStatus {
    pub fn matches(&self, filter: StatusFilter) -> bool {
        match filter {
            StatusFilter::All => true,
            StatusFilter::Pending => *self == ClientStatus::Pending,
            StatusFilter::Closed => *self == ClientStatus::Closed,
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Pending => write!(f, "Pending"),
            ClientStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for ClientStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClientStatus::Pending),
            "Closed" => Ok(ClientStatus::Closed),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter() {
        assert!(ClientStatus::Pending.matches(StatusFilter::All));
        assert!(ClientStatus::Pending.matches(StatusFilter::Pending));
        assert!(!ClientStatus::Pending.matches(StatusFilter::Closed));
        assert!(ClientStatus::Closed.matches(StatusFilter::Closed));
    }

    #[test]
    fn test_round_trip_through_str() {
        for status in [ClientStatus::Pending, ClientStatus::Closed] {
            assert_eq!(status.to_string().parse::<ClientStatus>(), Ok(status));
        }
        assert_eq!("Open".parse::<ClientStatus>(), Err(()));
    }
}
