pub mod client_registry;
pub mod follow_up;
pub mod identity_gate;
pub mod lead_tracker;
pub mod report;
pub mod session_cache;
pub mod shell;
pub mod user_admin;

pub use client_registry::ClientRegistry;
pub use follow_up::{FollowUpBoard, FollowUpWorkflow, MutationState, TrackedMutation};
pub use identity_gate::IdentityGate;
pub use lead_tracker::LeadTracker;
pub use report::{DocumentEncoder, ReportEncoder, ReportView, SpreadsheetEncoder};
pub use session_cache::{FileSessionCache, MemorySessionCache};
pub use shell::{Screen, Shell};
pub use user_admin::UserAdministration;

#[cfg(test)]
pub mod test_utils;
