pub mod board;
pub mod workflow;

pub use board::{FollowUpBoard, MutationId, MutationState, TrackedMutation};
pub use workflow::FollowUpWorkflow;
