pub mod client;
pub mod identifiable;
pub mod user;

// Re-exports
pub use client::*;
pub use identifiable::*;
pub use user::*;
