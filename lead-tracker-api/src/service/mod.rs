pub mod identity_provider;
pub mod session_cache;

pub use identity_provider::*;
pub use session_cache::*;
