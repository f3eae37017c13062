pub mod client_fields;
pub mod report;
pub mod session;

pub use client_fields::*;
pub use report::*;
pub use session::*;
