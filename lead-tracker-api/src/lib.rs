pub mod settings;
pub mod domain;
pub mod error;
pub mod service;

pub use settings::Settings;
pub use domain::*;
pub use error::*;
pub use service::*;
