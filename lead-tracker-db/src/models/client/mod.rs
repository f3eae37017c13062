pub mod client_record;
pub mod common_enums;
pub mod follow_up_note;

pub use client_record::*;
pub use common_enums::*;
pub use follow_up_note::*;
