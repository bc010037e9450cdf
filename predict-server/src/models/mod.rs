//! Data models

pub mod submission;
pub mod features;
pub mod prediction;

pub use submission::*;
pub use features::*;
pub use prediction::*;
