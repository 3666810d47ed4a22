pub mod manifest;
pub mod registry;

pub use manifest::Manifest;
pub use registry::{CommandOutcome, Extension, run_command};
