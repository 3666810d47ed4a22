//! Emacs-style navigation commands for an editor host.
//!
//! The host supplies the document, the bracket matcher and word motion
//! through [`host::EditorContext`]; this crate decides which of them to call
//! and how the selection changes around them.

pub mod error;
pub mod extension;
pub mod host;
pub mod logging;
pub mod model;
pub mod msg;
pub mod nav;

#[cfg(test)]
mod testing;

pub use error::{NavError, Result};
pub use extension::{CommandOutcome, Extension, Manifest};
pub use host::{EditorContext, Workbench};
pub use model::config::NavConfig;
pub use model::cursor::{Position, Selection};
pub use msg::{Command, Direction, ExtendMode};
