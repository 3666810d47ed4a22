//! The surface the editor host provides.
//!
//! Text storage, bracket matching and word boundaries all live on the host
//! side. Commands only read selection state, ask the host to move, and write
//! the selection back.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::cursor::{Position, Selection};
use crate::msg::Direction;

/// One open editor: its document, selection and built-in movement commands.
///
/// Movement primitives resolve once the host has finished moving the cursor.
/// The host is single threaded, so the futures need not be `Send`.
#[async_trait(?Send)]
pub trait EditorContext {
    fn selection(&self) -> Selection;

    fn cursor(&self) -> Position {
        self.selection().active
    }

    /// Text of a line without its line ending, `None` past the last line.
    fn line_text(&self, line: usize) -> Option<String>;

    fn set_selection(&mut self, selection: Selection);

    /// Moves the cursor to the bracket matching the one next to it. Leaves
    /// the cursor alone when there is no match.
    async fn jump_to_matching_bracket(&mut self) -> Result<()>;

    async fn move_cursor_right(&mut self) -> Result<()>;

    async fn move_cursor_by_word(&mut self, direction: Direction) -> Result<()>;
}

/// The host window: owns the active editor, if any, and user notifications.
pub trait Workbench {
    fn active_editor(&mut self) -> Option<&mut dyn EditorContext>;

    /// Fire-and-forget message to the user.
    fn show_information_message(&mut self, text: &str);
}
