//! In-memory host used by unit tests.
//!
//! The document lives in a rope; movement primitives jump to positions the
//! test scripts up front and record every call they receive.

use async_trait::async_trait;
use ropey::Rope;

use crate::error::{NavError, Result};
use crate::host::{EditorContext, Workbench};
use crate::model::cursor::{Position, Selection};
use crate::msg::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetSelection(Selection),
    JumpToBracket,
    MoveRight,
    MoveWord(Direction),
}

impl HostCall {
    pub fn is_primary_move(&self) -> bool {
        matches!(self, HostCall::JumpToBracket | HostCall::MoveWord(_))
    }
}

pub struct FakeEditor {
    rope: Rope,
    selection: Selection,
    bracket_target: Option<Position>,
    word_target: Option<Position>,
    failure: Option<String>,
    pub calls: Vec<HostCall>,
}

impl FakeEditor {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            bracket_target: None,
            word_target: None,
            failure: None,
            calls: Vec::new(),
        }
    }

    pub fn with_cursor(self, pos: Position) -> Self {
        self.with_selection(Selection::collapsed(pos))
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Where the host's bracket matcher sends the cursor.
    pub fn with_bracket_match(mut self, pos: Position) -> Self {
        self.bracket_target = Some(pos);
        self
    }

    /// Where the host's word motion sends the cursor.
    pub fn with_word_target(mut self, pos: Position) -> Self {
        self.word_target = Some(pos);
        self
    }

    /// Every movement primitive fails with `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn primary_moves(&self) -> usize {
        self.calls.iter().filter(|call| call.is_primary_move()).count()
    }

    fn move_to(&mut self, pos: Position) {
        self.selection = Selection::collapsed(pos);
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(NavError::Host(message.clone())),
            None => Ok(()),
        }
    }

    fn line_len(&self, line: usize) -> usize {
        self.line_text(line).map(|l| l.chars().count()).unwrap_or(0)
    }
}

#[async_trait(?Send)]
impl EditorContext for FakeEditor {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn line_text(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(idx);
        let mut s: String = line.chunks().collect();
        if s.ends_with('\n') {
            s.pop();
        }
        if s.ends_with('\r') {
            s.pop();
        }
        Some(s)
    }

    fn set_selection(&mut self, selection: Selection) {
        self.calls.push(HostCall::SetSelection(selection));
        self.selection = selection;
    }

    async fn jump_to_matching_bracket(&mut self) -> Result<()> {
        self.calls.push(HostCall::JumpToBracket);
        self.check_failure()?;
        if let Some(target) = self.bracket_target {
            self.move_to(target);
        }
        Ok(())
    }

    async fn move_cursor_right(&mut self) -> Result<()> {
        self.calls.push(HostCall::MoveRight);
        self.check_failure()?;
        let cursor = self.cursor();
        let next = if cursor.col < self.line_len(cursor.line) {
            Position::new(cursor.line, cursor.col + 1)
        } else if cursor.line + 1 < self.rope.len_lines() {
            Position::new(cursor.line + 1, 0)
        } else {
            cursor
        };
        self.move_to(next);
        Ok(())
    }

    async fn move_cursor_by_word(&mut self, direction: Direction) -> Result<()> {
        self.calls.push(HostCall::MoveWord(direction));
        self.check_failure()?;
        if let Some(target) = self.word_target {
            self.move_to(target);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWorkbench {
    pub editor: Option<FakeEditor>,
    pub messages: Vec<String>,
}

impl FakeWorkbench {
    pub fn with_editor(editor: FakeEditor) -> Self {
        Self {
            editor: Some(editor),
            messages: Vec::new(),
        }
    }

    pub fn editor(&self) -> &FakeEditor {
        self.editor.as_ref().expect("workbench has an editor")
    }
}

impl Workbench for FakeWorkbench {
    fn active_editor(&mut self) -> Option<&mut dyn EditorContext> {
        self.editor
            .as_mut()
            .map(|editor| editor as &mut dyn EditorContext)
    }

    fn show_information_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
