//! Sexp-aware cursor movement.
//!
//! A bracket next to the cursor (in the direction of travel) makes the
//! command jump over the whole bracketed expression using the host's bracket
//! matcher; anything else moves by word. With [`ExtendMode::Select`] the
//! selection then spans from an anchor fixed before the move to wherever the
//! host left the cursor.

use crate::error::Result;
use crate::host::{EditorContext, Workbench};
use crate::model::cursor::{Position, Selection};
use crate::msg::{Direction, ExtendMode};
use crate::nav::lookup::{character_after, character_before};

const OPEN_BRACKETS: [char; 3] = ['(', '[', '{'];
const CLOSE_BRACKETS: [char; 3] = [')', ']', '}'];

/// Brackets that start an expression when travelling in `direction`.
pub fn brackets(direction: Direction) -> &'static [char] {
    match direction {
        Direction::Forward => &OPEN_BRACKETS,
        Direction::Backward => &CLOSE_BRACKETS,
    }
}

/// Host movement chosen for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// Jump to the matching bracket, then step one char right when
    /// `step_right` is set so the cursor ends after the closing bracket.
    BracketJump { step_right: bool },
    Word(Direction),
}

impl MovePlan {
    pub fn decide(direction: Direction, adjacent: Option<char>) -> Self {
        match adjacent {
            Some(ch) if brackets(direction).contains(&ch) => MovePlan::BracketJump {
                step_right: direction == Direction::Forward,
            },
            _ => MovePlan::Word(direction),
        }
    }
}

/// What a navigation did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub plan: MovePlan,
    /// Cursor after the host finished moving.
    pub cursor: Position,
    /// Selection written back when extending, `None` in move mode.
    pub selection: Option<Selection>,
}

/// Where a grown selection stays pinned.
///
/// The pair is normalized, so moving forward keeps the start and moving
/// backward keeps the end.
fn selection_anchor(selection: &Selection, direction: Direction) -> Position {
    let (start, end) = (selection.start(), selection.end());
    let reversed = end.is_before(&start);
    match (reversed, direction) {
        (true, Direction::Forward) | (false, Direction::Backward) => end,
        (true, Direction::Backward) | (false, Direction::Forward) => start,
    }
}

/// Issues the host moves for `plan`, each awaited before the next.
async fn perform(
    editor: &mut dyn EditorContext,
    plan: MovePlan,
    cursor: Position,
) -> Result<()> {
    match plan {
        MovePlan::BracketJump { step_right } => {
            editor.set_selection(Selection::collapsed(cursor));
            editor.jump_to_matching_bracket().await?;
            if step_right {
                editor.move_cursor_right().await?;
            }
            Ok(())
        }
        MovePlan::Word(direction) => editor.move_cursor_by_word(direction).await,
    }
}

/// Moves the cursor over one sexp in `direction`.
pub async fn navigate_sexp(
    editor: &mut dyn EditorContext,
    direction: Direction,
    extend: ExtendMode,
) -> Result<Navigation> {
    let selection = editor.selection();
    let anchor = selection_anchor(&selection, direction);

    let adjacent = match direction {
        Direction::Forward => character_after(editor),
        Direction::Backward => character_before(editor),
    };
    let plan = MovePlan::decide(direction, adjacent);
    tracing::debug!(
        "sexp {}: {adjacent:?} at {} -> {plan:?}",
        direction.label(),
        selection.active
    );

    if let Err(err) = perform(editor, plan, selection.active).await {
        tracing::warn!("sexp {} aborted: {err}", direction.label());
        return Err(err);
    }

    let cursor = editor.cursor();
    let extended = match extend {
        ExtendMode::Move => None,
        ExtendMode::Select => {
            let from = if selection.is_empty() {
                selection.active
            } else {
                anchor
            };
            let grown = Selection::new(from, cursor);
            editor.set_selection(grown);
            Some(grown)
        }
    };

    Ok(Navigation {
        plan,
        cursor,
        selection: extended,
    })
}

/// Runs [`navigate_sexp`] on the active editor; `Ok(None)` without one.
pub async fn navigate_active(
    workbench: &mut dyn Workbench,
    direction: Direction,
    extend: ExtendMode,
) -> Result<Option<Navigation>> {
    let Some(editor) = workbench.active_editor() else {
        tracing::trace!("sexp {}: no active editor", direction.label());
        return Ok(None);
    };

    navigate_sexp(editor, direction, extend).await.map(Some)
}

pub async fn forward_sexp(
    workbench: &mut dyn Workbench,
    select: bool,
) -> Result<Option<Navigation>> {
    navigate_active(workbench, Direction::Forward, select.into()).await
}

pub async fn backward_sexp(
    workbench: &mut dyn Workbench,
    select: bool,
) -> Result<Option<Navigation>> {
    navigate_active(workbench, Direction::Backward, select.into()).await
}
