use crate::host::EditorContext;
use crate::model::cursor::Selection;

/// Swaps anchor and cursor of a non-empty selection.
///
/// Returns the new selection, or `None` when nothing was selected and the
/// editor was left untouched.
pub fn exchange_point_and_mark(editor: &mut dyn EditorContext) -> Option<Selection> {
    let selection = editor.selection();
    if selection.is_empty() {
        tracing::trace!("exchange skipped: empty selection at {}", selection.active);
        return None;
    }

    let swapped = selection.exchanged();
    editor.set_selection(swapped);
    tracing::debug!(
        "exchanged point and mark: {selection} -> {swapped} (reversed: {})",
        swapped.is_reversed()
    );
    Some(swapped)
}
