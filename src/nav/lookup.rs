use crate::host::EditorContext;

/// Character under the cursor, `None` at end of line or without a document.
pub fn character_after(editor: &dyn EditorContext) -> Option<char> {
    let cursor = editor.cursor();
    editor.line_text(cursor.line)?.chars().nth(cursor.col)
}

/// Character just before the cursor, `None` at column 0 or without a document.
pub fn character_before(editor: &dyn EditorContext) -> Option<char> {
    let cursor = editor.cursor();
    if cursor.col == 0 {
        return None;
    }
    editor.line_text(cursor.line)?.chars().nth(cursor.col - 1)
}
