//! Text editing helpers for [`TextInput`](super::TextInput).
//!
//! Cursor and selection positions are character indices, never byte offsets,
//! so multi-byte input edits correctly.

use crate::constants::{char_width, CURSOR_WIDTH};
use crate::layout::{Bounds, Padding};
use crate::renderer::{Color, Renderer};

// =============================================================================
// Positions
// =============================================================================

#[inline]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `char_index` (or `text.len()` past the end).
pub fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Convert a screen x position to a character index, clamped to `[0, text_len]`.
pub fn x_to_char_index(x: f32, content_x: f32, font_size: f32, text_len: usize) -> usize {
    let index = ((x - content_x) / char_width(font_size)).round();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(text_len)
    }
}

pub fn cursor_x(content_x: f32, cursor: usize, font_size: f32) -> f32 {
    content_x + cursor as f32 * char_width(font_size)
}

pub fn content_bounds(bounds: Bounds, padding: &Padding) -> Bounds {
    bounds.shrink(padding)
}

// =============================================================================
// Selection
// =============================================================================

/// Normalize a selection range so start <= end
#[inline]
pub fn normalize_selection(selection: (usize, usize)) -> (usize, usize) {
    let (start, end) = selection;
    (start.min(end), start.max(end))
}

/// Anchor for extending a selection: the existing anchor, else the cursor
pub fn selection_anchor(selection: Option<(usize, usize)>, cursor: usize) -> usize {
    selection.map(|(s, _)| s).unwrap_or(cursor)
}

// =============================================================================
// Editing
// =============================================================================

/// Delete the selected characters. Returns the new cursor (selection start).
pub fn delete_selection(text: &mut String, selection: (usize, usize)) -> usize {
    let (start, end) = normalize_selection(selection);
    let from = byte_index(text, start);
    let to = byte_index(text, end);
    text.drain(from..to);
    start
}

/// Insert `insert` at the cursor, replacing the selection if any.
/// Returns the cursor after the inserted text.
pub fn insert_text(
    text: &mut String,
    cursor: usize,
    selection: Option<(usize, usize)>,
    insert: &str,
) -> usize {
    let at = match selection {
        Some(sel) if sel.0 != sel.1 => delete_selection(text, sel),
        _ => cursor.min(char_count(text)),
    };
    text.insert_str(byte_index(text, at), insert);
    at + char_count(insert)
}

/// Returns `Some(new_cursor)` if the text changed.
pub fn handle_backspace(
    text: &mut String,
    cursor: usize,
    selection: Option<(usize, usize)>,
) -> Option<usize> {
    match selection {
        Some(sel) if sel.0 != sel.1 => Some(delete_selection(text, sel)),
        _ if cursor > 0 && cursor <= char_count(text) => {
            text.remove(byte_index(text, cursor - 1));
            Some(cursor - 1)
        }
        _ => None,
    }
}

/// Returns `Some(new_cursor)` if the text changed.
pub fn handle_delete(
    text: &mut String,
    cursor: usize,
    selection: Option<(usize, usize)>,
) -> Option<usize> {
    match selection {
        Some(sel) if sel.0 != sel.1 => Some(delete_selection(text, sel)),
        _ if cursor < char_count(text) => {
            text.remove(byte_index(text, cursor));
            Some(cursor)
        }
        _ => None,
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Result of a navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavResult {
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
}

fn move_to(
    cursor: usize,
    target: usize,
    selection: Option<(usize, usize)>,
    shift: bool,
) -> NavResult {
    if shift {
        NavResult {
            cursor: target,
            selection: Some((selection_anchor(selection, cursor), target)),
        }
    } else {
        NavResult {
            cursor: target,
            selection: None,
        }
    }
}

pub fn handle_left(cursor: usize, selection: Option<(usize, usize)>, shift: bool) -> NavResult {
    match selection {
        // Collapse to the left edge
        Some(sel) if !shift => move_to(cursor, normalize_selection(sel).0, None, false),
        _ => move_to(cursor, cursor.saturating_sub(1), selection, shift),
    }
}

pub fn handle_right(
    cursor: usize,
    selection: Option<(usize, usize)>,
    text_len: usize,
    shift: bool,
) -> NavResult {
    match selection {
        Some(sel) if !shift => move_to(cursor, normalize_selection(sel).1, None, false),
        _ => move_to(cursor, (cursor + 1).min(text_len), selection, shift),
    }
}

pub fn handle_home(cursor: usize, selection: Option<(usize, usize)>, shift: bool) -> NavResult {
    move_to(cursor, 0, selection, shift)
}

pub fn handle_end(
    cursor: usize,
    selection: Option<(usize, usize)>,
    text_len: usize,
    shift: bool,
) -> NavResult {
    move_to(cursor, text_len, selection, shift)
}

pub fn handle_select_all(text_len: usize) -> NavResult {
    NavResult {
        cursor: text_len,
        selection: Some((0, text_len)),
    }
}

// =============================================================================
// Rendering
// =============================================================================

pub fn draw_selection(
    renderer: &mut Renderer,
    content: Bounds,
    selection: (usize, usize),
    font_size: f32,
    color: Color,
) {
    let (start, end) = normalize_selection(selection);
    if start == end {
        return;
    }
    let x = cursor_x(content.x, start, font_size);
    let width = (end - start) as f32 * char_width(font_size);
    renderer.fill_rect(Bounds::new(x, content.y, width, content.height), color);
}

pub fn draw_cursor(
    renderer: &mut Renderer,
    content: Bounds,
    cursor: usize,
    font_size: f32,
    color: Color,
) {
    let x = cursor_x(content.x, cursor, font_size);
    renderer.fill_rect(
        Bounds::new(x, content.y + 2.0, CURSOR_WIDTH, content.height - 4.0),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_to_char_index() {
        assert_eq!(x_to_char_index(100.0, 100.0, 14.0, 10), 0);
        assert_eq!(x_to_char_index(108.4, 100.0, 14.0, 10), 1);
        assert_eq!(x_to_char_index(200.0, 100.0, 14.0, 5), 5);
        assert_eq!(x_to_char_index(50.0, 100.0, 14.0, 10), 0);
    }

    #[test]
    fn test_byte_index_multibyte() {
        let text = "añb";
        assert_eq!(byte_index(text, 0), 0);
        assert_eq!(byte_index(text, 2), 3);
        assert_eq!(byte_index(text, 3), 4);
        assert_eq!(byte_index(text, 9), 4);
    }

    #[test]
    fn test_insert_text() {
        let mut text = String::from("Item 2");
        let cursor = insert_text(&mut text, 6, None, "3");
        assert_eq!(text, "Item 23");
        assert_eq!(cursor, 7);

        let mut text = String::from("Hello World");
        let cursor = insert_text(&mut text, 6, Some((6, 11)), "Universe");
        assert_eq!(text, "Hello Universe");
        assert_eq!(cursor, 14);
    }

    #[test]
    fn test_insert_after_multibyte() {
        let mut text = String::from("ñ");
        let cursor = insert_text(&mut text, 1, None, "é");
        assert_eq!(text, "ñé");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_handle_backspace() {
        let mut text = String::from("Hello");
        assert_eq!(handle_backspace(&mut text, 5, None), Some(4));
        assert_eq!(text, "Hell");

        let mut text = String::from("Hello");
        assert_eq!(handle_backspace(&mut text, 0, None), None);

        let mut text = String::from("Hello World");
        assert_eq!(handle_backspace(&mut text, 6, Some((0, 6))), Some(0));
        assert_eq!(text, "World");

        let mut text = String::from("aé");
        assert_eq!(handle_backspace(&mut text, 2, None), Some(1));
        assert_eq!(text, "a");
    }

    #[test]
    fn test_handle_delete() {
        let mut text = String::from("Hello");
        assert_eq!(handle_delete(&mut text, 0, None), Some(0));
        assert_eq!(text, "ello");

        let mut text = String::from("Hello");
        assert_eq!(handle_delete(&mut text, 5, None), None);
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_handle_left_right() {
        assert_eq!(handle_left(5, None, false).cursor, 4);
        assert_eq!(handle_left(0, None, false).cursor, 0);

        let collapsed = handle_left(8, Some((3, 8)), false);
        assert_eq!(collapsed, NavResult { cursor: 3, selection: None });

        let extended = handle_left(5, None, true);
        assert_eq!(extended.selection, Some((5, 4)));

        assert_eq!(handle_right(10, None, 10, false).cursor, 10);
        assert_eq!(handle_right(5, None, 10, true).selection, Some((5, 6)));
    }

    #[test]
    fn test_home_end_select_all() {
        assert_eq!(handle_home(4, None, true).selection, Some((4, 0)));
        assert_eq!(handle_end(1, None, 6, false), NavResult { cursor: 6, selection: None });
        assert_eq!(handle_select_all(3).selection, Some((0, 3)));
    }
}
