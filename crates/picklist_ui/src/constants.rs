//! Shared sizing constants for picklist_ui widgets.

use crate::layout::Padding;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Font size for headings
pub const TITLE_FONT_SIZE: f32 = 18.0;

/// Approximate glyph advance as a ratio of font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in a column
pub const DEFAULT_SPACING: f32 = 8.0;

pub const PADDING_COMPACT: f32 = 6.0;

pub const PADDING_STANDARD: f32 = 8.0;

pub const PADDING_COMFORTABLE: f32 = 12.0;

/// Padding for text input fields
pub const TEXT_INPUT_PADDING: Padding = Padding {
    top: PADDING_COMPACT,
    right: PADDING_STANDARD,
    bottom: PADDING_COMPACT,
    left: PADDING_STANDARD,
};

/// Padding for buttons
pub const BUTTON_PADDING: Padding = Padding {
    top: PADDING_COMPACT,
    right: PADDING_COMFORTABLE,
    bottom: PADDING_COMPACT,
    left: PADDING_COMFORTABLE,
};

/// Width of the text cursor
pub const CURSOR_WIDTH: f32 = 1.0;

// =============================================================================
// Scrollbar
// =============================================================================

/// Scrollbar width inside lists and popups
pub const SCROLLBAR_WIDTH_COMPACT: f32 = 6.0;

/// Minimum scrollbar thumb length
pub const SCROLLBAR_MIN_THUMB: f32 = 20.0;

/// Gap between the scrollbar and the list edge
pub const SCROLLBAR_PADDING: f32 = 2.0;

/// Pixels scrolled per wheel line
pub const SCROLL_LINE_PIXELS: f32 = 20.0;

// =============================================================================
// Virtual list & multi-select
// =============================================================================

/// Row height of a virtual list
pub const DEFAULT_ROW_HEIGHT: f32 = 36.0;

/// Rows materialized beyond each edge of the viewport
pub const DEFAULT_OVERSCAN: usize = 5;

/// Viewport height of the option list
pub const LIST_MAX_HEIGHT: f32 = 240.0;

/// Gap between trigger and popup
pub const POPUP_OFFSET: f32 = 4.0;

/// Inner padding of the popup panel
pub const POPUP_PADDING: f32 = 8.0;

/// Left gutter reserved for the check mark in each row
pub const CHECK_GUTTER: f32 = 40.0;

/// Height of the closed multi-select trigger
pub const TRIGGER_HEIGHT: f32 = 36.0;

/// Width reserved for the trigger's chevron
pub const TRIGGER_ARROW_WIDTH: f32 = 24.0;

/// Fallback width for input widgets when `Length::Shrink` is requested
pub const DEFAULT_INPUT_WIDTH: f32 = 200.0;

/// Glyphs drawn by widgets.
pub mod glyphs {
    pub const CHECK: &str = "\u{2713}";
    pub const CHEVRON_DOWN: &str = "\u{25BE}";
    pub const CHEVRON_UP: &str = "\u{25B4}";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Approximate character width for a given font size
#[inline]
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Approximate line height for a given font size
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Approximate rendered width of `text` (one advance per char)
#[inline]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * char_width(font_size)
}
