//! Widget state owned by the application.
//!
//! Widgets are rebuilt from application state every frame, so anything that
//! must survive between frames lives here and is handed back to the
//! application through `on_change`-style callbacks.

/// State for single-line text inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// Cursor position (character index)
    pub cursor: usize,
    /// Selection range (anchor, cursor) if any
    pub selection: Option<(usize, usize)>,
    /// Whether the input is focused
    pub is_focused: bool,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A focused state with the cursor at `cursor`.
    pub fn focused_at(cursor: usize) -> Self {
        Self {
            cursor,
            selection: None,
            is_focused: true,
        }
    }

    pub fn blur(&mut self) {
        self.is_focused = false;
        self.selection = None;
    }
}

/// Scroll thumb drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollDragState {
    #[default]
    Idle,
    /// Dragging the scrollbar thumb, with the pointer's offset inside the thumb
    Dragging { thumb_offset: f32 },
}

impl ScrollDragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollDragState::Dragging { .. })
    }

    pub fn thumb_offset(&self) -> Option<f32> {
        match self {
            ScrollDragState::Dragging { thumb_offset } => Some(*thumb_offset),
            ScrollDragState::Idle => None,
        }
    }
}

/// State for virtual lists
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualListState {
    /// Vertical scroll offset in pixels
    pub scroll_offset: f32,
    /// Row under the pointer or keyboard cursor
    pub active: Option<usize>,
    pub(crate) drag: ScrollDragState,
}

impl VirtualListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top with no active row.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}
