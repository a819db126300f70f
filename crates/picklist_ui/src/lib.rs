//! picklist_ui - a small retained-tree UI toolkit built on wgpu
//!
//! Widgets hold no application state: each one is built from values and
//! external state structs in `view`, and reports changes through callbacks
//! that produce application messages.

mod application;
mod backend;
mod callback;
mod element;
mod error;
mod event;
mod layout;
mod macros;
mod renderer;
mod state;
mod virtualizer;
mod widget;

pub mod constants;
pub mod theme;
pub mod widgets;

pub use application::{init_logging, run, Application, ApplicationState, Settings};
pub use callback::{Callback, Callback0};
pub use element::Element;
pub use error::{Result, UiError};
pub use event::{Event, KeyCode, KeyModifiers, MouseButton};
pub use layout::{Alignment, Bounds, Length, Padding, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::{ScrollDragState, TextInputState, VirtualListState};
pub use theme::Theme;
pub use virtualizer::{VirtualItem, VirtualWindow, Virtualizer};
pub use widget::Widget;

pub use widgets::{
    Button, ButtonStyle, Column, ListRow, MultiSelect, Text, TextInput, VirtualList,
};

// Re-export picklist_gpu types that users need
pub use picklist_gpu::{ClearColor, GpuConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Settings};
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
    pub use crate::layout::{Alignment, Bounds, Length, Padding, Size};
    pub use crate::state::{TextInputState, VirtualListState};
    pub use crate::virtualizer::Virtualizer;
    pub use crate::widgets::{
        Button, ButtonStyle, Column, ListRow, MultiSelect, Text, TextInput, VirtualList,
    };
    pub use crate::{ClearColor, GpuConfig};
}
