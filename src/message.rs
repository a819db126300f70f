//! Application message types for picklist.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use picklist_ui::{TextInputState, VirtualListState};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// Trigger clicked while closed
    Open,
    /// Trigger clicked while open, Escape, outside press or focus loss
    Close,
    /// Search field edited (value, field state)
    QueryChanged(String, TextInputState),
    /// Row at this position of the filtered view toggled
    Toggle(usize),
    /// Select-all / select-none clicked
    ToggleAll,
    /// List scrolled, hovered or navigated
    ListChanged(VirtualListState),
}
