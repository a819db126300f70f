//! Built-in widgets

mod button;
mod column;
mod multi_select;
pub mod overlay;
pub mod scrollbar;
mod text;
pub mod text_core;
mod text_input;
mod virtual_list;

pub use button::{Button, ButtonStyle};
pub use column::Column;
pub use multi_select::MultiSelect;
pub use text::Text;
pub use text_input::TextInput;
pub use virtual_list::{ListRow, VirtualList};
