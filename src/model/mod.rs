//! Data model: the dataset, the filtered view and the selection.

mod filter;
mod item;
mod selection;

pub use filter::FilteredView;
pub use item::{Dataset, Item, ItemId};
pub use selection::Selection;
