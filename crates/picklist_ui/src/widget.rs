//! Widget trait

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Whether the widget currently shows a popup drawn outside its layout bounds
    fn has_active_overlay(&self) -> bool {
        false
    }

    /// Whether the widget is tracking a pointer drag
    fn has_active_drag(&self) -> bool {
        false
    }

    /// Area that should receive pointer events, which may extend past the
    /// layout bounds while an overlay is open
    fn capture_bounds(&self, layout_bounds: Bounds) -> Option<Bounds> {
        let _ = layout_bounds;
        None
    }
}
