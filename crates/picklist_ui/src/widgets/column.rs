//! Vertical stack container

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// Lays children out top to bottom
pub struct Column<M> {
    children: Vec<Element<M>>,
    /// Child bounds relative to the column's origin, from the last layout
    child_bounds: Vec<Bounds>,
    spacing: f32,
    padding: Padding,
    width: Length,
    align: Alignment,
}

impl<M> Default for Column<M> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            child_bounds: Vec::new(),
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Fill,
            align: Alignment::Start,
        }
    }
}

impl<M: 'static> Column<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child
    pub fn push(mut self, child: impl Into<Element<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    crate::builder_field!(spacing, f32);
    crate::builder_field!(align, Alignment);

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    fn absolute(&self, index: usize, origin: Bounds) -> Bounds {
        let b = self.child_bounds[index];
        Bounds::new(origin.x + b.x, origin.y + b.y, b.width, b.height)
    }

    /// Send an event to every child, keeping the last message.
    fn broadcast(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let mut result = None;
        for i in 0..self.children.len() {
            let child_bounds = self.absolute(i, bounds);
            if let Some(msg) = self.children[i].on_event(event, child_bounds) {
                result = Some(msg);
            }
        }
        result
    }
}

impl<M: 'static> Widget<M> for Column<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner_width = (self.width.resolve(available.width, available.width)
            - self.padding.horizontal())
        .max(0.0);
        let mut y = self.padding.top;
        let mut max_width: f32 = 0.0;
        self.child_bounds.clear();

        for (i, child) in self.children.iter_mut().enumerate() {
            if i > 0 {
                y += self.spacing;
            }
            let remaining = (available.height - y - self.padding.bottom).max(0.0);
            let size = child.layout(Size::new(inner_width, remaining));
            let x = self.padding.left + self.align.offset(inner_width, size.width);
            self.child_bounds.push(Bounds::new(x, y, size.width, size.height));
            max_width = max_width.max(size.width);
            y += size.height;
        }

        let content_width = max_width + self.padding.horizontal();
        Size::new(
            self.width.resolve(available.width, content_width),
            y + self.padding.bottom,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (i, child) in self.children.iter().enumerate() {
            child.draw(renderer, self.absolute(i, bounds));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        // Blur, click-outside and focus handling must reach every child
        if matches!(
            event,
            Event::GlobalMousePress { .. } | Event::FocusLost | Event::CursorLeft
        ) {
            return self.broadcast(event, bounds);
        }

        let overlay = (0..self.children.len()).find(|&i| self.children[i].has_active_overlay());

        if let Some(i) = overlay {
            let child_bounds = self.absolute(i, bounds);
            match event.position() {
                Some(pos) => {
                    let capture = self.children[i]
                        .capture_bounds(child_bounds)
                        .unwrap_or(child_bounds);
                    // Pointer events over an open popup never reach widgets underneath
                    if capture.contains(pos.0, pos.1)
                        || matches!(event, Event::MouseRelease { .. })
                        || self.children[i].has_active_drag()
                    {
                        return self.children[i].on_event(event, child_bounds);
                    }
                }
                None => {
                    if let Some(msg) = self.children[i].on_event(event, child_bounds) {
                        return Some(msg);
                    }
                    if matches!(event, Event::KeyPress { .. } | Event::TextInput { .. }) {
                        return None;
                    }
                }
            }
        }

        let dragging = self.children.iter().any(|c| c.has_active_drag());
        if let Some(pos) = event.position() {
            let passes = matches!(event, Event::MouseRelease { .. })
                || (matches!(event, Event::MouseMove { .. }) && dragging);
            if !passes && !bounds.contains(pos.0, pos.1) && overlay.is_none() {
                return None;
            }
        }

        for i in 0..self.children.len() {
            if Some(i) == overlay {
                continue;
            }
            let child_bounds = self.absolute(i, bounds);
            if let Some(msg) = self.children[i].on_event(event, child_bounds) {
                return Some(msg);
            }
        }
        None
    }

    fn has_active_overlay(&self) -> bool {
        self.children.iter().any(|c| c.has_active_overlay())
    }

    fn has_active_drag(&self) -> bool {
        self.children.iter().any(|c| c.has_active_drag())
    }

    fn capture_bounds(&self, layout_bounds: Bounds) -> Option<Bounds> {
        let mut capture: Option<Bounds> = None;
        for (i, child) in self.children.iter().enumerate() {
            if let Some(b) = child.capture_bounds(self.absolute(i, layout_bounds)) {
                capture = Some(match capture {
                    Some(c) => c.union(&b),
                    None => b,
                });
            }
        }
        capture.map(|c| c.union(&layout_bounds))
    }
}

impl<M: 'static> From<Column<M>> for Element<M> {
    fn from(column: Column<M>) -> Self {
        Element::new(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyModifiers, MouseButton};
    use crate::widgets::{Button, Text};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        First,
        Second,
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::default(),
        }
    }

    #[test]
    fn test_children_stack_with_spacing() {
        let mut column: Column<Msg> = Column::new()
            .spacing(10.0)
            .push(Text::new("a").size(10.0))
            .push(Text::new("b").size(10.0));
        let size = column.layout(Size::new(200.0, 400.0));
        assert_eq!(column.child_bounds[0].y, 0.0);
        assert!((column.child_bounds[1].y - 22.0).abs() < 0.001);
        assert!((size.height - 34.0).abs() < 0.001);
        assert_eq!(size.width, 200.0);
    }

    #[test]
    fn test_press_routed_to_child_under_pointer() {
        let mut column = Column::new()
            .push(Button::new("one").on_click(|| Msg::First))
            .push(Button::new("two").on_click(|| Msg::Second));
        column.layout(Size::new(200.0, 400.0));
        let bounds = Bounds::new(0.0, 0.0, 200.0, 400.0);
        let second = column.child_bounds[1];
        assert_eq!(
            column.on_event(&press(second.x + 2.0, second.y + 2.0), bounds),
            Some(Msg::Second)
        );
        assert_eq!(column.on_event(&press(5.0, 5.0), bounds), Some(Msg::First));
        assert_eq!(column.on_event(&press(500.0, 5.0), bounds), None);
    }

    #[test]
    fn test_padding_offsets_children() {
        let mut column: Column<Msg> = Column::new()
            .padding(Padding::all(12.0))
            .push(Text::new("x"));
        column.layout(Size::new(200.0, 200.0));
        assert_eq!(column.child_bounds[0].x, 12.0);
        assert_eq!(column.child_bounds[0].y, 12.0);
    }
}
