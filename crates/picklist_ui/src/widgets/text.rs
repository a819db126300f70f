//! Text widget

use crate::constants::{line_height, text_width, DEFAULT_FONT_SIZE};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::theme::current_theme;
use crate::widget::Widget;

/// A single line of static text
pub struct Text {
    content: String,
    size: f32,
    color: Option<Color>,
    width: Length,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: None,
            width: Length::Shrink,
        }
    }

    crate::builder_field!(size, f32);

    /// Override the theme's primary text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width
                .resolve(available.width, text_width(&self.content, self.size)),
            line_height(self.size),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let color = self.color.unwrap_or(current_theme().text_primary);
        renderer.text(&self.content, bounds.x, bounds.y, self.size, color);
    }
}

impl<M: 'static> From<Text> for crate::element::Element<M> {
    fn from(text: Text) -> Self {
        crate::element::Element::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_measures_content() {
        let mut text = Text::new("abcd").size(10.0);
        let size = Widget::<()>::layout(&mut text, Size::new(500.0, 100.0));
        assert!((size.width - 24.0).abs() < 0.001);
        assert!((size.height - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_draws_content() {
        let text = Text::new("3 selected");
        let mut renderer = Renderer::new(200.0, 50.0);
        Widget::<()>::draw(&text, &mut renderer, Bounds::new(0.0, 0.0, 200.0, 20.0));
        assert!(renderer.contains_text("3 selected"));
    }
}
