//! Button widget

use crate::callback::Callback0;
use crate::constants::{line_height, text_width, BUTTON_PADDING, DEFAULT_FONT_SIZE};
use crate::event::{Event, MouseButton};
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::theme::current_theme;
use crate::widget::Widget;

/// Button visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Background and border
    #[default]
    Normal,
    /// Text only, with a subtle hover background
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// A clickable button
pub struct Button<M> {
    label: String,
    on_click: Callback0<M>,
    width: Length,
    padding: Padding,
    state: ButtonState,
    text_align: Alignment,
    font_size: f32,
    style: ButtonStyle,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: Callback0::none(),
            width: Length::Shrink,
            padding: BUTTON_PADDING,
            state: ButtonState::Normal,
            text_align: Alignment::Center,
            font_size: DEFAULT_FONT_SIZE,
            style: ButtonStyle::default(),
        }
    }

    crate::builder_field!(style, ButtonStyle);
    crate::builder_field!(text_align, Alignment);
    crate::builder_field!(font_size, f32);
    crate::callback_setter!(on_click);

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    fn background(&self) -> Option<Color> {
        let theme = current_theme();
        match (self.style, self.state) {
            (ButtonStyle::Normal, ButtonState::Normal) => Some(theme.button_bg),
            (ButtonStyle::Normal, _) => Some(theme.button_hover),
            (ButtonStyle::Text, ButtonState::Normal) => None,
            (ButtonStyle::Text, _) => Some(theme.option_active),
        }
    }

    fn text_color(&self) -> Color {
        let theme = current_theme();
        match (self.style, self.state) {
            (ButtonStyle::Text, ButtonState::Normal) => theme.accent,
            _ => theme.text_primary,
        }
    }
}

impl<M> Widget<M> for Button<M> {
    fn layout(&mut self, available: Size) -> Size {
        let min_width = text_width(&self.label, self.font_size) + self.padding.horizontal();
        let height = line_height(self.font_size) + self.padding.vertical();
        Size::new(self.width.resolve(available.width, min_width), height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if let Some(bg) = self.background() {
            renderer.fill_rect(bounds, bg);
        }
        if self.style == ButtonStyle::Normal {
            renderer.stroke_rect(bounds, current_theme().border, 1.0);
        }

        let inner_width = bounds.width - self.padding.horizontal();
        let label_width = text_width(&self.label, self.font_size).min(inner_width);
        let text_x = bounds.x + self.padding.left + self.text_align.offset(inner_width, label_width);
        let text_y = bounds.y + (bounds.height - line_height(self.font_size)) / 2.0;
        renderer.text(&self.label, text_x, text_y, self.font_size, self.text_color());
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MouseMove { position, .. } => {
                let inside = bounds.contains(position.0, position.1);
                if inside && self.state == ButtonState::Normal {
                    self.state = ButtonState::Hovered;
                } else if !inside && self.state == ButtonState::Hovered {
                    self.state = ButtonState::Normal;
                }
                None
            }
            // Fires on press: a blur elsewhere may rebuild the view before the release
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(position.0, position.1) => {
                self.state = ButtonState::Pressed;
                log::debug!("Button '{}' pressed", self.label);
                self.on_click.call()
            }
            Event::MouseRelease { position, .. } => {
                self.state = if bounds.contains(position.0, position.1) {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };
                None
            }
            Event::CursorLeft => {
                self.state = ButtonState::Normal;
                None
            }
            _ => None,
        }
    }
}

impl<M: 'static> From<Button<M>> for crate::element::Element<M> {
    fn from(button: Button<M>) -> Self {
        crate::element::Element::new(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyModifiers;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Clicked,
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::default(),
        }
    }

    #[test]
    fn test_click_inside_emits() {
        let mut button = Button::new("Select all").on_click(|| Msg::Clicked);
        let bounds = Bounds::new(0.0, 0.0, 120.0, 30.0);
        assert_eq!(button.on_event(&press(10.0, 10.0), bounds), Some(Msg::Clicked));
        assert_eq!(button.on_event(&press(200.0, 10.0), bounds), None);
    }

    #[test]
    fn test_without_handler_is_silent() {
        let mut button: Button<Msg> = Button::new("x");
        let bounds = Bounds::new(0.0, 0.0, 50.0, 30.0);
        assert_eq!(button.on_event(&press(5.0, 5.0), bounds), None);
    }

    #[test]
    fn test_hover_changes_background() {
        let mut button: Button<Msg> = Button::new("x").style(ButtonStyle::Text);
        let bounds = Bounds::new(0.0, 0.0, 50.0, 30.0);
        assert_eq!(button.background(), None);
        button.on_event(
            &Event::MouseMove {
                position: (5.0, 5.0),
                modifiers: KeyModifiers::default(),
            },
            bounds,
        );
        assert!(button.background().is_some());
    }

    #[test]
    fn test_layout_fill_width() {
        let mut button: Button<Msg> = Button::new("Select none").width(Length::Fill);
        let size = button.layout(Size::new(300.0, 100.0));
        assert_eq!(size.width, 300.0);
    }
}
