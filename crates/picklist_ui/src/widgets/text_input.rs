//! Single-line text input widget

use crate::callback::Callback;
use crate::constants::{line_height, DEFAULT_FONT_SIZE, DEFAULT_INPUT_WIDTH, TEXT_INPUT_PADDING};
use crate::event::{Event, KeyCode, MouseButton};
use crate::layout::{Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::state::TextInputState;
use crate::theme::current_theme;
use crate::widget::Widget;
use crate::widgets::text_core;

/// A single-line text input with external state.
///
/// Every edit, cursor move, focus or blur is reported through `on_change`
/// with the new value and state; the application stores both and passes them
/// back on the next `view`.
pub struct TextInput<M> {
    value: String,
    placeholder: String,
    state: TextInputState,
    width: Length,
    padding: Padding,
    font_size: f32,
    on_change: Callback<(String, TextInputState), M>,
}

impl<M> Default for TextInput<M> {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            state: TextInputState::default(),
            width: Length::Fill,
            padding: TEXT_INPUT_PADDING,
            font_size: DEFAULT_FONT_SIZE,
            on_change: Callback::none(),
        }
    }
}

impl<M> TextInput<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the state (cursor, selection, focus). The cursor is clamped to the value.
    pub fn state(mut self, state: &TextInputState) -> Self {
        self.state = *state;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    crate::builder_field!(font_size, f32);

    /// Called with `(value, state)` after every change
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(String, TextInputState) -> M + 'static,
    {
        self.on_change = Callback::new(move |(value, state)| callback(value, state));
        self
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    fn len(&self) -> usize {
        text_core::char_count(&self.value)
    }

    fn emit_change(&self) -> Option<M> {
        self.on_change.call((self.value.clone(), self.state))
    }

    fn apply_nav(&mut self, nav: text_core::NavResult) -> Option<M> {
        if nav.cursor == self.state.cursor && nav.selection == self.state.selection {
            return None;
        }
        self.state.cursor = nav.cursor;
        self.state.selection = nav.selection;
        self.emit_change()
    }

    fn handle_key(&mut self, key: KeyCode, shift: bool, command: bool) -> Option<M> {
        let len = self.len();
        let (cursor, selection) = (self.state.cursor, self.state.selection);
        match key {
            KeyCode::Backspace => {
                let new_cursor = text_core::handle_backspace(&mut self.value, cursor, selection)?;
                self.state.cursor = new_cursor;
                self.state.selection = None;
                log::debug!("TextInput: backspace, value = '{}'", self.value);
                self.emit_change()
            }
            KeyCode::Delete => {
                let new_cursor = text_core::handle_delete(&mut self.value, cursor, selection)?;
                self.state.cursor = new_cursor;
                self.state.selection = None;
                log::debug!("TextInput: delete, value = '{}'", self.value);
                self.emit_change()
            }
            KeyCode::Left => self.apply_nav(text_core::handle_left(cursor, selection, shift)),
            KeyCode::Right => {
                self.apply_nav(text_core::handle_right(cursor, selection, len, shift))
            }
            KeyCode::Home => self.apply_nav(text_core::handle_home(cursor, selection, shift)),
            KeyCode::End => self.apply_nav(text_core::handle_end(cursor, selection, len, shift)),
            KeyCode::Char('a') if command => self.apply_nav(text_core::handle_select_all(len)),
            KeyCode::Escape => {
                self.state.blur();
                log::debug!("TextInput: escape, blurred");
                self.emit_change()
            }
            _ => None,
        }
    }
}

impl<M> Widget<M> for TextInput<M> {
    fn layout(&mut self, available: Size) -> Size {
        self.state.cursor = self.state.cursor.min(self.len());
        let height = line_height(self.font_size) + self.padding.vertical();
        Size::new(
            self.width.resolve(available.width, DEFAULT_INPUT_WIDTH),
            height,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let theme = current_theme();
        let content = text_core::content_bounds(bounds, &self.padding);

        let (bg, border) = if self.state.is_focused {
            (theme.input_bg_focused, theme.border_focused)
        } else {
            (theme.input_bg, theme.border)
        };
        renderer.fill_rect(bounds, bg);
        renderer.stroke_rect(bounds, border, 1.0);

        renderer.push_clip(bounds);
        if self.state.is_focused {
            if let Some(selection) = self.state.selection {
                text_core::draw_selection(
                    renderer,
                    content,
                    selection,
                    self.font_size,
                    theme.selection,
                );
            }
        }

        let text_y = content.y + (content.height - line_height(self.font_size)) / 2.0;
        if self.value.is_empty() {
            renderer.text(
                &self.placeholder,
                content.x,
                text_y,
                self.font_size,
                theme.text_placeholder,
            );
        } else {
            renderer.text(
                &self.value,
                content.x,
                text_y,
                self.font_size,
                theme.text_primary,
            );
        }

        if self.state.is_focused {
            text_core::draw_cursor(
                renderer,
                content,
                self.state.cursor,
                self.font_size,
                theme.cursor,
            );
        }
        renderer.pop_clip();
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                modifiers,
            } if bounds.contains(position.0, position.1) => {
                let content = text_core::content_bounds(bounds, &self.padding);
                let was_focused = self.state.is_focused;
                let new_cursor =
                    text_core::x_to_char_index(position.0, content.x, self.font_size, self.len());

                self.state.is_focused = true;
                if modifiers.shift && was_focused {
                    let anchor = text_core::selection_anchor(self.state.selection, self.state.cursor);
                    self.state.selection = Some((anchor, new_cursor));
                } else {
                    self.state.selection = None;
                }
                self.state.cursor = new_cursor;
                log::debug!("TextInput: clicked, cursor = {}", self.state.cursor);
                self.emit_change()
            }

            Event::GlobalMousePress { position, .. }
                if self.state.is_focused && !bounds.contains(position.0, position.1) =>
            {
                self.state.blur();
                log::debug!("TextInput: clicked outside, blurred");
                self.emit_change()
            }

            Event::FocusLost if self.state.is_focused => {
                self.state.blur();
                self.emit_change()
            }

            Event::TextInput { text } if self.state.is_focused => {
                self.state.cursor = text_core::insert_text(
                    &mut self.value,
                    self.state.cursor,
                    self.state.selection,
                    text,
                );
                self.state.selection = None;
                self.emit_change()
            }

            Event::KeyPress { key, modifiers } if self.state.is_focused => {
                self.handle_key(*key, modifiers.shift, modifiers.command())
            }

            _ => None,
        }
    }
}

impl<M: 'static> From<TextInput<M>> for crate::element::Element<M> {
    fn from(input: TextInput<M>) -> Self {
        crate::element::Element::new(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyModifiers;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Changed(String, TextInputState),
    }

    fn input(value: &str, state: TextInputState) -> TextInput<Msg> {
        let mut input = TextInput::new()
            .value(value)
            .state(&state)
            .on_change(Msg::Changed);
        input.layout(Size::new(300.0, 100.0));
        input
    }

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 300.0, 30.0)
    }

    fn key(key: KeyCode) -> Event {
        Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        }
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut w = input("2", TextInputState::focused_at(1));
        let msg = w.on_event(&Event::TextInput { text: "3".into() }, bounds());
        assert_eq!(
            msg,
            Some(Msg::Changed("23".into(), TextInputState::focused_at(2)))
        );
    }

    #[test]
    fn test_unfocused_input_ignores_text() {
        let mut w = input("", TextInputState::default());
        assert_eq!(w.on_event(&Event::TextInput { text: "x".into() }, bounds()), None);
    }

    #[test]
    fn test_click_focuses() {
        let mut w = input("abc", TextInputState::default());
        let msg = w.on_event(
            &Event::MousePress {
                button: MouseButton::Left,
                position: (200.0, 10.0),
                modifiers: KeyModifiers::default(),
            },
            bounds(),
        );
        assert_eq!(
            msg,
            Some(Msg::Changed("abc".into(), TextInputState::focused_at(3)))
        );
    }

    #[test]
    fn test_click_outside_blurs() {
        let mut w = input("abc", TextInputState::focused_at(1));
        let msg = w.on_event(
            &Event::GlobalMousePress {
                button: MouseButton::Left,
                position: (10.0, 200.0),
            },
            bounds(),
        );
        let Some(Msg::Changed(_, state)) = msg else {
            panic!("expected change");
        };
        assert!(!state.is_focused);
    }

    #[test]
    fn test_backspace_and_noop_at_start() {
        let mut w = input("ab", TextInputState::focused_at(2));
        assert_eq!(
            w.on_event(&key(KeyCode::Backspace), bounds()),
            Some(Msg::Changed("a".into(), TextInputState::focused_at(1)))
        );

        let mut w = input("ab", TextInputState::focused_at(0));
        assert_eq!(w.on_event(&key(KeyCode::Backspace), bounds()), None);
    }

    #[test]
    fn test_ctrl_a_selects_all_then_typing_replaces() {
        let mut w = input("item", TextInputState::focused_at(4));
        let select_all = Event::KeyPress {
            key: KeyCode::Char('a'),
            modifiers: KeyModifiers {
                ctrl: true,
                ..Default::default()
            },
        };
        assert!(w.on_event(&select_all, bounds()).is_some());
        let msg = w.on_event(&Event::TextInput { text: "7".into() }, bounds());
        assert_eq!(
            msg,
            Some(Msg::Changed("7".into(), TextInputState::focused_at(1)))
        );
    }

    #[test]
    fn test_placeholder_drawn_when_empty() {
        let w = input("", TextInputState::default()).placeholder("Search...");
        let mut renderer = Renderer::new(400.0, 400.0);
        w.draw(&mut renderer, bounds());
        assert!(renderer.contains_text("Search..."));
    }

    #[test]
    fn test_layout_clamps_stale_cursor() {
        let w = input("ab", TextInputState::focused_at(9));
        assert_eq!(w.state.cursor, 2);
    }
}
