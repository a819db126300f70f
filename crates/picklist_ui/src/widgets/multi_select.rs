//! Searchable multi-select dropdown
//!
//! A trigger button showing the closed-state label, and a popup below it
//! holding (top to bottom) a search input, a select-all toggle and a
//! [`VirtualList`]. Open state, query, selection and list state all belong to
//! the application; the widget only lays out, draws and routes input.
//!
//! The popup closes on a trigger click, Escape, a press outside the control,
//! or window focus loss. Clicking a row keeps it open.

use crate::callback::Callback0;
use crate::constants::{
    glyphs, line_height, text_width, DEFAULT_FONT_SIZE, DEFAULT_INPUT_WIDTH, PADDING_COMPACT,
    PADDING_STANDARD, POPUP_OFFSET, POPUP_PADDING, TRIGGER_ARROW_WIDTH, TRIGGER_HEIGHT,
};
use crate::element::Element;
use crate::event::{Event, KeyCode, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::Renderer;
use crate::theme::current_theme;
use crate::widget::Widget;
use crate::widgets::overlay::OverlayCloseHelper;
use crate::widgets::{Button, TextInput, VirtualList};
use crate::{builder_field, callback_setter};

/// Popup children, positioned relative to the popup's top-left corner
#[derive(Debug, Clone, Copy, Default)]
struct PopupLayout {
    size: Size,
    search: Bounds,
    toggle: Bounds,
    list: Bounds,
}

/// Dropdown with search, select-all and a virtualized option list
pub struct MultiSelect<M> {
    label: String,
    /// Draw the label in the placeholder color
    muted: bool,
    is_open: bool,
    width: Length,
    font_size: f32,
    search: Option<TextInput<M>>,
    toggle: Option<Button<M>>,
    list: Option<VirtualList<M>>,
    on_open: Callback0<M>,
    on_close: Callback0<M>,
    trigger: Size,
    popup: PopupLayout,
}

impl<M> MultiSelect<M> {
    /// `label` is what the closed trigger shows.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            muted: false,
            is_open: false,
            width: Length::Shrink,
            font_size: DEFAULT_FONT_SIZE,
            search: None,
            toggle: None,
            list: None,
            on_open: Callback0::none(),
            on_close: Callback0::none(),
            trigger: Size::ZERO,
            popup: PopupLayout::default(),
        }
    }

    /// Set the open state (owned by the application)
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    builder_field!(muted, bool);
    builder_field!(font_size, f32);
    callback_setter!(on_open);
    callback_setter!(on_close);

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Search field shown at the top of the popup
    pub fn search(mut self, input: TextInput<M>) -> Self {
        self.search = Some(input);
        self
    }

    /// Select-all / select-none button under the search field
    pub fn toggle(mut self, button: Button<M>) -> Self {
        self.toggle = Some(button);
        self
    }

    /// Option list; receives arrow keys, Enter and Space while the popup is open
    pub fn list(mut self, list: VirtualList<M>) -> Self {
        self.list = Some(list.keyboard(true));
        self
    }

    fn popup_bounds(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.x,
            bounds.y + self.trigger.height + POPUP_OFFSET,
            self.trigger.width,
            self.popup.size.height,
        )
    }

    fn trigger_bounds(&self, bounds: Bounds) -> Bounds {
        Bounds::new(bounds.x, bounds.y, self.trigger.width, self.trigger.height)
    }

    fn place(rect: Bounds, popup: Bounds) -> Bounds {
        Bounds::new(popup.x + rect.x, popup.y + rect.y, rect.width, rect.height)
    }

    fn search_focused(&self) -> bool {
        self.search.as_ref().is_some_and(|s| s.is_focused())
    }

    fn close(&self) -> Option<M> {
        log::debug!("MultiSelect: closing");
        self.on_close.call()
    }

    fn layout_popup(&mut self, width: f32) {
        let inner = (width - 2.0 * POPUP_PADDING).max(0.0);
        let mut y = POPUP_PADDING;
        let mut layout = PopupLayout::default();

        if let Some(search) = self.search.as_mut() {
            let size = search.layout(Size::new(inner, f32::MAX));
            layout.search = Bounds::new(POPUP_PADDING, y, size.width, size.height);
            y += size.height + PADDING_COMPACT;
        }
        if let Some(toggle) = self.toggle.as_mut() {
            let size = toggle.layout(Size::new(inner, f32::MAX));
            layout.toggle = Bounds::new(POPUP_PADDING, y, size.width, size.height);
            y += size.height + PADDING_COMPACT;
        }
        if let Some(list) = self.list.as_mut() {
            let size = list.layout(Size::new(inner, f32::MAX));
            layout.list = Bounds::new(POPUP_PADDING, y, size.width, size.height);
            y += size.height;
        }

        layout.size = Size::new(width, y + POPUP_PADDING);
        self.popup = layout;
    }

    fn draw_trigger(&self, renderer: &mut Renderer, trigger: Bounds) {
        let theme = current_theme();
        let (bg, border) = if self.is_open {
            (theme.input_bg_focused, theme.border_focused)
        } else {
            (theme.input_bg, theme.border)
        };
        renderer.fill_rect(trigger, bg);
        renderer.stroke_rect(trigger, border, 1.0);

        let text_y = trigger.y + (trigger.height - line_height(self.font_size)) / 2.0;
        let label_color = if self.muted {
            theme.text_placeholder
        } else {
            theme.text_primary
        };
        renderer.push_clip(Bounds::new(
            trigger.x,
            trigger.y,
            (trigger.width - TRIGGER_ARROW_WIDTH).max(0.0),
            trigger.height,
        ));
        renderer.text(
            &self.label,
            trigger.x + PADDING_STANDARD + 4.0,
            text_y,
            self.font_size,
            label_color,
        );
        renderer.pop_clip();

        let chevron = if self.is_open {
            glyphs::CHEVRON_UP
        } else {
            glyphs::CHEVRON_DOWN
        };
        renderer.text(
            chevron,
            trigger.right() - TRIGGER_ARROW_WIDTH + 6.0,
            text_y,
            self.font_size,
            theme.text_secondary,
        );
    }

    fn draw_popup(&self, renderer: &mut Renderer, popup: Bounds) {
        let theme = current_theme();
        renderer.fill_rect(
            Bounds::new(popup.x + 2.0, popup.y + 4.0, popup.width, popup.height),
            theme.shadow,
        );
        renderer.fill_rect(popup, theme.popup_bg);
        renderer.stroke_rect(popup, theme.border, 1.0);

        if let Some(search) = &self.search {
            search.draw(renderer, Self::place(self.popup.search, popup));
        }
        if let Some(toggle) = &self.toggle {
            toggle.draw(renderer, Self::place(self.popup.toggle, popup));
        }
        if let Some(list) = &self.list {
            let list_bounds = Self::place(self.popup.list, popup);
            renderer.fill_rect(
                Bounds::new(popup.x, list_bounds.y - 1.0, popup.width, 1.0),
                theme.divider,
            );
            list.draw(renderer, list_bounds);
        }
    }

    /// Route a pointer event to the popup child under the pointer.
    fn popup_pointer_event(&mut self, event: &Event, popup: Bounds) -> Option<M> {
        let search_bounds = Self::place(self.popup.search, popup);
        let toggle_bounds = Self::place(self.popup.toggle, popup);
        let list_bounds = Self::place(self.popup.list, popup);

        match event {
            // Hover and release go to every child so hover and drag state stay consistent
            Event::MouseMove { .. } | Event::MouseRelease { .. } => {
                let mut result = None;
                if let Some(toggle) = self.toggle.as_mut() {
                    result = toggle.on_event(event, toggle_bounds).or(result);
                }
                if let Some(list) = self.list.as_mut() {
                    result = list.on_event(event, list_bounds).or(result);
                }
                result
            }
            _ => {
                let pos = event.position()?;
                if search_bounds.contains(pos.0, pos.1) {
                    self.search.as_mut()?.on_event(event, search_bounds)
                } else if toggle_bounds.contains(pos.0, pos.1) {
                    self.toggle.as_mut()?.on_event(event, toggle_bounds)
                } else if list_bounds.contains(pos.0, pos.1) {
                    self.list.as_mut()?.on_event(event, list_bounds)
                } else {
                    None
                }
            }
        }
    }

    fn popup_key_event(&mut self, event: &Event, popup: Bounds) -> Option<M> {
        let search_bounds = Self::place(self.popup.search, popup);
        let list_bounds = Self::place(self.popup.list, popup);

        let to_list = match event {
            Event::KeyPress { key, .. } => match key {
                KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Enter => {
                    true
                }
                // Editing keys stay with a focused search field
                KeyCode::Space | KeyCode::Home | KeyCode::End => !self.search_focused(),
                _ => false,
            },
            _ => false,
        };

        if to_list {
            self.list.as_mut()?.on_event(event, list_bounds)
        } else {
            self.search.as_mut()?.on_event(event, search_bounds)
        }
    }
}

impl<M> Widget<M> for MultiSelect<M> {
    fn layout(&mut self, available: Size) -> Size {
        let intrinsic = (text_width(&self.label, self.font_size)
            + 2.0 * PADDING_STANDARD
            + TRIGGER_ARROW_WIDTH)
            .max(DEFAULT_INPUT_WIDTH);
        self.trigger = Size::new(
            self.width.resolve(available.width, intrinsic),
            TRIGGER_HEIGHT,
        );
        if self.is_open {
            self.layout_popup(self.trigger.width);
        }
        self.trigger
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        self.draw_trigger(renderer, self.trigger_bounds(bounds));
        if self.is_open {
            renderer.begin_overlay();
            self.draw_popup(renderer, self.popup_bounds(bounds));
            renderer.end_overlay();
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let trigger = self.trigger_bounds(bounds);

        if !self.is_open {
            return match event {
                Event::MousePress {
                    button: MouseButton::Left,
                    position,
                    ..
                } if trigger.contains(position.0, position.1) => {
                    log::debug!("MultiSelect: opening");
                    self.on_open.call()
                }
                _ => None,
            };
        }

        let popup = self.popup_bounds(bounds);
        let capture = trigger.union(&popup);

        if OverlayCloseHelper::should_close(event, capture) {
            return self.close();
        }

        match event {
            // Inside the control: only the search field cares (blur when clicking elsewhere)
            Event::GlobalMousePress { .. } => {
                let search_bounds = Self::place(self.popup.search, popup);
                self.search.as_mut()?.on_event(event, search_bounds)
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if trigger.contains(position.0, position.1) => self.close(),
            Event::KeyPress { .. } | Event::TextInput { .. } => self.popup_key_event(event, popup),
            Event::CursorLeft => {
                let toggle_bounds = Self::place(self.popup.toggle, popup);
                self.toggle.as_mut()?.on_event(event, toggle_bounds)
            }
            _ => self.popup_pointer_event(event, popup),
        }
    }

    fn has_active_overlay(&self) -> bool {
        self.is_open
    }

    fn has_active_drag(&self) -> bool {
        self.is_open && self.list.as_ref().is_some_and(|l| l.has_active_drag())
    }

    fn capture_bounds(&self, layout_bounds: Bounds) -> Option<Bounds> {
        self.is_open.then(|| {
            self.trigger_bounds(layout_bounds)
                .union(&self.popup_bounds(layout_bounds))
        })
    }
}

impl<M: 'static> From<MultiSelect<M>> for Element<M> {
    fn from(select: MultiSelect<M>) -> Self {
        Element::new(select)
    }
}
