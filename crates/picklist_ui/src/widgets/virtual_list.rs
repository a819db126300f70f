//! Windowed list of selectable rows
//!
//! Only the rows inside the virtualizer's render range are handed to the
//! widget, so building, drawing and hit-testing cost the same for ten rows as
//! for a hundred thousand.

use crate::callback::Callback;
use crate::constants::{
    glyphs, line_height, CHECK_GUTTER, DEFAULT_FONT_SIZE, PADDING_STANDARD, SCROLL_LINE_PIXELS,
};
use crate::event::{Event, KeyCode, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::Renderer;
use crate::state::{ScrollDragState, VirtualListState};
use crate::theme::current_theme;
use crate::virtualizer::Virtualizer;
use crate::widget::Widget;
use crate::widgets::scrollbar::{self, ScrollbarParams};

/// A materialized row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// Position in the list (not an item id)
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

/// A virtualized, scrollable list of toggleable rows.
pub struct VirtualList<M> {
    virtualizer: Virtualizer,
    rows: Vec<ListRow>,
    state: VirtualListState,
    width: Length,
    font_size: f32,
    /// Whether arrow keys, Enter and Space are handled
    keyboard: bool,
    on_toggle: Callback<usize, M>,
    on_scroll: Callback<VirtualListState, M>,
}

impl<M> VirtualList<M> {
    pub fn new(virtualizer: Virtualizer, state: &VirtualListState) -> Self {
        let mut state = *state;
        state.scroll_offset = virtualizer.clamp_offset(state.scroll_offset);
        if state.active.is_some_and(|i| i >= virtualizer.count()) {
            state.active = None;
        }
        Self {
            virtualizer,
            rows: Vec::new(),
            state,
            width: Length::Fill,
            font_size: DEFAULT_FONT_SIZE,
            keyboard: false,
            on_toggle: Callback::none(),
            on_scroll: Callback::none(),
        }
    }

    /// Rows for the current render range. Rows outside the range are ignored.
    pub fn rows(mut self, rows: impl IntoIterator<Item = ListRow>) -> Self {
        let range = self.render_range();
        self.rows = rows
            .into_iter()
            .filter(|row| range.contains(&row.index))
            .collect();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    crate::builder_field!(font_size, f32);
    crate::builder_field!(keyboard, bool);
    crate::callback_setter!(on_toggle, usize);
    crate::callback_setter!(on_scroll, VirtualListState);

    pub fn render_range(&self) -> std::ops::Range<usize> {
        self.virtualizer.render_range(self.state.scroll_offset)
    }

    /// Number of rows handed to the widget.
    pub fn materialized(&self) -> usize {
        self.rows.len()
    }

    fn viewport_height(&self) -> f32 {
        self.virtualizer
            .total_size()
            .min(self.virtualizer.viewport())
    }

    fn scrollbar_params(&self, bounds: Bounds) -> ScrollbarParams {
        ScrollbarParams::new(
            self.virtualizer.total_size(),
            bounds.height,
            self.state.scroll_offset,
            scrollbar::track_bounds(bounds),
        )
    }

    fn emit_scroll(&self) -> Option<M> {
        self.on_scroll.call(self.state)
    }

    fn set_offset(&mut self, offset: f32) -> bool {
        let offset = self.virtualizer.clamp_offset(offset);
        if (offset - self.state.scroll_offset).abs() < f32::EPSILON {
            return false;
        }
        self.state.scroll_offset = offset;
        true
    }

    fn row_at(&self, bounds: Bounds, position: (f32, f32)) -> Option<usize> {
        if !bounds.contains(position.0, position.1) {
            return None;
        }
        self.virtualizer
            .index_at(self.state.scroll_offset, position.1 - bounds.y)
    }

    /// Move the active row and scroll it into view.
    fn activate(&mut self, index: usize) -> Option<M> {
        self.state.active = Some(index);
        self.state.scroll_offset = self
            .virtualizer
            .offset_to_reveal(index, self.state.scroll_offset);
        log::trace!(
            "VirtualList: active row {} at offset {}",
            index,
            self.state.scroll_offset
        );
        self.emit_scroll()
    }

    fn handle_key(&mut self, key: KeyCode) -> Option<M> {
        let count = self.virtualizer.count();
        if count == 0 {
            return None;
        }
        let last = count - 1;
        let page = self.virtualizer.page_rows();
        let active = self.state.active;
        let target = match key {
            KeyCode::Down => active.map_or(0, |i| (i + 1).min(last)),
            KeyCode::Up => active.map_or(last, |i| i.saturating_sub(1)),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::PageDown => active.map_or(0, |i| i.saturating_add(page).min(last)),
            KeyCode::PageUp => active.map_or(0, |i| i.saturating_sub(page)),
            KeyCode::Enter | KeyCode::Space => return self.on_toggle.call(active?),
            _ => return None,
        };
        self.activate(target)
    }

    fn draw_row(&self, renderer: &mut Renderer, bounds: Bounds, row: &ListRow) {
        let theme = current_theme();
        let y = bounds.y + self.virtualizer.row_start(row.index) - self.state.scroll_offset;
        let row_bounds = Bounds::new(bounds.x, y, bounds.width, self.virtualizer.row_height());

        if self.state.active == Some(row.index) {
            renderer.fill_rect(row_bounds, theme.option_active);
        } else if row.selected {
            renderer.fill_rect(row_bounds, theme.option_selected);
        }

        let text_y = y + (row_bounds.height - line_height(self.font_size)) / 2.0;
        if row.selected {
            renderer.text(
                glyphs::CHECK,
                bounds.x + PADDING_STANDARD + 4.0,
                text_y,
                self.font_size,
                theme.accent,
            );
        }
        let color = if row.selected {
            theme.text_primary
        } else {
            theme.text_secondary
        };
        renderer.text(
            &row.label,
            bounds.x + CHECK_GUTTER,
            text_y,
            self.font_size,
            color,
        );
    }
}

impl<M> Widget<M> for VirtualList<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, available.width),
            self.viewport_height(),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.push_clip(bounds);
        for row in &self.rows {
            self.draw_row(renderer, bounds, row);
        }
        renderer.pop_clip();

        scrollbar::draw_vertical(
            renderer,
            &self.scrollbar_params(bounds),
            self.state.is_dragging(),
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MouseScroll {
                delta, position, ..
            } if bounds.contains(position.0, position.1) => {
                let moved = self.set_offset(self.state.scroll_offset - delta.1 * SCROLL_LINE_PIXELS);
                if !moved {
                    return None;
                }
                self.state.active = self.row_at(bounds, *position).or(self.state.active);
                log::trace!("VirtualList: scrolled to {}", self.state.scroll_offset);
                self.emit_scroll()
            }

            Event::MouseMove { position, .. } => {
                let params = self.scrollbar_params(bounds);
                if let (Some(grab), Some(thumb)) = (
                    self.state.drag.thumb_offset(),
                    scrollbar::vertical_thumb(&params),
                ) {
                    let offset = scrollbar::thumb_y_to_scroll_offset(
                        position.1 - grab,
                        params.track_bounds,
                        thumb.height,
                        params.content_size,
                        params.viewport_size,
                    );
                    return self.set_offset(offset).then(|| self.emit_scroll()).flatten();
                }
                match self.row_at(bounds, *position) {
                    Some(index) if self.state.active != Some(index) => {
                        self.state.active = Some(index);
                        self.emit_scroll()
                    }
                    _ => None,
                }
            }

            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(position.0, position.1) => {
                let params = self.scrollbar_params(bounds);
                if let Some(thumb) = scrollbar::vertical_thumb(&params) {
                    if thumb.contains(position.0, position.1) {
                        self.state.drag = ScrollDragState::Dragging {
                            thumb_offset: position.1 - thumb.y,
                        };
                        return self.emit_scroll();
                    }
                    if params.track_bounds.contains(position.0, position.1) {
                        let page = bounds.height;
                        let offset = if position.1 < thumb.y {
                            self.state.scroll_offset - page
                        } else {
                            self.state.scroll_offset + page
                        };
                        return self.set_offset(offset).then(|| self.emit_scroll()).flatten();
                    }
                }
                let index = self.row_at(bounds, *position)?;
                log::debug!("VirtualList: toggled row {}", index);
                self.on_toggle.call(index)
            }

            Event::MouseRelease { .. } if self.state.is_dragging() => {
                self.state.drag = ScrollDragState::Idle;
                self.emit_scroll()
            }

            Event::KeyPress { key, .. } if self.keyboard => self.handle_key(*key),

            _ => None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.state.is_dragging()
    }
}

impl<M: 'static> From<VirtualList<M>> for crate::element::Element<M> {
    fn from(list: VirtualList<M>) -> Self {
        crate::element::Element::new(list)
    }
}
