//! Vertical scrollbar geometry and drawing

use crate::constants::{SCROLLBAR_MIN_THUMB, SCROLLBAR_PADDING, SCROLLBAR_WIDTH_COMPACT};
use crate::layout::Bounds;
use crate::renderer::Renderer;
use crate::theme::current_theme;

/// Inputs for thumb calculation
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarParams {
    /// Total content height
    pub content_size: f32,
    /// Visible viewport height
    pub viewport_size: f32,
    pub scroll_offset: f32,
    /// Area the scrollbar is drawn in
    pub track_bounds: Bounds,
    pub bar_size: f32,
    pub min_thumb_size: f32,
}

impl ScrollbarParams {
    pub fn new(content_size: f32, viewport_size: f32, scroll_offset: f32, track_bounds: Bounds) -> Self {
        Self {
            content_size,
            viewport_size,
            scroll_offset,
            track_bounds,
            bar_size: SCROLLBAR_WIDTH_COMPACT,
            min_thumb_size: SCROLLBAR_MIN_THUMB,
        }
    }
}

/// Track area along the right edge of `viewport`.
pub fn track_bounds(viewport: Bounds) -> Bounds {
    Bounds::new(
        viewport.right() - SCROLLBAR_WIDTH_COMPACT - SCROLLBAR_PADDING,
        viewport.y + SCROLLBAR_PADDING,
        SCROLLBAR_WIDTH_COMPACT,
        (viewport.height - 2.0 * SCROLLBAR_PADDING).max(0.0),
    )
}

/// Thumb bounds, or `None` when the content fits the viewport.
pub fn vertical_thumb(params: &ScrollbarParams) -> Option<Bounds> {
    if params.content_size <= params.viewport_size || params.content_size <= 0.0 {
        return None;
    }
    let track = params.track_bounds;

    let visible_ratio = (params.viewport_size / params.content_size).min(1.0);
    let thumb_height = (track.height * visible_ratio)
        .max(params.min_thumb_size)
        .min(track.height);

    let max_scroll = params.content_size - params.viewport_size;
    let ratio = (params.scroll_offset / max_scroll).clamp(0.0, 1.0);
    let thumb_y = track.y + ratio * (track.height - thumb_height);

    Some(Bounds::new(
        track.right() - params.bar_size,
        thumb_y,
        params.bar_size,
        thumb_height,
    ))
}

/// Scroll offset that places the thumb's top edge at `thumb_y`.
pub fn thumb_y_to_scroll_offset(
    thumb_y: f32,
    track: Bounds,
    thumb_height: f32,
    content_size: f32,
    viewport_size: f32,
) -> f32 {
    let travel = track.height - thumb_height;
    if travel <= 0.0 {
        return 0.0;
    }
    let ratio = ((thumb_y - track.y) / travel).clamp(0.0, 1.0);
    ratio * (content_size - viewport_size).max(0.0)
}

pub fn draw_vertical(renderer: &mut Renderer, params: &ScrollbarParams, dragging: bool) {
    let Some(thumb) = vertical_thumb(params) else {
        return;
    };
    let theme = current_theme();
    renderer.fill_rect(params.track_bounds, theme.scrollbar_track);
    let color = if dragging {
        theme.scrollbar_thumb_drag
    } else {
        theme.scrollbar_thumb
    };
    renderer.fill_rect(thumb, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Bounds {
        Bounds::new(0.0, 0.0, 6.0, 240.0)
    }

    #[test]
    fn test_no_thumb_when_content_fits() {
        let params = ScrollbarParams::new(200.0, 240.0, 0.0, track());
        assert!(vertical_thumb(&params).is_none());
    }

    #[test]
    fn test_thumb_respects_minimum_size() {
        // 100,000 rows: the proportional thumb would be far below one pixel
        let params = ScrollbarParams::new(3_600_000.0, 240.0, 0.0, track());
        let thumb = vertical_thumb(&params).unwrap();
        assert_eq!(thumb.height, SCROLLBAR_MIN_THUMB);
        assert_eq!(thumb.y, 0.0);
    }

    #[test]
    fn test_thumb_at_end() {
        let params = ScrollbarParams::new(720.0, 240.0, 480.0, track());
        let thumb = vertical_thumb(&params).unwrap();
        assert!((thumb.bottom() - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_thumb_position_round_trips_offset() {
        let params = ScrollbarParams::new(720.0, 240.0, 240.0, track());
        let thumb = vertical_thumb(&params).unwrap();
        let offset = thumb_y_to_scroll_offset(thumb.y, track(), thumb.height, 720.0, 240.0);
        assert!((offset - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_track_sits_on_right_edge() {
        let t = track_bounds(Bounds::new(10.0, 20.0, 300.0, 240.0));
        assert_eq!(t.right(), 10.0 + 300.0 - SCROLLBAR_PADDING);
        assert_eq!(t.height, 240.0 - 2.0 * SCROLLBAR_PADDING);
    }
}
