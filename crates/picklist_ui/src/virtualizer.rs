//! Fixed-row-height windowing.
//!
//! Maps a pixel scroll offset onto the contiguous range of rows that must be
//! materialized. The cost of every query here is independent of `count`.

use std::ops::Range;

use crate::constants::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, LIST_MAX_HEIGHT};

/// Windowing parameters for a list of `count` equally tall rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Virtualizer {
    count: usize,
    row_height: f32,
    overscan: usize,
    viewport_height: f32,
}

/// One materialized row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualItem {
    pub index: usize,
    /// Offset of the row's top edge from the top of the content, in pixels
    pub start: f32,
    pub size: f32,
}

/// The rows to render for one scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow {
    /// Render range (visible rows plus overscan)
    pub range: Range<usize>,
    pub items: Vec<VirtualItem>,
    /// Height of the full content
    pub total_size: f32,
}

impl Virtualizer {
    pub fn new(count: usize, row_height: f32) -> Self {
        Self {
            count,
            row_height,
            overscan: DEFAULT_OVERSCAN,
            viewport_height: LIST_MAX_HEIGHT,
        }
    }

    /// Rows rendered beyond each edge of the viewport.
    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    #[must_use]
    pub fn viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height.max(0.0);
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn viewport(&self) -> f32 {
        self.viewport_height
    }

    fn is_degenerate(&self) -> bool {
        self.count == 0 || self.row_height <= 0.0
    }

    pub fn total_size(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.count as f32 * self.row_height
        }
    }

    pub fn max_offset(&self) -> f32 {
        (self.total_size() - self.viewport_height).max(0.0)
    }

    /// Clamp `offset` into `[0, max_offset]`. NaN maps to zero.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Rows intersecting `[offset, offset + viewport_height)`.
    pub fn visible_range(&self, offset: f32) -> Range<usize> {
        if self.is_degenerate() {
            return 0..0;
        }
        let offset = self.clamp_offset(offset);
        let start = ((offset / self.row_height).floor() as usize).min(self.count);
        let end = (((offset + self.viewport_height) / self.row_height).ceil() as usize)
            .min(self.count);
        start..end.max(start)
    }

    /// Visible rows widened by the overscan on both sides.
    pub fn render_range(&self, offset: f32) -> Range<usize> {
        let visible = self.visible_range(offset);
        if visible.is_empty() {
            return visible;
        }
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(self.count);
        start..end
    }

    pub fn window(&self, offset: f32) -> VirtualWindow {
        let range = self.render_range(offset);
        let items = range
            .clone()
            .map(|index| VirtualItem {
                index,
                start: self.row_start(index),
                size: self.row_height,
            })
            .collect();
        VirtualWindow {
            range,
            items,
            total_size: self.total_size(),
        }
    }

    pub fn row_start(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Row under a point `y` pixels below the viewport's top edge.
    pub fn index_at(&self, offset: f32, y: f32) -> Option<usize> {
        if self.is_degenerate() || y < 0.0 || y >= self.viewport_height {
            return None;
        }
        let content_y = self.clamp_offset(offset) + y;
        let index = (content_y / self.row_height).floor() as usize;
        (index < self.count).then_some(index)
    }

    /// Smallest change to `current` that shows row `index` entirely.
    pub fn offset_to_reveal(&self, index: usize, current: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        let index = index.min(self.count - 1);
        let top = self.row_start(index);
        let bottom = top + self.row_height;
        let current = self.clamp_offset(current);
        let target = if top < current {
            top
        } else if bottom > current + self.viewport_height {
            bottom - self.viewport_height
        } else {
            current
        };
        self.clamp_offset(target)
    }

    /// Whole rows that fit in the viewport (at least one).
    pub fn page_rows(&self) -> usize {
        if self.row_height <= 0.0 {
            return 1;
        }
        ((self.viewport_height / self.row_height).floor() as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(count: usize) -> Virtualizer {
        Virtualizer::new(count, 36.0).overscan(5).viewport_height(240.0)
    }

    #[test]
    fn test_total_and_max_offset() {
        let v = list(100_000);
        assert_eq!(v.total_size(), 3_600_000.0);
        assert_eq!(v.max_offset(), 3_600_000.0 - 240.0);

        let short = list(3);
        assert_eq!(short.total_size(), 108.0);
        assert_eq!(short.max_offset(), 0.0);
    }

    #[test]
    fn test_visible_range_at_top() {
        let v = list(100_000);
        assert_eq!(v.visible_range(0.0), 0..7);
        assert_eq!(v.render_range(0.0), 0..12);
    }

    #[test]
    fn test_visible_range_mid_list() {
        let v = list(100_000);
        assert_eq!(v.visible_range(3620.0), 100..108);
        assert_eq!(v.render_range(3620.0), 95..113);
    }

    #[test]
    fn test_render_range_bounded_independent_of_count() {
        for count in [20usize, 1_000, 100_000] {
            let v = list(count);
            // ceil(240 / 36) + 1 partial row + 2 * overscan
            let bound = 7 + 1 + 2 * 5;
            let mut offset = 0.0;
            while offset <= v.max_offset() && offset < 50_000.0 {
                assert!(v.render_range(offset).len() <= bound);
                offset += 13.7;
            }
        }
    }

    #[test]
    fn test_render_range_at_bottom() {
        let v = list(100_000);
        let range = v.render_range(v.max_offset());
        assert_eq!(range.end, 100_000);
        assert_eq!(range.start, 100_000 - 7 - 5);
    }

    #[test]
    fn test_empty_and_degenerate_lists() {
        assert_eq!(list(0).render_range(0.0), 0..0);
        assert!(list(0).window(100.0).items.is_empty());
        let zero_height = Virtualizer::new(10, 0.0);
        assert_eq!(zero_height.visible_range(0.0), 0..0);
        assert_eq!(zero_height.total_size(), 0.0);
    }

    #[test]
    fn test_clamp_offset() {
        let v = list(10);
        assert_eq!(v.clamp_offset(-50.0), 0.0);
        assert_eq!(v.clamp_offset(10_000.0), 120.0);
        assert_eq!(v.clamp_offset(f32::NAN), 0.0);
    }

    #[test]
    fn test_window_items_positions() {
        let w = list(100).window(0.0);
        assert_eq!(w.range, 0..12);
        assert_eq!(w.items.len(), 12);
        assert_eq!(w.items[3].start, 108.0);
        assert_eq!(w.items[3].size, 36.0);
        assert_eq!(w.total_size, 3600.0);
    }

    #[test]
    fn test_index_at() {
        let v = list(100);
        assert_eq!(v.index_at(0.0, 0.0), Some(0));
        assert_eq!(v.index_at(0.0, 37.0), Some(1));
        // Offset past the end is clamped to max_offset (3360)
        assert_eq!(v.index_at(3620.0, 0.0), Some(93));
        assert_eq!(v.index_at(0.0, -1.0), None);
        assert_eq!(v.index_at(0.0, 240.0), None);
        assert_eq!(list(2).index_at(0.0, 100.0), None);
    }

    #[test]
    fn test_offset_to_reveal() {
        let v = list(100);
        // Already visible
        assert_eq!(v.offset_to_reveal(3, 0.0), 0.0);
        // Below the viewport: align bottom edge
        assert_eq!(v.offset_to_reveal(10, 0.0), 11.0 * 36.0 - 240.0);
        // Above the viewport: align top edge
        assert_eq!(v.offset_to_reveal(2, 720.0), 72.0);
        // Last row
        assert_eq!(v.offset_to_reveal(99, 0.0), v.max_offset());
        // Out of range clamps to last row
        assert_eq!(v.offset_to_reveal(500, 0.0), v.max_offset());
    }

    #[test]
    fn test_page_rows() {
        assert_eq!(list(100).page_rows(), 6);
        assert_eq!(Virtualizer::new(10, 36.0).viewport_height(10.0).page_rows(), 1);
    }
}
