//! Frame description produced by widgets.
//!
//! Widgets never touch the GPU. They push [`DrawCommand`]s into a
//! [`Renderer`], which clips them and sorts them into a base layer and an
//! overlay layer. The GPU backend consumes the finished frame; tests inspect
//! it directly.

use crate::constants::line_height;
use crate::layout::Bounds;

/// An RGBA color with linear components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to 8-bit sRGB components as used by the text renderer.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [c(self.r), c(self.g), c(self.b), c(self.a)]
    }
}

/// A single primitive in a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: Color,
    },
    /// Single-line text; `y` is the top of the line box.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        clip: Bounds,
    },
}

#[derive(Debug, Default)]
struct Layer {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Bounds>,
}

/// Collects the draw commands for one frame.
#[derive(Debug)]
pub struct Renderer {
    width: f32,
    height: f32,
    base: Layer,
    overlay: Layer,
    in_overlay: bool,
}

impl Renderer {
    /// Create a renderer for a viewport of `width` x `height` logical pixels.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            base: Layer::default(),
            overlay: Layer::default(),
            in_overlay: false,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn viewport(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    fn layer(&self) -> &Layer {
        if self.in_overlay {
            &self.overlay
        } else {
            &self.base
        }
    }

    fn layer_mut(&mut self) -> &mut Layer {
        if self.in_overlay {
            &mut self.overlay
        } else {
            &mut self.base
        }
    }

    /// The active clip rectangle (viewport when nothing is pushed).
    pub fn current_clip(&self) -> Bounds {
        self.layer()
            .clip_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.viewport())
    }

    /// Restrict subsequent drawing to `bounds` intersected with the active clip.
    pub fn push_clip(&mut self, bounds: Bounds) {
        let clip = self
            .current_clip()
            .intersect(&bounds)
            .unwrap_or(Bounds::new(bounds.x, bounds.y, 0.0, 0.0));
        self.layer_mut().clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        if self.layer_mut().clip_stack.pop().is_none() {
            log::warn!("pop_clip called with an empty clip stack");
        }
    }

    /// Route subsequent commands to the overlay layer, drawn above everything else.
    pub fn begin_overlay(&mut self) {
        self.in_overlay = true;
    }

    pub fn end_overlay(&mut self) {
        self.in_overlay = false;
    }

    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        if color.a <= 0.0 {
            return;
        }
        if let Some(clipped) = self.current_clip().intersect(&rect) {
            self.layer_mut()
                .commands
                .push(DrawCommand::FillRect { rect: clipped, color });
        }
    }

    /// Outline drawn as four filled edges inside `rect`.
    pub fn stroke_rect(&mut self, rect: Bounds, color: Color, width: f32) {
        let w = width.min(rect.width / 2.0).min(rect.height / 2.0);
        if w <= 0.0 {
            return;
        }
        self.fill_rect(Bounds::new(rect.x, rect.y, rect.width, w), color);
        self.fill_rect(
            Bounds::new(rect.x, rect.bottom() - w, rect.width, w),
            color,
        );
        self.fill_rect(
            Bounds::new(rect.x, rect.y + w, w, rect.height - 2.0 * w),
            color,
        );
        self.fill_rect(
            Bounds::new(rect.right() - w, rect.y + w, w, rect.height - 2.0 * w),
            color,
        );
    }

    /// Draw one line of text with its line box starting at `(x, y)`.
    ///
    /// Text whose line box lies entirely outside the active clip is dropped.
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        let clip = self.current_clip();
        let line = Bounds::new(x, y, f32::MAX / 4.0, line_height(size));
        if clip.intersect(&line).is_none() {
            return;
        }
        self.layer_mut().commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
            clip,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.base.commands
    }

    pub fn overlay_commands(&self) -> &[DrawCommand] {
        &self.overlay.commands
    }

    /// All text strings in the frame, base layer first.
    pub fn texts(&self) -> Vec<&str> {
        self.base
            .commands
            .iter()
            .chain(self.overlay.commands.iter())
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::FillRect { .. } => None,
            })
            .collect()
    }

    /// Whether any text command in the frame reads exactly `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut r = Renderer::new(100.0, 100.0);
        r.push_clip(Bounds::new(10.0, 10.0, 20.0, 20.0));
        r.fill_rect(Bounds::new(0.0, 0.0, 50.0, 50.0), Color::WHITE);
        r.fill_rect(Bounds::new(60.0, 60.0, 5.0, 5.0), Color::WHITE);
        r.pop_clip();

        assert_eq!(
            r.commands(),
            &[DrawCommand::FillRect {
                rect: Bounds::new(10.0, 10.0, 20.0, 20.0),
                color: Color::WHITE,
            }]
        );
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = Renderer::new(100.0, 100.0);
        r.push_clip(Bounds::new(0.0, 0.0, 50.0, 50.0));
        r.push_clip(Bounds::new(40.0, 40.0, 50.0, 50.0));
        assert_eq!(r.current_clip(), Bounds::new(40.0, 40.0, 10.0, 10.0));
        r.pop_clip();
        assert_eq!(r.current_clip(), Bounds::new(0.0, 0.0, 50.0, 50.0));
        r.pop_clip();
        assert_eq!(r.current_clip(), r.viewport());
    }

    #[test]
    fn test_text_outside_clip_is_dropped() {
        let mut r = Renderer::new(200.0, 200.0);
        r.push_clip(Bounds::new(0.0, 0.0, 200.0, 36.0));
        r.text("visible", 0.0, 10.0, 14.0, Color::WHITE);
        r.text("hidden", 0.0, 100.0, 14.0, Color::WHITE);
        r.pop_clip();
        assert_eq!(r.texts(), vec!["visible"]);
    }

    #[test]
    fn test_overlay_layer_is_separate() {
        let mut r = Renderer::new(100.0, 100.0);
        r.text("base", 0.0, 0.0, 14.0, Color::WHITE);
        r.begin_overlay();
        r.text("popup", 0.0, 0.0, 14.0, Color::WHITE);
        r.end_overlay();

        assert_eq!(r.commands().len(), 1);
        assert_eq!(r.overlay_commands().len(), 1);
        assert_eq!(r.texts(), vec!["base", "popup"]);
        assert!(r.contains_text("popup"));
    }

    #[test]
    fn test_stroke_rect_emits_four_edges() {
        let mut r = Renderer::new(100.0, 100.0);
        r.stroke_rect(Bounds::new(10.0, 10.0, 30.0, 20.0), Color::BLACK, 1.0);
        assert_eq!(r.commands().len(), 4);
    }

    #[test]
    fn test_transparent_fill_is_skipped() {
        let mut r = Renderer::new(100.0, 100.0);
        r.fill_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::TRANSPARENT);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::rgba(0.0, 0.5, 2.0, 0.0).to_rgba8(), [0, 128, 255, 0]);
    }
}
