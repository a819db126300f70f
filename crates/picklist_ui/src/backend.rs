//! GPU execution of a finished [`Renderer`] frame.
//!
//! Each frame is drawn in one render pass: base quads, base text, overlay
//! quads, overlay text. Coordinates arrive in logical pixels and are scaled
//! by the window's scale factor here.

use std::sync::Arc;

use glyphon::{
    Attrs, Buffer, Cache, Family, FontSystem, Metrics, Resolution, Shaping, SwashCache, TextArea,
    TextAtlas, TextBounds, TextRenderer, Viewport,
};
use picklist_gpu::{GpuConfig, GpuContext, Quad, QuadPipeline};
use winit::window::Window;

use crate::constants::line_height;
use crate::error::{Result, UiError};
use crate::layout::Bounds;
use crate::renderer::{Color, DrawCommand, Renderer};

/// A shaped line ready for glyphon.
struct PreparedText {
    buffer: Buffer,
    left: f32,
    top: f32,
    color: Color,
    clip: Bounds,
}

/// One layer's GPU-side data for a frame.
#[derive(Default)]
struct LayerBatch {
    quads: std::ops::Range<u32>,
    texts: Vec<PreparedText>,
}

pub(crate) struct GpuBackend {
    gpu: GpuContext,
    quad_pipeline: QuadPipeline,
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    base_text: TextRenderer,
    overlay_text: TextRenderer,
    scale_factor: f32,
}

impl GpuBackend {
    pub async fn new(window: Arc<Window>, config: GpuConfig, fonts: Vec<Vec<u8>>) -> Result<Self> {
        let scale_factor = window.scale_factor() as f32;
        let gpu = GpuContext::with_config(window, config).await?;
        let format = gpu.format();

        let quad_pipeline = QuadPipeline::new(&gpu.device, format);

        let mut font_system = FontSystem::new();
        for data in fonts {
            font_system.db_mut().load_font_data(data);
        }
        if font_system.db().faces().next().is_none() {
            log::warn!("No fonts available; text will not be drawn");
        }

        let cache = Cache::new(&gpu.device);
        let viewport = Viewport::new(&gpu.device, &cache);
        let mut atlas = TextAtlas::new(&gpu.device, &gpu.queue, &cache, format);
        let base_text = TextRenderer::new(
            &mut atlas,
            &gpu.device,
            wgpu::MultisampleState::default(),
            None,
        );
        let overlay_text = TextRenderer::new(
            &mut atlas,
            &gpu.device,
            wgpu::MultisampleState::default(),
            None,
        );

        log::info!(
            "GPU backend ready ({}x{}, scale {})",
            gpu.width(),
            gpu.height(),
            scale_factor
        );

        Ok(Self {
            gpu,
            quad_pipeline,
            font_system,
            swash_cache: SwashCache::new(),
            viewport,
            atlas,
            base_text,
            overlay_text,
            scale_factor,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Logical size of the surface.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.gpu.width() as f32 / self.scale_factor,
            self.gpu.height() as f32 / self.scale_factor,
        )
    }

    fn shape(&mut self, commands: &[DrawCommand], quads: &mut Vec<Quad>) -> LayerBatch {
        let scale = self.scale_factor;
        let start = quads.len() as u32;
        let mut texts = Vec::new();

        for command in commands {
            match command {
                DrawCommand::FillRect { rect, color } => quads.push(Quad {
                    x: rect.x * scale,
                    y: rect.y * scale,
                    width: rect.width * scale,
                    height: rect.height * scale,
                    color: color.to_array(),
                }),
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                    clip,
                } => {
                    let metrics = Metrics::new(size * scale, line_height(*size) * scale);
                    let mut buffer = Buffer::new(&mut self.font_system, metrics);
                    buffer.set_size(&mut self.font_system, None, None);
                    buffer.set_text(
                        &mut self.font_system,
                        text,
                        &Attrs::new().family(Family::SansSerif),
                        Shaping::Advanced,
                        None,
                    );
                    buffer.shape_until_scroll(&mut self.font_system, false);
                    texts.push(PreparedText {
                        buffer,
                        left: x * scale,
                        top: y * scale,
                        color: *color,
                        clip: *clip,
                    });
                }
            }
        }

        LayerBatch {
            quads: start..quads.len() as u32,
            texts,
        }
    }

    fn text_areas(batch: &LayerBatch, scale: f32) -> Vec<TextArea<'_>> {
        batch
            .texts
            .iter()
            .map(|t| {
                let [r, g, b, a] = t.color.to_rgba8();
                TextArea {
                    buffer: &t.buffer,
                    left: t.left,
                    top: t.top,
                    scale: 1.0,
                    bounds: TextBounds {
                        left: (t.clip.x * scale).floor() as i32,
                        top: (t.clip.y * scale).floor() as i32,
                        right: (t.clip.right() * scale).ceil() as i32,
                        bottom: (t.clip.bottom() * scale).ceil() as i32,
                    },
                    default_color: glyphon::Color::rgba(r, g, b, a),
                    custom_glyphs: &[],
                }
            })
            .collect()
    }

    /// Draw one frame. Lost or outdated surfaces are reconfigured and the frame skipped.
    pub fn render(&mut self, frame: &Renderer) -> Result<()> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(UiError::Surface(e)),
        };

        let (width, height) = (self.gpu.width(), self.gpu.height());
        let mut quads = Vec::new();
        let base = self.shape(frame.commands(), &mut quads);
        let overlay = self.shape(frame.overlay_commands(), &mut quads);

        self.quad_pipeline.upload(
            &self.gpu.device,
            &self.gpu.queue,
            &quads,
            (width as f32, height as f32),
        );
        self.viewport.update(&self.gpu.queue, Resolution { width, height });

        let base_areas = Self::text_areas(&base, self.scale_factor);
        self.base_text.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            base_areas,
            &mut self.swash_cache,
        )?;
        let overlay_areas = Self::text_areas(&overlay, self.scale_factor);
        self.overlay_text.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            overlay_areas,
            &mut self.swash_cache,
        )?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.gpu.config.clear_color.into()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.quad_pipeline.draw(&mut pass, base.quads.clone());
            self.base_text.render(&self.atlas, &self.viewport, &mut pass)?;
            self.quad_pipeline.draw(&mut pass, overlay.quads.clone());
            self.overlay_text
                .render(&self.atlas, &self.viewport, &mut pass)?;
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.atlas.trim();
        Ok(())
    }
}
