//! Batched pipeline for solid color quads.
//!
//! Every rectangle of a frame is written into one vertex buffer. Layers are
//! drawn as index ranges of that buffer, so a frame costs one upload and one
//! draw call per layer no matter how many rows are on screen.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Initial number of quads the buffers can hold before growing.
const INITIAL_QUAD_CAPACITY: usize = 256;

const INDICES_PER_QUAD: u32 = 6;

/// Vertex for colored shapes (no texture)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// A solid rectangle in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl Quad {
    /// Convert to four vertices in normalized device coordinates
    /// (top-left, top-right, bottom-right, bottom-left).
    pub fn vertices(&self, screen_width: f32, screen_height: f32) -> [QuadVertex; 4] {
        let x1 = (self.x / screen_width) * 2.0 - 1.0;
        let y1 = 1.0 - (self.y / screen_height) * 2.0;
        let x2 = ((self.x + self.width) / screen_width) * 2.0 - 1.0;
        let y2 = 1.0 - ((self.y + self.height) / screen_height) * 2.0;
        let color = self.color;

        [
            QuadVertex { position: [x1, y1], color },
            QuadVertex { position: [x2, y1], color },
            QuadVertex { position: [x2, y2], color },
            QuadVertex { position: [x1, y2], color },
        ]
    }
}

fn quad_indices(count: usize) -> Vec<u32> {
    (0..count as u32)
        .flat_map(|i| {
            let base = i * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}

/// Pipeline for rendering solid color rectangles
pub struct QuadPipeline {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    capacity: usize,
}

impl QuadPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        });

        let (vertex_buffer, index_buffer) = Self::create_buffers(device, INITIAL_QUAD_CAPACITY);

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            capacity: INITIAL_QUAD_CAPACITY,
        }
    }

    fn create_buffers(device: &wgpu::Device, capacity: usize) -> (wgpu::Buffer, wgpu::Buffer) {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Quad Vertex Buffer"),
            size: (capacity * 4 * std::mem::size_of::<QuadVertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Indices depend only on capacity.
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&quad_indices(capacity)),
            usage: wgpu::BufferUsages::INDEX,
        });

        (vertex_buffer, index_buffer)
    }

    /// Upload all quads of a frame. Quads keep their order, so callers can draw
    /// sub-ranges with [`QuadPipeline::draw`].
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        quads: &[Quad],
        screen_size: (f32, f32),
    ) {
        if quads.is_empty() {
            return;
        }

        if quads.len() > self.capacity {
            let capacity = quads.len().next_power_of_two();
            log::debug!("Growing quad buffers: {} -> {}", self.capacity, capacity);
            let (vertex_buffer, index_buffer) = Self::create_buffers(device, capacity);
            self.vertex_buffer = vertex_buffer;
            self.index_buffer = index_buffer;
            self.capacity = capacity;
        }

        let vertices: Vec<QuadVertex> = quads
            .iter()
            .flat_map(|q| q.vertices(screen_size.0, screen_size.1))
            .collect();

        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    /// Draw a range of previously uploaded quads.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, quads: Range<u32>) {
        if quads.is_empty() {
            return;
        }
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(
            quads.start * INDICES_PER_QUAD..quads.end * INDICES_PER_QUAD,
            0,
            0..1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_screen_quad_maps_to_ndc_corners() {
        let quad = Quad {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            color: [1.0, 0.0, 0.0, 1.0],
        };
        let v = quad.vertices(800.0, 600.0);
        assert_eq!(v[0].position, [-1.0, 1.0]);
        assert_eq!(v[2].position, [1.0, -1.0]);
    }

    #[test]
    fn test_quad_center_of_screen() {
        let quad = Quad {
            x: 400.0,
            y: 300.0,
            width: 0.0,
            height: 0.0,
            color: [0.0; 4],
        };
        let v = quad.vertices(800.0, 600.0);
        assert!(v[0].position[0].abs() < 1e-6);
        assert!(v[0].position[1].abs() < 1e-6);
    }

    #[test]
    fn test_quad_indices_are_two_triangles_per_quad() {
        let indices = quad_indices(2);
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7]);
    }
}
