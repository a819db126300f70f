//! picklist_gpu - wgpu plumbing for the picklist UI toolkit.
//!
//! Owns device/surface setup and the batched quad pipeline used to draw
//! every solid-color rectangle of a frame in a single draw call per layer.

pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;

pub use config::{ClearColor, GpuConfig};
pub use context::GpuContext;
pub use error::{GpuError, Result};
pub use pipeline::{Quad, QuadPipeline, QuadVertex};
