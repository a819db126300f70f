use picklist_gpu::GpuError;
use thiserror::Error;

/// Errors raised while starting or driving the UI runtime
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU initialization failed: {0}")]
    Gpu(#[from] GpuError),

    #[error("Failed to prepare text: {0}")]
    TextPrepare(#[from] glyphon::PrepareError),

    #[error("Failed to render text: {0}")]
    TextRender(#[from] glyphon::RenderError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Failed to load font: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
