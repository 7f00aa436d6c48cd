//! Error types for resource acquisition
//!
//! The simulation itself cannot fail; only acquiring a window, a GPU device
//! or a thread can.

use thiserror::Error;

/// Failure while setting up or driving the GPU renderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Failure while launching a session
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to spawn session thread: {0}")]
    Spawn(#[from] std::io::Error),
}
