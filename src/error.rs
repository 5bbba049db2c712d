//! Error types for sparkbox.
//!
//! Particle updates and drawing never fail. These types cover window and GPU
//! acquisition at startup, plus parsing of shape names.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12/GL support.")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur when running the visualizer.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// Failed to create or run the event loop.
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

/// A shape name that is not one of the known particle shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown particle shape '{0}'")]
pub struct ShapeParseError(pub String);
