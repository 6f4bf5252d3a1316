//! Startup and backend errors
//!
//! Every variant is fatal: they can only occur while acquiring the window,
//! GPU or assets. The frame loop itself never fails.

use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// Event loop creation or execution failed
    EventLoop(winit::error::EventLoopError),
    /// OS window could not be created
    Window(String),
    /// No GPU adapter compatible with the window surface
    Adapter(String),
    /// Device request failed
    Device(String),
    /// Surface creation failed
    Surface(String),
    /// A sprite could not be read or decoded
    Texture { path: PathBuf, reason: String },
    /// The settings file exists but could not be used
    Settings { path: PathBuf, reason: String },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Event loop error: {}", e),
            Self::Window(e) => write!(f, "Window could not be created: {}", e),
            Self::Adapter(e) => write!(f, "No suitable GPU adapter: {}", e),
            Self::Device(e) => write!(f, "GPU device could not be created: {}", e),
            Self::Surface(e) => write!(f, "Surface could not be created: {}", e),
            Self::Texture { path, reason } => {
                write!(f, "Unable to load image {}: {}", path.display(), reason)
            }
            Self::Settings { path, reason } => {
                write!(f, "Invalid settings file {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::EventLoopError> for GameError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::EventLoop(e)
    }
}
