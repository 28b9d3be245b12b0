use thiserror::Error;

/// Top-level error type for the sandbox.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("Unknown environment preset: {0:?}")]
    InvalidPreset(String),

    #[error("Pointer stiffness {0} is outside (0, 1]")]
    InvalidStiffness(f32),

    #[error("Rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Startup configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid viewport {width}x{height} (both must be > 0)")]
    InvalidViewport { width: f32, height: f32 },

    #[error("Invalid time_step: {0} (must be > 0)")]
    InvalidTimeStep(f32),

    #[error("Invalid pointer_stiffness: {0} (must be in (0, 1])")]
    InvalidStiffness(f32),

    #[error("Invalid frame_budget_ms: {0} (must be > 0)")]
    InvalidFrameBudget(f32),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
