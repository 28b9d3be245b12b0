//! Global configuration constants and the startup configuration for a sandbox.

use serde::{Deserialize, Serialize};

use crate::core::shapes::ShapeKind;
use crate::error::ConfigError;
use crate::sandbox::presets::PresetId;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Upper bound on steps taken from one tick, so a stalled host cannot
/// trigger a catch-up spiral.
pub const MAX_STEPS_PER_TICK: u32 = 5;

/// Acceleration in px/s² produced by one unit of gravity (+y points down).
pub const GRAVITY_SCALE: f32 = 1000.0;

/// Damping applied to linear velocity, per second.
pub const DEFAULT_LINEAR_DAMPING: f32 = 0.06;

/// Thickness of the floor, ceiling and walls.
pub const BOUNDARY_THICKNESS: f32 = 10.0;

/// Radius of spawned circles and triangles, side length of spawned squares.
pub const SHAPE_SIZE: f32 = 50.0;

/// Speed (px/s) under which a body counts as resting.
pub const SLEEP_SPEED_THRESHOLD: f32 = 4.0;

/// Consecutive resting steps before a body falls asleep.
pub const SLEEP_FRAMES: u32 = 60;

/// Stiffness of the pointer drag constraint.
pub const DEFAULT_POINTER_STIFFNESS: f32 = 0.2;

/// Frame budget used for overrun warnings (60 Hz display).
pub const FRAME_BUDGET_MS: f32 = 16.7;

pub const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// A run of identical spawns, used for the startup population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnBatch {
    pub shape: ShapeKind,
    pub count: usize,
}

impl SpawnBatch {
    pub fn new(shape: ShapeKind, count: usize) -> Self {
        Self { shape, count }
    }

    /// Seventeen batches of ten, cycling circle, triangle, square.
    pub fn showcase() -> Vec<SpawnBatch> {
        const CYCLE: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];
        (0..17)
            .map(|i| SpawnBatch::new(CYCLE[i % CYCLE.len()], 10))
            .collect()
    }
}

/// Startup configuration for [`crate::Sandbox`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub time_step: f32,
    pub pointer_stiffness: f32,
    pub seed: u64,
    pub preset: PresetId,
    pub wireframes: bool,
    pub frame_budget_ms: f32,
    pub initial_population: Vec<SpawnBatch>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
            time_step: DEFAULT_TIME_STEP,
            pointer_stiffness: DEFAULT_POINTER_STIFFNESS,
            seed: 0,
            preset: PresetId::Earth,
            wireframes: true,
            frame_budget_ms: FRAME_BUDGET_MS,
            initial_population: Vec::new(),
        }
    }
}

impl SandboxConfig {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_preset(mut self, preset: PresetId) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_population(mut self, batches: Vec<SpawnBatch>) -> Self {
        self.initial_population = batches;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewport_ok = self.viewport_width.is_finite()
            && self.viewport_height.is_finite()
            && self.viewport_width > 0.0
            && self.viewport_height > 0.0;
        if !viewport_ok {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }
        if !(self.pointer_stiffness > 0.0 && self.pointer_stiffness <= 1.0) {
            return Err(ConfigError::InvalidStiffness(self.pointer_stiffness));
        }
        if !(self.frame_budget_ms > 0.0) {
            return Err(ConfigError::InvalidFrameBudget(self.frame_budget_ms));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_population_cycles_shapes() {
        let batches = SpawnBatch::showcase();
        assert_eq!(batches.len(), 17);
        assert_eq!(batches.iter().map(|b| b.count).sum::<usize>(), 170);
        assert_eq!(batches[0].shape, ShapeKind::Circle);
        assert_eq!(batches[1].shape, ShapeKind::Triangle);
        assert_eq!(batches[2].shape, ShapeKind::Square);
        assert_eq!(batches[16].shape, ShapeKind::Triangle);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(SandboxConfig::default().validate().is_ok());

        let config = SandboxConfig::default().with_viewport(0.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewport { .. })
        ));

        let config = SandboxConfig {
            time_step: -1.0,
            ..SandboxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeStep(_))
        ));

        let config = SandboxConfig {
            pointer_stiffness: 1.5,
            ..SandboxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStiffness(_))
        ));

        let config = SandboxConfig {
            frame_budget_ms: 0.0,
            ..SandboxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFrameBudget(_))
        ));
    }
}
