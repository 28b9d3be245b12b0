//! Rendering collaborator seam.
//!
//! The sandbox never draws anything itself. It attaches a [`Renderer`] once
//! at startup and hands it the world after every stepped frame.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::world::PhysicsWorld;

/// Output surface description handed to the renderer on attach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub width: f32,
    pub height: f32,
    pub wireframes: bool,
}

/// Trait implemented by anything that can display the world.
pub trait Renderer {
    fn name(&self) -> &str;

    /// Acquires the output surface. An error here is fatal to startup.
    fn attach(&mut self, _options: &RenderOptions) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, world: &PhysicsWorld);
}

/// Renderer that only counts frames. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NoopRenderer {
    options: Option<RenderOptions>,
    frames: u64,
}

impl NoopRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn options(&self) -> Option<RenderOptions> {
        self.options
    }
}

impl Renderer for NoopRenderer {
    fn name(&self) -> &str {
        "noop"
    }

    fn attach(&mut self, options: &RenderOptions) -> Result<()> {
        self.options = Some(*options);
        Ok(())
    }

    fn draw(&mut self, _world: &PhysicsWorld) {
        self.frames += 1;
    }
}
