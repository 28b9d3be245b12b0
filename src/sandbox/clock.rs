use std::time::Instant;

use log::debug;

use crate::config::FRAME_BUDGET_MS;
use crate::render::Renderer;
use crate::utils::logging::warn_if_frame_budget_exceeded;
use crate::world::PhysicsWorld;

/// What a running tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub steps: u32,
    pub over_budget: bool,
}

/// Start/stop gate in front of the per-frame step-and-draw.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    running: bool,
    frame: u64,
    budget_ms: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            running: false,
            frame: 0,
            budget_ms: FRAME_BUDGET_MS,
        }
    }

    pub fn with_budget(mut self, budget_ms: f32) -> Self {
        self.budget_ms = budget_ms;
        self
    }

    pub fn start(&mut self) {
        if !self.running {
            debug!("clock started at frame {}", self.frame);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            debug!("clock stopped at frame {}", self.frame);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames ticked while running.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Steps the world by `dt` seconds and draws it. Does nothing while stopped.
    pub fn tick(
        &mut self,
        world: &mut PhysicsWorld,
        renderer: &mut dyn Renderer,
        dt: f32,
    ) -> Option<FrameReport> {
        if !self.running {
            return None;
        }

        let started = Instant::now();
        self.frame += 1;
        let steps = world.step(dt);
        renderer.draw(world);
        let over_budget = warn_if_frame_budget_exceeded(self.frame, started.elapsed(), self.budget_ms);

        Some(FrameReport {
            frame: self.frame,
            steps,
            over_budget,
        })
    }
}
