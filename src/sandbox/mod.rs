//! The simulation control layer.
//!
//! [`Sandbox`] is the context object owning the physics world, the renderer
//! and the components that write to the world: the boundary frame (static
//! bodies), the body registry (dynamic bodies), the force controller
//! (gravity) and the interaction bridge (pointer constraint). Host actions
//! arrive as [`Command`]s and are applied on the caller's thread.

pub mod boundary;
pub mod clock;
pub mod command;
pub mod force;
pub mod interaction;
pub mod presets;
pub mod registry;

use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, info};

pub use boundary::BoundaryFrame;
pub use clock::{FrameReport, SimulationClock};
pub use command::Command;
pub use force::{ForceController, ForceState};
pub use interaction::{InteractionBridge, PointerDevice, PointerEvent};
pub use presets::{EnvironmentPreset, PresetCatalog, PresetId};
pub use registry::{Body, BodyRegistry};

use crate::config::SandboxConfig;
use crate::error::Result;
use crate::render::{NoopRenderer, RenderOptions, Renderer};
use crate::world::PhysicsWorld;

pub struct Sandbox {
    world: PhysicsWorld,
    renderer: Box<dyn Renderer>,
    boundary: BoundaryFrame,
    registry: BodyRegistry,
    forces: ForceController,
    interaction: InteractionBridge,
    clock: SimulationClock,
    preset: PresetId,
    pending: VecDeque<Command>,
    narrative: &'static str,
}

impl Sandbox {
    /// Headless sandbox drawing into a [`NoopRenderer`].
    pub fn new(config: SandboxConfig) -> Result<Self> {
        Self::with_renderer(config, Box::new(NoopRenderer::new()))
    }

    /// Builds the world in dependency order: surface, boundary, forces,
    /// pointer, then the initial population. The clock starts stopped.
    pub fn with_renderer(config: SandboxConfig, mut renderer: Box<dyn Renderer>) -> Result<Self> {
        config.validate()?;
        let (width, height) = (config.viewport_width, config.viewport_height);

        renderer.attach(&RenderOptions {
            width,
            height,
            wireframes: config.wireframes,
        })?;

        let preset = config.preset.preset();
        let mut world = PhysicsWorld::new(config.time_step);
        world.set_sleeping_enabled(preset.sleeping_enabled);

        let boundary = BoundaryFrame::build(&mut world, width, height);
        let forces = ForceController::new(&mut world, preset);
        let interaction =
            InteractionBridge::bind(PointerDevice::default(), &mut world, config.pointer_stiffness)?;

        let mut registry = BodyRegistry::new(Vec2::new(width / 2.0, height / 2.0), config.seed);
        for batch in &config.initial_population {
            registry.spawn_batch(&mut world, batch.count, batch.shape, preset);
        }

        info!(
            "sandbox ready: {width}x{height}, preset {}, {} bodies, renderer {}",
            config.preset,
            registry.len(),
            renderer.name()
        );

        Ok(Self {
            world,
            renderer,
            boundary,
            registry,
            forces,
            interaction,
            clock: SimulationClock::new().with_budget(config.frame_budget_ms),
            preset: config.preset,
            pending: VecDeque::new(),
            narrative: preset.description,
        })
    }

    /// Applies a command immediately. Returns the narrative for the text
    /// region when the command changes one.
    pub fn dispatch(&mut self, command: Command) -> Option<&'static str> {
        debug!("dispatch {command:?}");
        let narrative = match command {
            Command::ToggleGravity => Some(self.forces.toggle_gravity(&mut self.world)),
            Command::ToggleElectromagnetic => Some(self.forces.toggle_electromagnetic()),
            Command::Spawn { shape, count } => {
                let preset = self.preset.preset();
                self.registry
                    .spawn_batch(&mut self.world, count, shape, preset);
                None
            }
            Command::Despawn => {
                self.registry.despawn_last(&mut self.world);
                None
            }
            Command::Clear => {
                self.registry.clear(&mut self.world);
                None
            }
            Command::SelectPreset { preset, reset } => Some(self.select_preset(preset, reset)),
            Command::Pointer(event) => {
                self.interaction.handle(&mut self.world, event);
                None
            }
        };
        if let Some(text) = narrative {
            self.narrative = text;
        }
        narrative
    }

    /// Buffers a command until the next [`Sandbox::tick`].
    pub fn enqueue(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Applies every buffered command in order, then steps and draws one
    /// frame if the clock is running.
    pub fn tick(&mut self, dt: f32) -> Option<FrameReport> {
        while let Some(command) = self.pending.pop_front() {
            self.dispatch(command);
        }
        self.clock
            .tick(&mut self.world, self.renderer.as_mut(), dt)
    }

    pub fn start(&mut self) {
        self.clock.start();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn boundary(&self) -> &BoundaryFrame {
        &self.boundary
    }

    pub fn force_state(&self) -> ForceState {
        self.forces.state()
    }

    pub fn forces(&self) -> &ForceController {
        &self.forces
    }

    pub fn interaction(&self) -> &InteractionBridge {
        &self.interaction
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn preset(&self) -> &'static EnvironmentPreset {
        self.preset.preset()
    }

    /// Text currently shown in the narrative region.
    pub fn narrative(&self) -> &'static str {
        self.narrative
    }

    pub fn gravity_button_label(&self) -> &'static str {
        self.forces.gravity_button_label()
    }

    /// Viewport captured at startup; resizes are not tracked.
    pub fn viewport(&self) -> Vec2 {
        self.boundary.viewport()
    }

    fn select_preset(&mut self, id: PresetId, reset: bool) -> &'static str {
        if reset {
            self.registry.clear(&mut self.world);
        }
        let preset = id.preset();
        self.preset = id;
        self.world.set_sleeping_enabled(preset.sleeping_enabled);
        self.forces.apply_preset(&mut self.world, preset);
        debug!("preset {id} selected (reset: {reset})");
        preset.description
    }
}
