//! Physics Sandbox – control layer for an interactive 2D rigid-body playground.
//!
//! A [`Sandbox`] owns a [`PhysicsWorld`] enclosed by a static boundary,
//! spawns and removes primitive shapes, switches between environment presets
//! and force toggles that each come with a narrative, and turns pointer input
//! into a soft drag constraint. The host drives it with [`Command`]s and a
//! per-frame [`Sandbox::tick`].

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod render;
pub mod sandbox;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use config::{SandboxConfig, SpawnBatch};
pub use crate::core::{
    constraints::{ConstraintId, PointerConstraint},
    rigidbody::{BodyOptions, RigidBody},
    shapes::{BodyShape, ShapeKind},
    types::{Aabb, Hsl, Material, RenderStyle},
};
pub use error::{ConfigError, Result, SandboxError};
pub use render::{NoopRenderer, RenderOptions, Renderer};
pub use sandbox::{
    Body, BodyRegistry, BoundaryFrame, Command, EnvironmentPreset, ForceController, ForceState,
    FrameReport, InteractionBridge, PointerDevice, PointerEvent, PresetCatalog, PresetId, Sandbox,
    SimulationClock,
};
pub use utils::allocator::{Arena, BodyHandle};
pub use world::PhysicsWorld;
