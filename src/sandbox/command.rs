use serde::{Deserialize, Serialize};

use super::interaction::PointerEvent;
use super::presets::PresetId;
use crate::core::shapes::ShapeKind;

/// A discrete action raised by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    ToggleGravity,
    ToggleElectromagnetic,
    Spawn { shape: ShapeKind, count: usize },
    Despawn,
    Clear,
    /// Switches environment; `reset` clears the population first.
    SelectPreset { preset: PresetId, reset: bool },
    Pointer(PointerEvent),
}

impl Command {
    /// Spawn command from a host-supplied shape name.
    pub fn spawn_named(name: &str, count: usize) -> Self {
        Command::Spawn {
            shape: ShapeKind::from_name(name),
            count,
        }
    }
}
