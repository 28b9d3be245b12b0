//! Built-in environment presets and their narratives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandboxError};

/// Identifier of a built-in environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetId {
    Vacuum,
    Fluid,
    DenseAtmosphere,
    Earth,
}

impl PresetId {
    pub const ALL: [PresetId; 4] = [
        PresetId::Vacuum,
        PresetId::Fluid,
        PresetId::DenseAtmosphere,
        PresetId::Earth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetId::Vacuum => "vacuum",
            PresetId::Fluid => "fluid",
            PresetId::DenseAtmosphere => "denseAtmosphere",
            PresetId::Earth => "earth",
        }
    }

    pub fn preset(&self) -> &'static EnvironmentPreset {
        match self {
            PresetId::Vacuum => &VACUUM,
            PresetId::Fluid => &FLUID,
            PresetId::DenseAtmosphere => &DENSE_ATMOSPHERE,
            PresetId::Earth => &EARTH,
        }
    }
}

impl FromStr for PresetId {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        PresetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SandboxError::InvalidPreset(s.to_string()))
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical constants applied while an environment is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentPreset {
    pub id: PresetId,
    /// Vertical gravity in engine units (1.0 is Earth-like).
    pub gravity_y: f32,
    pub restitution: f32,
    pub density: f32,
    /// Narrative only; no buoyant force is computed.
    pub buoyancy: f32,
    pub sleeping_enabled: bool,
    pub description: &'static str,
}

pub const VACUUM: EnvironmentPreset = EnvironmentPreset {
    id: PresetId::Vacuum,
    gravity_y: 0.0,
    restitution: 0.0,
    density: 0.0001,
    buoyancy: 0.0,
    sleeping_enabled: true,
    description: "The simulation is currently set to emulate a vacuum environment, with no gravity force applied to objects. Collisions between objects have a restitution value of 0, meaning no energy is retained after a collision and no heat or sound is produced. The density of each object in the simulation is set to 0.0001, making the objects less massive and experiencing minimal force due to gravity.",
};

pub const FLUID: EnvironmentPreset = EnvironmentPreset {
    id: PresetId::Fluid,
    gravity_y: 0.0,
    restitution: 0.0,
    density: 1.0,
    buoyancy: 0.5,
    sleeping_enabled: false,
    description: "The simulation is currently set to emulate a fluid environment, with no gravity force applied to objects and sleep mode disabled for continuous simulation. Collisions between objects have a restitution value of 0, meaning no energy is retained after a collision and no heat or sound is produced. The density of each object in the simulation is set to 1, making the objects more massive and experiencing a greater force due to buoyancy in the fluid. The buoyancy value is set to 0.5, causing the objects to float and move with the fluid.",
};

pub const DENSE_ATMOSPHERE: EnvironmentPreset = EnvironmentPreset {
    id: PresetId::DenseAtmosphere,
    gravity_y: 1.0,
    restitution: 0.2,
    density: 0.01,
    buoyancy: 0.0,
    sleeping_enabled: true,
    description: "The simulation is currently set to emulate a dense atmosphere, with a gravity force similar to Earth and sleep mode enabled for efficient resource management. Collisions between objects have a restitution value of 0.2, meaning 20% of the energy is retained after a collision while the remaining 80% is lost as heat and sound. The density of each object in the simulation is set to 0.01, making the objects more massive and experiencing a greater force due to gravity.",
};

pub const EARTH: EnvironmentPreset = EnvironmentPreset {
    id: PresetId::Earth,
    gravity_y: 1.0,
    restitution: 0.2,
    density: 0.001,
    buoyancy: 0.0,
    sleeping_enabled: false,
    description: "The simulation is currently set to emulate earth-like conditions, with a gravity value same as the Earth. The restitution value between collisions is set such that 20% of the energy is retained after a collision, while the remaining 80% is lost as heat and sound. The density of each object in the simulation, set to 0.001 so that the objects are less massive and therefore experience less force due to gravity.",
};

/// Read-only lookup over the built-in presets.
pub struct PresetCatalog;

impl PresetCatalog {
    /// Looks a preset up by its string identifier.
    pub fn get_preset(id: &str) -> Result<&'static EnvironmentPreset> {
        id.parse::<PresetId>().map(|id| id.preset())
    }

    pub fn describe(id: &str) -> Result<&'static str> {
        Self::get_preset(id).map(|preset| preset.description)
    }

    pub fn all() -> impl Iterator<Item = &'static EnvironmentPreset> {
        PresetId::ALL.into_iter().map(|id| id.preset())
    }
}
