use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::presets::EnvironmentPreset;
use crate::world::PhysicsWorld;

pub const GRAVITY_ON: &str = "Since the gravity is turned on, objects will experience a force of attraction towards the ground. This means that any objects that were in motion will be affected by this force and may change their trajectory, and any objects that were at rest may start moving towards each other.";

pub const GRAVITY_OFF: &str = "When gravity is turned off, objects in the simulation will no longer experience any force of attraction towards each other or the ground. This means that any objects that were in motion will continue moving in a straight line, and any objects that were at rest will remain at rest. ";

pub const EM_ON: &str = "When electromagnetic force is turned on, objects that have an electric charge will experience a force of attraction or repulsion based on their charges. Objects with opposite charges will be attracted to each other, while objects with the same charge will repel each other. The strength of the electromagnetic force will depend on the charges of the objects and the distance between them. Observe slight changes in the movements as the objects repel and attract each other.";

pub const EM_OFF: &str = "When electromagnetic force is turned off, objects will not experience any force due to their charges. This means that objects with the same charge will not repel each other, and objects with opposite charges will not attract each other. The density of the objects will not have any effect, as the electromagnetic force is the only force that is affected by charges.";

/// Which global forces are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceState {
    pub gravity_enabled: bool,
    pub electromagnetic_enabled: bool,
}

impl Default for ForceState {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            electromagnetic_enabled: false,
        }
    }
}

/// Owns the force toggles and is the only writer of the world's gravity.
#[derive(Debug, Clone)]
pub struct ForceController {
    state: ForceState,
    gravity_y: f32,
}

impl ForceController {
    /// Starts Earth-like (gravity on, electromagnetism off) and writes the
    /// preset's gravity into the world.
    pub fn new(world: &mut PhysicsWorld, preset: &EnvironmentPreset) -> Self {
        let controller = Self {
            state: ForceState::default(),
            gravity_y: preset.gravity_y,
        };
        controller.write_gravity(world);
        controller
    }

    pub fn state(&self) -> ForceState {
        self.state
    }

    pub fn toggle_gravity(&mut self, world: &mut PhysicsWorld) -> &'static str {
        self.state.gravity_enabled = !self.state.gravity_enabled;
        self.write_gravity(world);
        debug!("gravity enabled: {}", self.state.gravity_enabled);
        self.gravity_narrative()
    }

    /// Flips the electromagnetic flag. Nothing in the world reads it.
    pub fn toggle_electromagnetic(&mut self) -> &'static str {
        self.state.electromagnetic_enabled = !self.state.electromagnetic_enabled;
        debug!(
            "electromagnetic enabled: {}",
            self.state.electromagnetic_enabled
        );
        self.electromagnetic_narrative()
    }

    /// Gravity narrative, a blank line, then the electromagnetic narrative.
    pub fn current_description(&self) -> String {
        format!(
            "{}\n\n{}",
            self.gravity_narrative(),
            self.electromagnetic_narrative()
        )
    }

    /// Adopts a new preset's gravity magnitude; written only while enabled.
    pub fn apply_preset(&mut self, world: &mut PhysicsWorld, preset: &EnvironmentPreset) {
        self.gravity_y = preset.gravity_y;
        self.write_gravity(world);
    }

    pub fn gravity_button_label(&self) -> &'static str {
        if self.state.gravity_enabled {
            "Gravity Enabled"
        } else {
            "Gravity Disabled"
        }
    }

    fn gravity_narrative(&self) -> &'static str {
        if self.state.gravity_enabled {
            GRAVITY_ON
        } else {
            GRAVITY_OFF
        }
    }

    fn electromagnetic_narrative(&self) -> &'static str {
        if self.state.electromagnetic_enabled {
            EM_ON
        } else {
            EM_OFF
        }
    }

    fn write_gravity(&self, world: &mut PhysicsWorld) {
        let y = if self.state.gravity_enabled {
            self.gravity_y
        } else {
            0.0
        };
        world.set_gravity(Vec2::new(0.0, y));
    }
}
