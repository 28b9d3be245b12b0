use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::constraints::{ConstraintId, PointerConstraint};
use crate::error::{Result, SandboxError};
use crate::utils::allocator::BodyHandle;
use crate::world::PhysicsWorld;

/// Last known pointer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerDevice {
    pub position: Vec2,
    pub pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Connects pointer input to a soft drag constraint registered in the world.
#[derive(Debug, Clone)]
pub struct InteractionBridge {
    pointer: PointerDevice,
    constraint: ConstraintId,
}

impl InteractionBridge {
    /// Registers an invisible pointer constraint. `stiffness` must lie in (0, 1].
    pub fn bind(pointer: PointerDevice, world: &mut PhysicsWorld, stiffness: f32) -> Result<Self> {
        if !(stiffness > 0.0 && stiffness <= 1.0) {
            return Err(SandboxError::InvalidStiffness(stiffness));
        }

        let mut constraint = PointerConstraint::new(stiffness);
        constraint.set_pointer(pointer.position);
        let constraint = world.add_constraint(constraint);
        Ok(Self {
            pointer,
            constraint,
        })
    }

    pub fn pointer(&self) -> PointerDevice {
        self.pointer
    }

    pub fn constraint_id(&self) -> ConstraintId {
        self.constraint
    }

    /// Feeds one pointer event through. Returns the body held afterwards.
    pub fn handle(&mut self, world: &mut PhysicsWorld, event: PointerEvent) -> Option<BodyHandle> {
        match event {
            PointerEvent::Down(position) => {
                self.pointer = PointerDevice {
                    position,
                    pressed: true,
                };
                let target = world.body_at(position);
                let offset = target
                    .and_then(|handle| world.body_mut(handle))
                    .map(|body| {
                        body.wake();
                        position - body.position
                    });
                let constraint = world.constraint_mut(self.constraint)?;
                if let Some(previous) = constraint.release() {
                    debug!("pointer dropped {previous:?} on a new press");
                }
                constraint.set_pointer(position);
                if let (Some(handle), Some(offset)) = (target, offset) {
                    constraint.attach(handle, offset);
                    debug!("pointer grabbed {handle:?}");
                }
            }
            PointerEvent::Move(position) => {
                self.pointer.position = position;
                world.constraint_mut(self.constraint)?.set_pointer(position);
            }
            PointerEvent::Up => {
                self.pointer.pressed = false;
                if let Some(handle) = world.constraint_mut(self.constraint)?.release() {
                    debug!("pointer released {handle:?}");
                }
            }
        }
        self.grabbed(world)
    }

    pub fn grabbed(&self, world: &PhysicsWorld) -> Option<BodyHandle> {
        world.constraint(self.constraint)?.grabbed()
    }
}
