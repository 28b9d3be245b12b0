use glam::Vec2;
use log::debug;

use crate::config::BOUNDARY_THICKNESS;
use crate::core::rigidbody::{BodyOptions, RigidBody};
use crate::core::types::{Hsl, RenderStyle};
use crate::utils::allocator::BodyHandle;
use crate::world::PhysicsWorld;

/// The four static bodies enclosing the arena.
///
/// Sized from the viewport captured when built. A later resize does not
/// move them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryFrame {
    pub floor: BodyHandle,
    pub ceiling: BodyHandle,
    pub left_wall: BodyHandle,
    pub right_wall: BodyHandle,
    viewport: Vec2,
}

impl BoundaryFrame {
    pub fn build(world: &mut PhysicsWorld, width: f32, height: f32) -> Self {
        let style = RenderStyle {
            fill: Hsl::BLACK,
            visible: true,
        };
        let mut wall = |center: Vec2, size: Vec2| {
            world.add_body(RigidBody::rectangle(
                center,
                size.x,
                size.y,
                BodyOptions::fixed(style),
            ))
        };

        let floor = wall(
            Vec2::new(width / 2.0, height),
            Vec2::new(width, BOUNDARY_THICKNESS),
        );
        let left_wall = wall(
            Vec2::new(0.0, height / 2.0),
            Vec2::new(BOUNDARY_THICKNESS, height),
        );
        let right_wall = wall(
            Vec2::new(width, height / 2.0),
            Vec2::new(BOUNDARY_THICKNESS, height),
        );
        let ceiling = wall(
            Vec2::new(width / 2.0, 0.0),
            Vec2::new(width, BOUNDARY_THICKNESS),
        );
        debug!("boundary built for {width}x{height} viewport");

        Self {
            floor,
            ceiling,
            left_wall,
            right_wall,
            viewport: Vec2::new(width, height),
        }
    }

    pub fn handles(&self) -> [BodyHandle; 4] {
        [self.floor, self.left_wall, self.right_wall, self.ceiling]
    }

    /// Viewport size at construction time.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}
