use glam::Vec2;

use super::shapes::BodyShape;
use super::types::{Aabb, Material, RenderStyle};
use crate::config::DEFAULT_LINEAR_DAMPING;
use crate::utils::allocator::BodyHandle;

/// Creation options shared by every body constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyOptions {
    pub is_static: bool,
    pub material: Material,
    /// Carried for display only; no force reads it.
    pub charge: f32,
    pub render: RenderStyle,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            is_static: false,
            material: Material::default(),
            charge: 0.0,
            render: RenderStyle::default(),
        }
    }
}

impl BodyOptions {
    pub fn fixed(render: RenderStyle) -> Self {
        Self {
            is_static: true,
            render,
            ..Self::default()
        }
    }
}

/// A body living in the physics world.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub handle: BodyHandle,
    pub shape: BodyShape,
    pub position: Vec2,
    pub velocity: Vec2,
    pub material: Material,
    pub charge: f32,
    pub render: RenderStyle,
    pub is_static: bool,
    pub is_sleeping: bool,
    pub sleep_counter: u32,
    pub linear_damping: f32,
    mass: f32,
    inverse_mass: f32,
}

impl RigidBody {
    pub fn new(shape: BodyShape, position: Vec2, options: BodyOptions) -> Self {
        let mut body = Self {
            handle: BodyHandle::default(),
            shape,
            position,
            velocity: Vec2::ZERO,
            material: options.material,
            charge: options.charge,
            render: options.render,
            is_static: options.is_static,
            is_sleeping: false,
            sleep_counter: 0,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            mass: 0.0,
            inverse_mass: 0.0,
        };
        body.recompute_mass();
        body
    }

    pub fn circle(position: Vec2, radius: f32, options: BodyOptions) -> Self {
        Self::new(BodyShape::Circle { radius }, position, options)
    }

    pub fn rectangle(position: Vec2, width: f32, height: f32, options: BodyOptions) -> Self {
        let half_extents = Vec2::new(width, height) * 0.5;
        Self::new(BodyShape::Rectangle { half_extents }, position, options)
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.shape.half_extents())
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.shape.contains(point - self.position)
    }

    pub fn wake(&mut self) {
        self.is_sleeping = false;
        self.sleep_counter = 0;
    }

    pub fn put_to_sleep(&mut self) {
        self.is_sleeping = true;
        self.velocity = Vec2::ZERO;
    }

    fn recompute_mass(&mut self) {
        if self.is_static {
            self.mass = f32::INFINITY;
            self.inverse_mass = 0.0;
            return;
        }
        self.mass = self.material.density.max(f32::EPSILON) * self.shape.area();
        self.inverse_mass = 1.0 / self.mass;
    }
}
