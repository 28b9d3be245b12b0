use glam::Vec2;
use log::{debug, trace};

use crate::{
    config::{DEFAULT_TIME_STEP, GRAVITY_SCALE, MAX_STEPS_PER_TICK},
    core::{
        constraints::{ConstraintId, PointerConstraint},
        rigidbody::RigidBody,
    },
    dynamics::{containment, integrator::Integrator, sleeping},
    utils::{
        allocator::{Arena, BodyHandle},
        logging::ScopedTimer,
    },
};

/// The physics world the sandbox drives. Screen coordinates, +y down.
pub struct PhysicsWorld {
    bodies: Arena<RigidBody>,
    constraints: Vec<PointerConstraint>,
    integrator: Integrator,
    gravity: Vec2,
    sleeping_enabled: bool,
    time_accumulated: f32,
    time_step: f32,
    steps: u64,
    parallel_enabled: bool,
}

impl PhysicsWorld {
    pub fn new(time_step: f32) -> Self {
        let ts = if time_step > 0.0 {
            time_step
        } else {
            DEFAULT_TIME_STEP
        };

        Self {
            bodies: Arena::new(),
            constraints: Vec::new(),
            integrator: Integrator::new(ts),
            gravity: Vec2::ZERO,
            sleeping_enabled: false,
            time_accumulated: 0.0,
            time_step: ts,
            steps: 0,
            parallel_enabled: false,
        }
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Number of fixed steps taken since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Gravity in engine units: 1.0 on y is Earth-like.
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Replaces the gravity vector. A change wakes every body so sleepers
    /// notice the new field.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        if gravity != self.gravity {
            debug!("gravity {:?} -> {:?}", self.gravity, gravity);
            self.gravity = gravity;
            sleeping::wake_all(&mut self.bodies);
        }
    }

    pub fn sleeping_enabled(&self) -> bool {
        self.sleeping_enabled
    }

    pub fn set_sleeping_enabled(&mut self, enabled: bool) {
        self.sleeping_enabled = enabled;
        if !enabled {
            sleeping::wake_all(&mut self.bodies);
        }
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(handle) {
            stored.handle = handle;
        }
        handle
    }

    /// Removes a body. Any pointer constraint holding it lets go.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let removed = self.bodies.remove(handle)?;
        for constraint in &mut self.constraints {
            if constraint.grabbed() == Some(handle) {
                constraint.release();
            }
        }
        Some(removed)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> + '_ {
        self.bodies.iter().map(|(_, body)| body)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn static_count(&self) -> usize {
        self.bodies().filter(|body| body.is_static).count()
    }

    pub fn dynamic_count(&self) -> usize {
        self.body_count() - self.static_count()
    }

    /// Dynamic body under `point`; the one whose centre is closest wins.
    pub fn body_at(&self, point: Vec2) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .filter(|(_, body)| !body.is_static && body.contains_point(point))
            .min_by(|(_, a), (_, b)| {
                let da = a.position.distance_squared(point);
                let db = b.position.distance_squared(point);
                da.total_cmp(&db)
            })
            .map(|(handle, _)| handle)
    }

    pub fn add_constraint(&mut self, constraint: PointerConstraint) -> ConstraintId {
        self.constraints.push(constraint);
        ConstraintId(self.constraints.len() - 1)
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&PointerConstraint> {
        self.constraints.get(id.0)
    }

    pub fn constraint_mut(&mut self, id: ConstraintId) -> Option<&mut PointerConstraint> {
        self.constraints.get_mut(id.0)
    }

    pub fn constraints(&self) -> &[PointerConstraint] {
        &self.constraints
    }

    /// Advances the simulation using a fixed timestep accumulator. Returns
    /// the number of fixed steps taken.
    pub fn step(&mut self, dt: f32) -> u32 {
        if !(dt.is_finite() && dt > 0.0) {
            return 0;
        }
        self.time_accumulated += dt;

        let mut taken = 0;
        while self.time_accumulated >= self.time_step {
            if taken == MAX_STEPS_PER_TICK {
                trace!("dropping {:.4}s of backlog", self.time_accumulated);
                self.time_accumulated = 0.0;
                break;
            }
            self.time_accumulated -= self.time_step;
            self.step_once();
            taken += 1;
        }
        taken
    }

    /// Runs exactly one fixed step regardless of the accumulator.
    pub fn step_once(&mut self) {
        self.steps += 1;
        let acceleration = self.gravity * GRAVITY_SCALE;

        {
            let _timer = ScopedTimer::new("constraints::pointer");
            self.apply_pointer_constraints();
        }
        {
            let _timer = ScopedTimer::new("integrator");
            self.integrate(acceleration);
        }
        {
            let _timer = ScopedTimer::new("containment");
            containment::resolve_static_contacts(&mut self.bodies);
        }
        {
            let _timer = ScopedTimer::new("sleeping::update");
            sleeping::update_sleeping(&mut self.bodies, self.sleeping_enabled);
        }
    }

    fn apply_pointer_constraints(&mut self) {
        let dt = self.time_step;
        for constraint in &mut self.constraints {
            let Some(grab) = constraint.grab() else {
                continue;
            };
            let Some(body) = self.bodies.get_mut(grab.body) else {
                constraint.release();
                continue;
            };
            let Some(correction) = constraint.correction(body.position) else {
                continue;
            };
            body.wake();
            body.velocity = body.velocity * (1.0 - constraint.stiffness) + correction / dt;
        }
    }

    fn integrate(&mut self, acceleration: Vec2) {
        if self.parallel_enabled && self.integrate_parallel(acceleration) {
            return;
        }

        let integrator = self.integrator;
        for body in self.bodies.values_mut() {
            integrator.integrate(body, acceleration);
        }
    }

    #[cfg(feature = "parallel")]
    fn integrate_parallel(&mut self, acceleration: Vec2) -> bool {
        use rayon::prelude::*;

        let integrator = self.integrator;
        self.bodies
            .par_values_mut()
            .for_each(|body| integrator.integrate(body, acceleration));
        true
    }

    #[cfg(not(feature = "parallel"))]
    fn integrate_parallel(&mut self, _acceleration: Vec2) -> bool {
        false
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rigidbody::BodyOptions;

    #[test]
    fn accumulator_steps_in_fixed_increments() {
        let mut world = PhysicsWorld::new(0.25);
        assert_eq!(world.step(0.625), 2);
        assert_eq!(world.step(0.125), 1);
        assert_eq!(world.steps(), 3);
        assert_eq!(world.step(0.0), 0);
        assert_eq!(world.step(f32::NAN), 0);
    }

    #[test]
    fn stalled_frame_is_capped() {
        let mut world = PhysicsWorld::new(0.01);
        assert_eq!(world.step(10.0), MAX_STEPS_PER_TICK);
        assert_eq!(world.step(0.001), 0);
    }

    #[test]
    fn removing_grabbed_body_releases_constraint() {
        let mut world = PhysicsWorld::default();
        let body = world.add_body(RigidBody::circle(Vec2::ZERO, 5.0, BodyOptions::default()));
        let id = world.add_constraint(PointerConstraint::new(0.2));
        world.constraint_mut(id).unwrap().attach(body, Vec2::ZERO);

        assert!(world.remove_body(body).is_some());
        assert!(world.constraint(id).unwrap().grabbed().is_none());
        assert!(world.remove_body(body).is_none());
    }

    #[test]
    fn body_at_ignores_static_bodies() {
        let mut world = PhysicsWorld::default();
        world.add_body(RigidBody::rectangle(
            Vec2::ZERO,
            100.0,
            100.0,
            BodyOptions::fixed(Default::default()),
        ));
        assert!(world.body_at(Vec2::ZERO).is_none());

        let near = world.add_body(RigidBody::circle(Vec2::new(5.0, 0.0), 20.0, BodyOptions::default()));
        world.add_body(RigidBody::circle(Vec2::new(15.0, 0.0), 20.0, BodyOptions::default()));
        assert_eq!(world.body_at(Vec2::ZERO), Some(near));
    }
}
