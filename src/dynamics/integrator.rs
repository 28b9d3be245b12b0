use glam::Vec2;

use crate::core::rigidbody::RigidBody;

/// Semi-implicit Euler integrator with linear damping.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub dt: f32,
}

impl Integrator {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn integrate(&self, body: &mut RigidBody, acceleration: Vec2) {
        if body.is_static || body.is_sleeping {
            return;
        }

        body.velocity += acceleration * self.dt;
        body.velocity *= (1.0 - body.linear_damping * self.dt).max(0.0);

        // Travel per step stays under the smallest half extent, so a centre
        // can never cross the midline of a static wall between contact passes.
        let max_speed = body.shape.half_extents().min_element() / self.dt;
        body.velocity = body.velocity.clamp_length_max(max_speed);
        body.position += body.velocity * self.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rigidbody::BodyOptions;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_updates_before_position() {
        let integrator = Integrator::new(0.5);
        let mut body = RigidBody::circle(Vec2::ZERO, 1.0, BodyOptions::default());
        body.linear_damping = 0.0;

        integrator.integrate(&mut body, Vec2::new(0.0, 2.0));
        assert_relative_eq!(body.velocity.y, 1.0);
        assert_relative_eq!(body.position.y, 0.5);
    }

    #[test]
    fn speed_is_capped_by_smallest_half_extent() {
        let integrator = Integrator::new(0.1);
        let mut body = RigidBody::rectangle(Vec2::ZERO, 50.0, 20.0, BodyOptions::default());
        body.linear_damping = 0.0;
        body.velocity = Vec2::new(0.0, 5000.0);

        integrator.integrate(&mut body, Vec2::ZERO);
        assert_relative_eq!(body.velocity.y, 100.0);
        assert_relative_eq!(body.position.y, 10.0);
    }

    #[test]
    fn sleeping_and_static_bodies_stay_put() {
        let integrator = Integrator::new(1.0 / 60.0);
        let mut sleeper = RigidBody::circle(Vec2::ONE, 1.0, BodyOptions::default());
        sleeper.put_to_sleep();
        integrator.integrate(&mut sleeper, Vec2::new(0.0, 1000.0));
        assert_eq!(sleeper.position, Vec2::ONE);

        let mut wall = RigidBody::circle(Vec2::ONE, 1.0, BodyOptions::fixed(Default::default()));
        integrator.integrate(&mut wall, Vec2::new(0.0, 1000.0));
        assert_eq!(wall.position, Vec2::ONE);
    }
}
