use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::allocator::BodyHandle;

/// Index of a constraint registered with the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintId(pub(crate) usize);

/// The point on a body that the pointer is holding, relative to the body centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub body: BodyHandle,
    pub offset: Vec2,
}

/// Soft spring between the pointer position and a grabbed body.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerConstraint {
    pub stiffness: f32,
    pub visible: bool,
    pointer: Vec2,
    grab: Option<Grab>,
}

impl PointerConstraint {
    /// Invisible constraint with the given stiffness; callers validate the range.
    pub fn new(stiffness: f32) -> Self {
        Self {
            stiffness,
            visible: false,
            pointer: Vec2::ZERO,
            grab: None,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    pub fn attach(&mut self, body: BodyHandle, offset: Vec2) {
        self.grab = Some(Grab { body, offset });
    }

    pub fn release(&mut self) -> Option<BodyHandle> {
        self.grab.take().map(|grab| grab.body)
    }

    pub fn grab(&self) -> Option<Grab> {
        self.grab
    }

    pub fn grabbed(&self) -> Option<BodyHandle> {
        self.grab.map(|grab| grab.body)
    }

    /// Fraction of the remaining gap to close this step, for a body at `position`.
    pub fn correction(&self, position: Vec2) -> Option<Vec2> {
        let grab = self.grab?;
        let anchor = position + grab.offset;
        Some((self.pointer - anchor) * self.stiffness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_scales_gap_by_stiffness() {
        let mut constraint = PointerConstraint::new(0.2);
        assert!(constraint.correction(Vec2::ZERO).is_none());

        constraint.attach(BodyHandle::new(3, 0), Vec2::new(10.0, 0.0));
        constraint.set_pointer(Vec2::new(110.0, 50.0));
        let correction = constraint.correction(Vec2::ZERO).unwrap();
        assert!((correction - Vec2::new(20.0, 10.0)).length() < 1e-5);

        assert_eq!(constraint.release(), Some(BodyHandle::new(3, 0)));
        assert!(constraint.grabbed().is_none());
    }
}
