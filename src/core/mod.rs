//! Core types describing bodies, shapes, materials and constraints.

pub mod constraints;
pub mod rigidbody;
pub mod shapes;
pub mod types;

pub use constraints::{ConstraintId, Grab, PointerConstraint};
pub use rigidbody::{BodyOptions, RigidBody};
pub use shapes::{BodyShape, ShapeKind};
pub use types::{Aabb, Hsl, Material, RenderStyle};
