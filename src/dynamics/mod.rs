//! Simulation dynamics: integration, static containment and sleeping.

pub mod containment;
pub mod integrator;
pub mod sleeping;

pub use containment::{aabb_overlap, resolve_static_contacts, StaticContact};
pub use integrator::Integrator;
pub use sleeping::{update_sleeping, wake_all};
