//! Utility helpers: the generational body arena and frame logging.

pub mod allocator;
pub mod logging;

pub use allocator::{Arena, BodyHandle};
