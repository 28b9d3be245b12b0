//! Keeps dynamic bodies out of static ones.
//!
//! Only dynamic-versus-static pairs are resolved, using axis-aligned bounds
//! and the minimum-overlap axis. Dynamic bodies pass through each other.

use glam::Vec2;

use crate::core::rigidbody::RigidBody;
use crate::core::types::{Aabb, Material};
use crate::utils::allocator::Arena;

/// Penetration of a dynamic body into a static one. `normal` points out of
/// the static body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticContact {
    pub normal: Vec2,
    pub depth: f32,
}

pub fn aabb_overlap(dynamic: &Aabb, fixed: &Aabb) -> Option<StaticContact> {
    let delta = dynamic.center - fixed.center;
    let overlap = (dynamic.half_extents + fixed.half_extents) - delta.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let sign = |v: f32| if v < 0.0 { -1.0 } else { 1.0 };
    if overlap.x < overlap.y {
        Some(StaticContact {
            normal: Vec2::new(sign(delta.x), 0.0),
            depth: overlap.x,
        })
    } else {
        Some(StaticContact {
            normal: Vec2::new(0.0, sign(delta.y)),
            depth: overlap.y,
        })
    }
}

/// Pushes every awake dynamic body out of the static bodies it overlaps and
/// reflects its inbound normal velocity. Returns the number of contacts.
pub fn resolve_static_contacts(bodies: &mut Arena<RigidBody>) -> usize {
    let fixed: Vec<(Aabb, Material)> = bodies
        .iter()
        .filter(|(_, body)| body.is_static)
        .map(|(_, body)| (body.bounds(), body.material))
        .collect();
    if fixed.is_empty() {
        return 0;
    }

    let mut contacts = 0;
    for body in bodies.values_mut() {
        if body.is_static || body.is_sleeping {
            continue;
        }
        for (bounds, material) in &fixed {
            let Some(contact) = aabb_overlap(&body.bounds(), bounds) else {
                continue;
            };
            contacts += 1;
            body.position += contact.normal * contact.depth;

            let inbound = body.velocity.dot(contact.normal);
            if inbound < 0.0 {
                let restitution = body.material.combined_restitution(material);
                body.velocity -= contact.normal * inbound * (1.0 + restitution);
            }
        }
    }
    contacts
}
