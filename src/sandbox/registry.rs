use glam::Vec2;
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::presets::EnvironmentPreset;
use crate::core::rigidbody::{BodyOptions, RigidBody};
use crate::core::shapes::ShapeKind;
use crate::core::types::{Hsl, Material, RenderStyle};
use crate::utils::allocator::BodyHandle;
use crate::world::PhysicsWorld;

/// Record of a spawned dynamic body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    pub id: u64,
    pub shape: ShapeKind,
    pub restitution: f32,
    pub density: f32,
    pub charge: f32,
    pub color_hue: u16,
}

#[derive(Debug, Clone)]
struct Entry {
    body: Body,
    handle: BodyHandle,
}

/// Owns the spawned population, in spawn order.
///
/// Every entry has exactly one body in the world and the registry is the
/// only code that adds or removes dynamic bodies there.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    entries: Vec<Entry>,
    next_id: u64,
    spawn_origin: Vec2,
    rng: ChaCha8Rng,
}

impl BodyRegistry {
    pub fn new(spawn_origin: Vec2, seed: u64) -> Self {
        Self::with_rng(spawn_origin, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(spawn_origin: Vec2, rng: ChaCha8Rng) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            spawn_origin,
            rng,
        }
    }

    /// Spawns one body at the spawn origin using the preset's material.
    pub fn spawn(
        &mut self,
        world: &mut PhysicsWorld,
        shape: ShapeKind,
        preset: &EnvironmentPreset,
    ) -> &Body {
        let body = Body {
            id: self.next_id,
            shape,
            restitution: preset.restitution,
            density: preset.density,
            charge: 0.0,
            color_hue: self.rng.gen_range(0..360),
        };
        self.next_id += 1;

        let options = BodyOptions {
            is_static: false,
            material: Material::new(body.density, body.restitution),
            charge: body.charge,
            render: RenderStyle {
                fill: Hsl::pastel(body.color_hue),
                visible: true,
            },
        };
        let handle = world.add_body(RigidBody::new(shape.geometry(), self.spawn_origin, options));
        debug!("spawned {} #{} as {:?}", shape, body.id, handle);

        self.entries.push(Entry { body, handle });
        &self.entries[self.entries.len() - 1].body
    }

    pub fn spawn_batch(
        &mut self,
        world: &mut PhysicsWorld,
        count: usize,
        shape: ShapeKind,
        preset: &EnvironmentPreset,
    ) {
        for _ in 0..count {
            self.spawn(world, shape, preset);
        }
    }

    /// Removes the most recent spawn from the registry and the world.
    pub fn despawn_last(&mut self, world: &mut PhysicsWorld) -> Option<Body> {
        let entry = self.entries.pop()?;
        Self::remove_from_world(world, &entry);
        debug!("despawned {} #{}", entry.body.shape, entry.body.id);
        Some(entry.body)
    }

    /// Removes every spawned body. Returns how many were removed.
    pub fn clear(&mut self, world: &mut PhysicsWorld) -> usize {
        let removed = self.entries.len();
        for entry in self.entries.drain(..).rev() {
            Self::remove_from_world(world, &entry);
        }
        if removed > 0 {
            debug!("cleared {removed} bodies");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.entries.iter().map(|entry| &entry.body)
    }

    pub fn last(&self) -> Option<&Body> {
        self.entries.last().map(|entry| &entry.body)
    }

    pub fn handle_of(&self, id: u64) -> Option<BodyHandle> {
        self.entries
            .iter()
            .find(|entry| entry.body.id == id)
            .map(|entry| entry.handle)
    }

    pub fn spawn_origin(&self) -> Vec2 {
        self.spawn_origin
    }

    fn remove_from_world(world: &mut PhysicsWorld, entry: &Entry) {
        if world.remove_body(entry.handle).is_none() {
            warn!(
                "body #{} ({:?}) was already missing from the world",
                entry.body.id, entry.handle
            );
        }
    }
}
