use std::f32::consts::TAU;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SHAPE_SIZE;

/// The primitive kinds a user can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Resolves a host-supplied name. Anything unrecognised becomes a triangle.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "square" => ShapeKind::Square,
            _ => ShapeKind::Triangle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Geometry used when this kind is spawned.
    pub fn geometry(&self) -> BodyShape {
        match self {
            ShapeKind::Circle => BodyShape::Circle {
                radius: SHAPE_SIZE,
            },
            ShapeKind::Square => BodyShape::Rectangle {
                half_extents: Vec2::splat(SHAPE_SIZE * 0.5),
            },
            ShapeKind::Triangle => BodyShape::Polygon {
                sides: 3,
                radius: SHAPE_SIZE,
            },
        }
    }
}

impl From<&str> for ShapeKind {
    fn from(name: &str) -> Self {
        ShapeKind::from_name(name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collision and hit-test geometry, in body-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyShape {
    Circle { radius: f32 },
    Rectangle { half_extents: Vec2 },
    /// Regular polygon inscribed in a circle of `radius`.
    Polygon { sides: u32, radius: f32 },
}

impl BodyShape {
    pub fn area(&self) -> f32 {
        match *self {
            BodyShape::Circle { radius } => std::f32::consts::PI * radius * radius,
            BodyShape::Rectangle { half_extents } => 4.0 * half_extents.x * half_extents.y,
            BodyShape::Polygon { sides, radius } => {
                let n = sides.max(3) as f32;
                0.5 * n * radius * radius * (TAU / n).sin()
            }
        }
    }

    /// Vertices of a polygon, first vertex at half a sector past +x.
    pub fn vertices(&self) -> Vec<Vec2> {
        match *self {
            BodyShape::Polygon { sides, radius } => {
                let n = sides.max(3);
                let theta = TAU / n as f32;
                let offset = theta * 0.5;
                (0..n)
                    .map(|i| {
                        let angle = offset + i as f32 * theta;
                        Vec2::new(angle.cos(), angle.sin()) * radius
                    })
                    .collect()
            }
            BodyShape::Rectangle { half_extents } => vec![
                Vec2::new(-half_extents.x, -half_extents.y),
                Vec2::new(half_extents.x, -half_extents.y),
                Vec2::new(half_extents.x, half_extents.y),
                Vec2::new(-half_extents.x, half_extents.y),
            ],
            BodyShape::Circle { .. } => Vec::new(),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        match *self {
            BodyShape::Circle { radius } => Vec2::splat(radius),
            BodyShape::Rectangle { half_extents } => half_extents,
            BodyShape::Polygon { .. } => self
                .vertices()
                .iter()
                .fold(Vec2::ZERO, |acc, v| acc.max(v.abs())),
        }
    }

    pub fn contains(&self, local: Vec2) -> bool {
        match *self {
            BodyShape::Circle { radius } => local.length_squared() <= radius * radius,
            BodyShape::Rectangle { half_extents } => {
                local.x.abs() <= half_extents.x && local.y.abs() <= half_extents.y
            }
            BodyShape::Polygon { .. } => {
                let vertices = self.vertices();
                // Counter-clockwise winding: inside means left of every edge.
                vertices.iter().enumerate().all(|(i, a)| {
                    let b = vertices[(i + 1) % vertices.len()];
                    (b - *a).perp_dot(local - *a) >= 0.0
                })
            }
        }
    }
}
