use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Material coefficients that affect interactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub density: f32,
    /// Fraction of normal velocity kept after a contact, in [0, 1].
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 0.001,
            restitution: 0.0,
        }
    }
}

impl Material {
    pub fn new(density: f32, restitution: f32) -> Self {
        Self {
            density,
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Restitution used when two materials meet: the bouncier one wins.
    pub fn combined_restitution(&self, other: &Material) -> f32 {
        self.restitution.max(other.restitution)
    }
}

/// HSL colour as consumed by canvas-style renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const BLACK: Hsl = Hsl {
        hue: 0,
        saturation: 0,
        lightness: 0,
    };

    /// Mid-saturation, mid-lightness fill used for spawned bodies.
    pub fn pastel(hue: u16) -> Self {
        Self {
            hue: hue % 360,
            saturation: 50,
            lightness: 50,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// How the renderer should draw a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub fill: Hsl,
    pub visible: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: Hsl::BLACK,
            visible: true,
        }
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formats_like_css() {
        assert_eq!(Hsl::pastel(217).to_string(), "hsl(217, 50%, 50%)");
        assert_eq!(Hsl::BLACK.to_string(), "hsl(0, 0%, 0%)");
        assert_eq!(Hsl::pastel(360).hue, 0);
    }

    #[test]
    fn restitution_is_clamped_and_mixed_by_max() {
        let bouncy = Material::new(1.0, 1.4);
        assert_eq!(bouncy.restitution, 1.0);

        let dull = Material::new(1.0, 0.2);
        assert_eq!(dull.combined_restitution(&Material::default()), 0.2);
    }
}
