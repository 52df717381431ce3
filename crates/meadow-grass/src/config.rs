use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_VERTEX_CEILING, VERTICES_PER_BLADE};
use crate::error::ConfigError;

/// Per-run generation parameters. Distances are in meters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GrassConfig {
    // Radius of the disc to cover with blocks
    #[serde(default = "default_radius")]
    pub radius: f32,
    // Square block side, aka grid cell size
    #[serde(default = "default_block_side")]
    pub block_side: f32,
    #[serde(default = "default_blades_per_block")]
    pub blades_per_block: u32,
    #[serde(default = "default_blade_height")]
    pub blade_height: f32,
    #[serde(default = "default_blade_height_variation")]
    pub blade_height_variation: f32,
    #[serde(default = "default_blade_width")]
    pub blade_width: f32,
    // false => full square grid
    #[serde(default)]
    pub use_circular_mask: bool,
    // None => unseeded ambient randomness
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_vertex_ceiling")]
    pub vertex_ceiling: usize,
}

fn default_radius() -> f32 {
    100.0
}
fn default_block_side() -> f32 {
    5.0
}
fn default_blades_per_block() -> u32 {
    500
}
fn default_blade_height() -> f32 {
    0.8
}
fn default_blade_height_variation() -> f32 {
    0.4
}
fn default_blade_width() -> f32 {
    0.08
}
fn default_vertex_ceiling() -> usize {
    DEFAULT_VERTEX_CEILING
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            block_side: default_block_side(),
            blades_per_block: default_blades_per_block(),
            blade_height: default_blade_height(),
            blade_height_variation: default_blade_height_variation(),
            blade_width: default_blade_width(),
            use_circular_mask: false,
            seed: None,
            vertex_ceiling: default_vertex_ceiling(),
        }
    }
}

impl GrassConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Checks ranges the generator relies on. A zero radius is allowed; the
    /// planner clamps it to a single block.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("radius", self.radius),
            ("block_side", self.block_side),
            ("blade_height", self.blade_height),
            ("blade_height_variation", self.blade_height_variation),
            ("blade_width", self.blade_width),
        ];
        for (field, v) in finite {
            if !v.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if self.radius < 0.0 {
            return Err(ConfigError::Invalid {
                field: "radius",
                reason: "must not be negative",
            });
        }
        let positive = [
            ("block_side", self.block_side),
            ("blade_height", self.blade_height),
            ("blade_width", self.blade_width),
        ];
        for (field, v) in positive {
            if v <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        if self.blade_height_variation < 0.0 {
            return Err(ConfigError::Invalid {
                field: "blade_height_variation",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    #[inline]
    pub fn verts_per_block(&self) -> usize {
        self.blades_per_block as usize * VERTICES_PER_BLADE
    }

    #[inline]
    pub fn exceeds_vertex_ceiling(&self) -> bool {
        self.verts_per_block() > self.vertex_ceiling
    }

    #[inline]
    pub fn half_side(&self) -> f32 {
        self.block_side * 0.5
    }
}
