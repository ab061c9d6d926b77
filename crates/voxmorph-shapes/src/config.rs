use serde::Deserialize;
use std::fs;
use std::path::Path;

use voxmorph_grid::VoxelGrid;

use crate::cppn::Cppn;
use crate::density::DensityField;
use crate::error::{ShapeError, ShapeResult, invalid};
use crate::{noise, primitives};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ShapeConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub kind: ShapeKind,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: 0,
            kind: ShapeKind::default(),
        }
    }
}

fn default_size() -> usize {
    32
}

/// Largest accepted cube size; 512³ cells is already half a gigabyte of densities.
pub const MAX_SIZE: usize = 512;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Noise(Noise),
    Cppn(CppnParams),
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Sphere(Sphere::default())
    }
}

/// Radius as a fraction of the cube size.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Sphere {
    #[serde(default = "default_radius")]
    pub radius: f32,
}
fn default_radius() -> f32 {
    0.4
}
impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

/// Half extent as a fraction of the cube size.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Cuboid {
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
}
fn default_half_extent() -> f32 {
    0.3
}
impl Default for Cuboid {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Noise {
    #[serde(default = "default_noise_freq")]
    pub frequency: f32,
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    #[serde(default = "default_persistence")]
    pub persistence: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    #[serde(default)]
    pub threshold: f32,
}
fn default_noise_freq() -> f32 {
    0.08
}
fn default_octaves() -> u32 {
    3
}
fn default_persistence() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}
impl Default for Noise {
    fn default() -> Self {
        Self {
            frequency: default_noise_freq(),
            octaves: default_octaves(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
            threshold: 0.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CppnParams {
    #[serde(default = "default_hidden")]
    pub hidden: usize,
    #[serde(default = "default_weight_range")]
    pub weight_range: f32,
}
fn default_hidden() -> usize {
    30
}
fn default_weight_range() -> f32 {
    2.0
}
impl Default for CppnParams {
    fn default() -> Self {
        Self {
            hidden: default_hidden(),
            weight_range: default_weight_range(),
        }
    }
}

impl ShapeConfig {
    pub fn from_toml_str(s: &str) -> ShapeResult<Self> {
        let cfg: ShapeConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ShapeResult<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ShapeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Applies command line overrides on top of file values.
    pub fn with_overrides(mut self, size: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self
    }

    pub fn validate(&self) -> ShapeResult<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(invalid(
                "size",
                format!("must be between 1 and {MAX_SIZE}, got {}", self.size),
            ));
        }
        match &self.kind {
            ShapeKind::Sphere(s) => positive("radius", s.radius),
            ShapeKind::Cuboid(c) => positive("half_extent", c.half_extent),
            ShapeKind::Noise(n) => {
                positive("frequency", n.frequency)?;
                positive("lacunarity", n.lacunarity)?;
                if n.octaves == 0 {
                    return Err(invalid("octaves", "must be at least 1"));
                }
                if !n.persistence.is_finite() || !n.threshold.is_finite() {
                    return Err(invalid("noise", "persistence and threshold must be finite"));
                }
                Ok(())
            }
            ShapeKind::Cppn(c) => {
                if c.hidden == 0 {
                    return Err(invalid("hidden", "must be at least 1"));
                }
                positive("weight_range", c.weight_range)
            }
        }
    }

    pub fn density(&self) -> ShapeResult<DensityField> {
        self.validate()?;
        log::debug!(
            "shape density size={} seed={} kind={:?}",
            self.size,
            self.seed,
            self.kind
        );
        match &self.kind {
            ShapeKind::Sphere(s) => primitives::sphere(self.size, s.radius),
            ShapeKind::Cuboid(c) => primitives::cuboid(self.size, c.half_extent),
            ShapeKind::Noise(n) => noise::fractal_density(self.size, self.seed, n),
            ShapeKind::Cppn(c) => {
                Cppn::random(self.seed, c.hidden, c.weight_range)?.density(self.size)
            }
        }
    }

    pub fn build_grid(&self) -> ShapeResult<VoxelGrid> {
        Ok(self.density()?.to_grid()?)
    }
}

fn positive(name: &'static str, v: f32) -> ShapeResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be a positive number, got {v}")))
    }
}
