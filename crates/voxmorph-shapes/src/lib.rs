#![forbid(unsafe_code)]
//! Synthetic occupancy sources for the mesher: analytic primitives, fractal noise, random
//! CPPN shapes, and linear morphs between any two of them.

pub mod config;
pub mod coords;
pub mod cppn;
pub mod density;
pub mod error;
pub mod morph;
pub mod noise;
pub mod primitives;

pub use config::{CppnParams, Cuboid, MAX_SIZE, Noise, ShapeConfig, ShapeKind, Sphere};
pub use coords::coordinate_field;
pub use cppn::Cppn;
pub use density::{DensityField, OCCUPANCY_THRESHOLD};
pub use error::{ShapeError, ShapeResult};
pub use morph::{blend_weight, morph_frames};
