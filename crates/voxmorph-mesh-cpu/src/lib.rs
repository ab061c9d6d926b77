//! CPU surface extraction for binary voxel grids: one quad per exposed voxel face.
#![forbid(unsafe_code)]

mod build;
pub mod constants;
mod cull;
mod emit;
mod error;
mod face;
mod mesh_build;
mod neighbors;
mod parallel;
mod sequence;

pub use build::{ExtractStage, Extractor, extract_mesh, extract_mesh_owned};
pub use cull::FaceMask;
pub use error::{MeshError, MeshResult};
pub use face::FaceDir;
pub use mesh_build::{MeshBuild, cell_origin};
pub use neighbors::{NeighborSampler, Neighbors};
pub use parallel::{ParallelOptions, extract_mesh_par};
pub use sequence::{extract_sequence, extract_sequence_par};
