use rayon::prelude::*;
use voxmorph_grid::VoxelGrid;

use crate::build::extract_mesh;
use crate::error::{MeshError, MeshResult};
use crate::mesh_build::MeshBuild;
use crate::parallel::{ParallelOptions, install};

/// Extracts one independent mesh per grid, in input order. Every grid is sealed in place.
pub fn extract_sequence(grids: &mut [VoxelGrid]) -> MeshResult<Vec<MeshBuild>> {
    if grids.is_empty() {
        return Err(MeshError::EmptyInput);
    }
    log::debug!("extracting sequence frames={}", grids.len());
    Ok(grids.iter_mut().map(extract_mesh).collect())
}

/// Frame-parallel form of [`extract_sequence`]; output order matches input order.
pub fn extract_sequence_par(
    grids: &mut [VoxelGrid],
    opts: &ParallelOptions,
) -> MeshResult<Vec<MeshBuild>> {
    if grids.is_empty() {
        return Err(MeshError::EmptyInput);
    }
    log::debug!(
        "extracting sequence frames={} threads={:?}",
        grids.len(),
        opts.threads
    );
    install(opts, || grids.par_iter_mut().map(extract_mesh).collect())
}
