use std::time::Instant;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use voxmorph_grid::VoxelGrid;

use crate::emit::mesh_slab_into;
use crate::error::MeshResult;
use crate::mesh_build::{MeshBuild, index_base};
use crate::neighbors::NeighborSampler;

/// Worker configuration for the parallel paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Dedicated pool size; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl ParallelOptions {
    pub const fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }
}

/// Runs `f` on a dedicated pool when `opts.threads` is set.
pub(crate) fn install<R: Send>(opts: &ParallelOptions, f: impl FnOnce() -> R + Send) -> MeshResult<R> {
    match opts.threads {
        Some(n) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(n)
                .thread_name(|i| format!("voxmorph-mesh-{i}"))
                .build()?;
            Ok(pool.install(f))
        }
        None => Ok(f()),
    }
}

/// Start vertex of each slab: exclusive prefix sum of slab vertex counts.
pub(crate) fn slab_offsets(slabs: &[MeshBuild]) -> Vec<u32> {
    slabs
        .iter()
        .scan(0usize, |acc, s| {
            let start = index_base(*acc);
            *acc += s.vertex_count();
            Some(start)
        })
        .collect()
}

/// Concatenates per-slab meshes in slab order.
pub(crate) fn merge_slabs(slabs: Vec<MeshBuild>) -> MeshBuild {
    let offsets = slab_offsets(&slabs);
    let total: usize = slabs.iter().map(MeshBuild::face_count).sum();
    let mut out = MeshBuild::with_quad_capacity(total);
    for (slab, offset) in slabs.into_iter().zip(offsets) {
        out.append_offset(slab, offset);
    }
    out
}

/// Parallel form of [`crate::extract_mesh`]; output is identical for any thread count.
///
/// Slabs of constant `i` are meshed independently and merged in increasing `i`.
pub fn extract_mesh_par(grid: &mut VoxelGrid, opts: &ParallelOptions) -> MeshResult<MeshBuild> {
    let t0 = Instant::now();
    grid.seal_boundary();
    let grid: &VoxelGrid = grid;
    let (sx, sy, sz) = grid.dims();
    let Some(sampler) = NeighborSampler::new(grid) else {
        return Ok(MeshBuild::default());
    };
    let slabs: Vec<MeshBuild> = install(opts, || {
        (0..sx)
            .into_par_iter()
            .map(|i| {
                let mut mb = MeshBuild::default();
                mesh_slab_into(&mut mb, &sampler, i);
                mb
            })
            .collect()
    })?;
    let nslabs = slabs.len();
    let mesh = merge_slabs(slabs);
    log::info!(
        target: "perf",
        "ms={} mesher_extract_par dims=({}, {}, {}) slabs={} faces={} threads={:?}",
        t0.elapsed().as_millis(),
        sx,
        sy,
        sz,
        nslabs,
        mesh.face_count(),
        opts.threads
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FaceDir;

    #[test]
    fn offsets_are_exclusive_prefix_sums() {
        let mut a = MeshBuild::default();
        a.add_voxel_face(1, 1, 1, FaceDir::PosX);
        let b = MeshBuild::default();
        let mut c = MeshBuild::default();
        c.add_voxel_face(2, 1, 1, FaceDir::NegX);
        c.add_voxel_face(2, 1, 1, FaceDir::PosY);
        assert_eq!(slab_offsets(&[a.clone(), b.clone(), c.clone()]), vec![0, 4, 4]);

        let merged = merge_slabs(vec![a, b, c]);
        assert_eq!(merged.face_count(), 3);
        assert_eq!(merged.quads[1][0], 4 + FaceDir::NegX.winding()[0]);
        assert_eq!(merged.quads[2][0], 8 + FaceDir::PosY.winding()[0]);
    }
}
