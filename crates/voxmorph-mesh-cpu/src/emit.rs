use crate::cull::FaceMask;
use crate::mesh_build::MeshBuild;
use crate::neighbors::NeighborSampler;

/// Emits every exposed face of cell `(i, j, k)` in face-index order.
#[inline]
pub(crate) fn emit_exposed_faces(mb: &mut MeshBuild, i: usize, j: usize, k: usize, mask: FaceMask) {
    for face in mask.iter() {
        mb.add_voxel_face(i, j, k, face);
    }
}

/// Appends the faces of every solid cell in slab `i` (`j`, then `k` increasing).
pub(crate) fn mesh_slab_into(mb: &mut MeshBuild, sampler: &NeighborSampler<'_>, i: usize) {
    let grid = sampler.grid();
    let (_, sy, sz) = grid.dims();
    for j in 0..sy {
        for k in 0..sz {
            if !grid.is_solid(i, j, k) {
                continue;
            }
            let mask = sampler.sample(i, j, k).exposed();
            emit_exposed_faces(mb, i, j, k, mask);
        }
    }
}
