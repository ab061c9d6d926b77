use voxmorph_geom::{Aabb, Vec3};

use crate::constants::{VERTS_PER_FACE, VOXEL_SCALE};
use crate::face::FaceDir;

/// Indexed quad mesh: four fresh vertices per emitted face, one quad per face.
///
/// Indices are `u32`, so a single mesh holds at most `u32::MAX` vertices.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<Vec3>,
    pub quads: Vec<[u32; 4]>,
}

/// Converts a vertex count into the `u32` index of the next vertex.
#[inline]
pub(crate) fn index_base(len: usize) -> u32 {
    debug_assert!(
        len <= u32::MAX as usize,
        "mesh exceeds u32 index range: {len} vertices"
    );
    len as u32
}

/// Mesh-space origin of grid cell `(i, j, k)`: `(2k, 2i, 2j)`.
#[inline]
pub fn cell_origin(i: usize, j: usize, k: usize) -> Vec3 {
    Vec3::new(k as f32, i as f32, j as f32) * VOXEL_SCALE
}

impl MeshBuild {
    pub fn with_quad_capacity(n_quads: usize) -> Self {
        let mut mb = Self::default();
        mb.reserve_quads(n_quads);
        mb
    }

    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * VERTS_PER_FACE);
        self.quads.reserve(n_quads);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Appends the four corners of `face` on cell `(i, j, k)` and the quad indexing them.
    pub fn add_voxel_face(&mut self, i: usize, j: usize, k: usize, face: FaceDir) {
        let base = index_base(self.pos.len());
        debug_assert_eq!(base as usize, VERTS_PER_FACE * self.quads.len());
        let origin = cell_origin(i, j, k);
        for c in face.unit_corners() {
            self.pos.push(origin + c * VOXEL_SCALE);
        }
        let w = face.winding();
        self.quads
            .push([base + w[0], base + w[1], base + w[2], base + w[3]]);
    }

    /// Moves `other` onto the end of this mesh, shifting its indices by `offset`.
    pub fn append_offset(&mut self, other: MeshBuild, offset: u32) {
        self.pos.extend(other.pos);
        self.quads.extend(
            other
                .quads
                .into_iter()
                .map(|q| q.map(|ix| ix + offset)),
        );
    }

    /// Splits every quad `[a, b, c, d]` into triangles `(a, b, c)` and `(c, d, a)`.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.quads.len() * 6);
        for &[a, b, c, d] in &self.quads {
            out.extend_from_slice(&[a, b, c, c, d, a]);
        }
        out
    }

    /// Interleaved `x, y, z` positions.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.pos.iter().flat_map(|p| p.to_array()).collect()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.pos.iter().copied())
    }
}
