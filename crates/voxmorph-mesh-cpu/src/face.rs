use voxmorph_geom::Vec3;

use crate::constants::FACES_PER_VOXEL;

/// Face of a voxel, in spatial terms.
///
/// Discriminants follow the neighbor sampling order, so a face index doubles as a
/// slot into [`crate::Neighbors`] and a bit in [`crate::FaceMask`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FaceDir {
    PosZ = 0,
    NegY = 1,
    NegZ = 2,
    PosY = 3,
    PosX = 4,
    NegX = 5,
}

// Unit-cube corners (x, y, z) per face, before scaling.
const CORNERS: [[[f32; 3]; 4]; FACES_PER_VOXEL] = [
    [[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]],
    [[1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]],
];

const WINDING_A: [u32; 4] = [0, 1, 3, 2];
const WINDING_B: [u32; 4] = [1, 0, 2, 3];

const WINDINGS: [[u32; 4]; FACES_PER_VOXEL] = [
    WINDING_A, WINDING_A, WINDING_B, WINDING_B, WINDING_B, WINDING_A,
];

impl FaceDir {
    pub const ALL: [FaceDir; FACES_PER_VOXEL] = [
        FaceDir::PosZ,
        FaceDir::NegY,
        FaceDir::NegZ,
        FaceDir::PosY,
        FaceDir::PosX,
        FaceDir::NegX,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `FaceDir`.
    #[inline]
    pub fn from_index(i: usize) -> Option<FaceDir> {
        Self::ALL.get(i).copied()
    }

    /// Grid step `(di, dj, dk)` to the neighbor tested for exposure.
    #[inline]
    pub fn grid_delta(self) -> (isize, isize, isize) {
        match self {
            FaceDir::PosZ => (0, 1, 0),
            FaceDir::NegY => (-1, 0, 0),
            FaceDir::NegZ => (0, -1, 0),
            FaceDir::PosY => (1, 0, 0),
            FaceDir::PosX => (0, 0, 1),
            FaceDir::NegX => (0, 0, -1),
        }
    }

    /// Outward unit normal in mesh space.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            FaceDir::PosZ => Vec3::new(0.0, 0.0, 1.0),
            FaceDir::NegY => Vec3::new(0.0, -1.0, 0.0),
            FaceDir::NegZ => Vec3::new(0.0, 0.0, -1.0),
            FaceDir::PosY => Vec3::new(0.0, 1.0, 0.0),
            FaceDir::PosX => Vec3::new(1.0, 0.0, 0.0),
            FaceDir::NegX => Vec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// The four corners of this face on a unit cube at the origin.
    #[inline]
    pub fn unit_corners(self) -> [Vec3; 4] {
        CORNERS[self.index()].map(Vec3::from)
    }

    /// Quad winding, relative to the face's first vertex.
    #[inline]
    pub fn winding(self) -> [u32; 4] {
        WINDINGS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for f in FaceDir::ALL {
            assert_eq!(FaceDir::from_index(f.index()), Some(f));
        }
        assert_eq!(FaceDir::from_index(6), None);
    }

    #[test]
    fn wound_triangle_faces_along_normal() {
        for f in FaceDir::ALL {
            let c = f.unit_corners();
            let w = f.winding();
            let (a, b, d) = (c[w[0] as usize], c[w[1] as usize], c[w[2] as usize]);
            let n = (b - a).cross(d - a);
            assert!(n.dot(f.normal()) > 0.0, "{f:?}");
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for f in FaceDir::ALL {
            let n = f.normal();
            let expected = if n.dot(Vec3::splat(1.0)) > 0.0 { 1.0 } else { 0.0 };
            for c in f.unit_corners() {
                assert_eq!(c.dot(n).abs(), expected, "{f:?}");
            }
        }
    }
}
