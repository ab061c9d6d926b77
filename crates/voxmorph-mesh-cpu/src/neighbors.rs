use voxmorph_grid::VoxelGrid;

use crate::cull::FaceMask;
use crate::face::FaceDir;

/// Occupancy of the six neighbors of a cell, indexed by [`FaceDir::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors(pub [u8; 6]);

impl Neighbors {
    #[inline]
    pub fn get(&self, face: FaceDir) -> u8 {
        self.0[face.index()]
    }

    /// Faces whose neighbor is empty.
    #[inline]
    pub fn exposed(&self) -> FaceMask {
        FaceMask::from_neighbors(self)
    }
}

/// Maps `0` to `1` and `extent - 1` to `extent - 2`; other indices pass through.
///
/// Only called with `extent >= 3`, which `NeighborSampler::new` guarantees.
#[inline]
pub(crate) fn clamp_axis(v: usize, extent: usize) -> usize {
    debug_assert!(extent >= 3, "clamp on axis without interior: extent={extent}");
    if v == 0 {
        1
    } else if v + 1 == extent {
        extent - 2
    } else {
        v
    }
}

/// Reads neighbor occupancy with the clamp-to-interior rule.
///
/// Only grids whose every extent is at least 3 can be sampled; smaller grids have no
/// interior and `new` returns `None`.
#[derive(Clone, Copy, Debug)]
pub struct NeighborSampler<'a> {
    grid: &'a VoxelGrid,
}

impl<'a> NeighborSampler<'a> {
    #[inline]
    pub fn new(grid: &'a VoxelGrid) -> Option<Self> {
        grid.has_interior().then_some(Self { grid })
    }

    #[inline]
    pub fn grid(&self) -> &'a VoxelGrid {
        self.grid
    }

    /// Cell whose neighbors are actually read when sampling `(i, j, k)`.
    #[inline]
    pub fn clamped_center(&self, i: usize, j: usize, k: usize) -> (usize, usize, usize) {
        let (sx, sy, sz) = self.grid.dims();
        (
            clamp_axis(i, sx),
            clamp_axis(j, sy),
            clamp_axis(k, sz),
        )
    }

    /// Samples in [`FaceDir`] order: `j+1, i-1, j-1, i+1, k+1, k-1`.
    #[inline]
    pub fn sample(&self, i: usize, j: usize, k: usize) -> Neighbors {
        let (i, j, k) = self.clamped_center(i, j, k);
        let g = self.grid;
        Neighbors([
            g.get(i, j + 1, k),
            g.get(i - 1, j, k),
            g.get(i, j - 1, k),
            g.get(i + 1, j, k),
            g.get(i, j, k + 1),
            g.get(i, j, k - 1),
        ])
    }
}
