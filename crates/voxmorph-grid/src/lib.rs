//! Dense binary occupancy grid and boundary sealing.
#![forbid(unsafe_code)]

mod error;

pub use error::{GridError, GridResult};

pub const EMPTY: u8 = 0;
pub const SOLID: u8 = 1;

/// Axis transform applied before meshing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Identity,
    /// Reverses the `i` and `j` axes, leaving `k` untouched.
    FlipIJ,
}

/// Dense `sx * sy * sz` occupancy array, `i`-major (`k` varies fastest).
///
/// Extents are fixed at construction and always agree with the cell buffer; read them with
/// [`VoxelGrid::dims`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    sx: usize,
    sy: usize,
    sz: usize,
    cells: Vec<u8>,
}

impl VoxelGrid {
    /// All-empty grid. Every extent must be at least 1.
    pub fn empty(sx: usize, sy: usize, sz: usize) -> GridResult<Self> {
        Self::filled(sx, sy, sz, false)
    }

    pub fn filled(sx: usize, sy: usize, sz: usize, solid: bool) -> GridResult<Self> {
        let n = check_extents(sx, sy, sz)?;
        let v = if solid { SOLID } else { EMPTY };
        Ok(Self {
            sx,
            sy,
            sz,
            cells: vec![v; n],
        })
    }

    /// Wraps an existing `i`-major buffer. Any non-zero value is stored as solid.
    pub fn from_cells(sx: usize, sy: usize, sz: usize, mut cells: Vec<u8>) -> GridResult<Self> {
        let n = check_extents(sx, sy, sz)?;
        if cells.len() != n {
            return Err(GridError::InvalidGridShape {
                sx,
                sy,
                sz,
                reason: "cell count does not match extents",
            });
        }
        for c in &mut cells {
            *c = (*c != EMPTY) as u8;
        }
        Ok(Self { sx, sy, sz, cells })
    }

    /// Builds a grid by evaluating `solid(i, j, k)` in linear index order.
    pub fn from_fn(
        sx: usize,
        sy: usize,
        sz: usize,
        mut solid: impl FnMut(usize, usize, usize) -> bool,
    ) -> GridResult<Self> {
        let n = check_extents(sx, sy, sz)?;
        let mut cells = Vec::with_capacity(n);
        for i in 0..sx {
            for j in 0..sy {
                for k in 0..sz {
                    cells.push(solid(i, j, k) as u8);
                }
            }
        }
        Ok(Self { sx, sy, sz, cells })
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    pub fn idx(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.sy + j) * self.sz + k
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> u8 {
        self.cells[self.idx(i, j, k)]
    }

    #[inline]
    pub fn is_solid(&self, i: usize, j: usize, k: usize) -> bool {
        self.get(i, j, k) == SOLID
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, solid: bool) {
        let ix = self.idx(i, j, k);
        self.cells[ix] = solid as u8;
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of solid cells (the voxel volume).
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == SOLID).count()
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// True if `(i, j, k)` lies on one of the six bounding faces.
    #[inline]
    pub fn is_boundary(&self, i: usize, j: usize, k: usize) -> bool {
        i == 0 || j == 0 || k == 0 || i == self.sx - 1 || j == self.sy - 1 || k == self.sz - 1
    }

    /// True when every extent leaves at least one non-boundary cell.
    #[inline]
    pub fn has_interior(&self) -> bool {
        self.sx >= 3 && self.sy >= 3 && self.sz >= 3
    }

    /// Clears the outer shell of the grid in place.
    pub fn seal_boundary(&mut self) {
        let (sx, sy, sz) = self.dims();
        for i in [0, sx - 1] {
            for j in 0..sy {
                for k in 0..sz {
                    self.set(i, j, k, false);
                }
            }
        }
        for i in 0..sx {
            for j in [0, sy - 1] {
                for k in 0..sz {
                    self.set(i, j, k, false);
                }
            }
            for j in 0..sy {
                for k in [0, sz - 1] {
                    self.set(i, j, k, false);
                }
            }
        }
        log::trace!("sealed boundary dims=({}, {}, {})", sx, sy, sz);
    }

    /// Checks the sealing invariant without modifying the grid.
    pub fn is_sealed(&self) -> bool {
        for i in 0..self.sx {
            for j in 0..self.sy {
                for k in 0..self.sz {
                    if self.is_boundary(i, j, k) && self.is_solid(i, j, k) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Returns the common extent if the grid is a cube.
    pub fn require_cubic(&self) -> GridResult<usize> {
        if self.sx == self.sy && self.sy == self.sz {
            Ok(self.sx)
        } else {
            Err(GridError::InvalidGridShape {
                sx: self.sx,
                sy: self.sy,
                sz: self.sz,
                reason: "grid is not cubic",
            })
        }
    }

    /// Returns a copy of the grid with `orientation` applied.
    pub fn reoriented(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Identity => self.clone(),
            Orientation::FlipIJ => {
                let (sx, sy, sz) = self.dims();
                let mut cells = Vec::with_capacity(self.cells.len());
                for i in 0..sx {
                    for j in 0..sy {
                        for k in 0..sz {
                            cells.push(self.get(sx - 1 - i, sy - 1 - j, k));
                        }
                    }
                }
                Self { sx, sy, sz, cells }
            }
        }
    }
}

/// Validates extents and returns the cell count.
fn check_extents(sx: usize, sy: usize, sz: usize) -> GridResult<usize> {
    let invalid = |reason| GridError::InvalidGridShape { sx, sy, sz, reason };
    if sx == 0 || sy == 0 || sz == 0 {
        return Err(invalid("extents must be positive"));
    }
    sx.checked_mul(sy)
        .and_then(|v| v.checked_mul(sz))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| invalid("cell count overflows"))
}
