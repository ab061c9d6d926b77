use voxmorph_grid::{GridResult, VoxelGrid};

use crate::error::{ShapeError, ShapeResult, invalid};

/// Cells with density strictly above this value become solid.
pub const OCCUPANCY_THRESHOLD: f32 = 0.5;

/// Number of cells in an `n`³ cube, rejecting zero and overflowing sizes.
pub(crate) fn cell_count(n: usize) -> ShapeResult<usize> {
    if n == 0 {
        return Err(invalid("size", "must be at least 1"));
    }
    n.checked_mul(n)
        .and_then(|v| v.checked_mul(n))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or_else(|| invalid("size", format!("cell count of a {n}^3 cube overflows")))
}

/// Cubic scalar field in `[0, 1]`, laid out like `VoxelGrid` (i-major).
#[derive(Clone, Debug, PartialEq)]
pub struct DensityField {
    n: usize,
    values: Vec<f32>,
}

impl DensityField {
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize, usize) -> f32) -> ShapeResult<Self> {
        let len = cell_count(n)?;
        let mut values = Vec::with_capacity(len);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    values.push(f(i, j, k).clamp(0.0, 1.0));
                }
            }
        }
        Ok(Self { n, values })
    }

    pub fn from_values(n: usize, values: Vec<f32>) -> ShapeResult<Self> {
        let len = cell_count(n)?;
        if values.len() != len {
            return Err(invalid(
                "values",
                format!("expected {len} samples, got {}", values.len()),
            ));
        }
        Ok(Self {
            n,
            values: values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f32 {
        self.values[(i * self.n + j) * self.n + k]
    }

    /// Linear blend `self * (1 - s) + other * s`.
    pub fn lerp(&self, other: &DensityField, s: f32) -> ShapeResult<DensityField> {
        if self.n != other.n {
            return Err(ShapeError::SizeMismatch {
                a: self.n,
                b: other.n,
            });
        }
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| (a * (1.0 - s) + b * s).clamp(0.0, 1.0))
            .collect();
        Ok(Self { n: self.n, values })
    }

    /// Thresholds the field into an occupancy grid.
    pub fn to_grid(&self) -> GridResult<VoxelGrid> {
        VoxelGrid::from_fn(self.n, self.n, self.n, |i, j, k| {
            self.get(i, j, k) > OCCUPANCY_THRESHOLD
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.values
            .iter()
            .filter(|&&d| d > OCCUPANCY_THRESHOLD)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let f = DensityField::from_values(1, vec![0.5]).unwrap();
        assert!(!f.to_grid().unwrap().is_solid(0, 0, 0));
        let f = DensityField::from_values(1, vec![0.500_1]).unwrap();
        assert!(f.to_grid().unwrap().is_solid(0, 0, 0));
    }

    #[test]
    fn overflowing_sizes_are_rejected() {
        let huge = 1usize << 22;
        let err = DensityField::from_fn(huge, |_, _, _| 1.0).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParam { name: "size", .. }));
        let err = DensityField::from_values(huge, vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParam { name: "size", .. }));
        assert!(DensityField::from_values(0, Vec::new()).is_err());
    }

    #[test]
    fn to_grid_follows_index_layout() {
        let f = DensityField::from_fn(3, |i, j, k| if (i, j, k) == (2, 0, 1) { 1.0 } else { 0.0 })
            .unwrap();
        let g = f.to_grid().unwrap();
        assert!(g.is_solid(2, 0, 1));
        assert_eq!(g.solid_count(), 1);
    }
}
