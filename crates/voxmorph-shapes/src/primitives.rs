use crate::density::DensityField;
use crate::error::ShapeResult;

// Density crosses 0.5 exactly on the surface and ramps over one cell.
fn surface_density(inside_by: f32) -> f32 {
    (0.5 + inside_by).clamp(0.0, 1.0)
}

fn centred(n: usize, i: usize, j: usize, k: usize) -> (f32, f32, f32) {
    let c = (n as f32 - 1.0) * 0.5;
    (i as f32 - c, j as f32 - c, k as f32 - c)
}

/// Ball of radius `radius * n` centred in the cube.
pub fn sphere(n: usize, radius: f32) -> ShapeResult<DensityField> {
    let r = radius * n as f32;
    DensityField::from_fn(n, |i, j, k| {
        let (x, y, z) = centred(n, i, j, k);
        surface_density(r - (x * x + y * y + z * z).sqrt())
    })
}

/// Axis-aligned box of half extent `half_extent * n` centred in the cube.
pub fn cuboid(n: usize, half_extent: f32) -> ShapeResult<DensityField> {
    let h = half_extent * n as f32;
    DensityField::from_fn(n, |i, j, k| {
        let (x, y, z) = centred(n, i, j, k);
        surface_density(h - x.abs().max(y.abs()).max(z.abs()))
    })
}
