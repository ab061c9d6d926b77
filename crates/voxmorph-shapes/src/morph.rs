use voxmorph_grid::VoxelGrid;

use crate::density::DensityField;
use crate::error::{ShapeError, ShapeResult};

/// Blend weight of frame `t` out of `frames`: `t / (frames - 1)`, or 0 for a single frame.
pub fn blend_weight(t: usize, frames: usize) -> f32 {
    if frames <= 1 {
        0.0
    } else {
        t as f32 / (frames - 1) as f32
    }
}

/// Thresholded frames walking linearly from `from` to `to`.
///
/// `frames == 0` yields an empty sequence.
pub fn morph_frames(
    from: &DensityField,
    to: &DensityField,
    frames: usize,
) -> ShapeResult<Vec<VoxelGrid>> {
    if from.size() != to.size() {
        return Err(ShapeError::SizeMismatch {
            a: from.size(),
            b: to.size(),
        });
    }
    let mut out = Vec::with_capacity(frames);
    for t in 0..frames {
        let s = blend_weight(t, frames);
        let grid = from.lerp(to, s)?.to_grid()?;
        log::trace!("morph frame {t}/{frames} s={s:.3} solid={}", grid.solid_count());
        out.push(grid);
    }
    Ok(out)
}
