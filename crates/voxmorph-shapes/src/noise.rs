use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::Noise;
use crate::density::DensityField;
use crate::error::ShapeResult;

fn noise_seed(seed: u64) -> i32 {
    ((seed ^ (seed >> 32)) as u32) as i32
}

// Normalized fractal sum in [-1, 1].
fn fractal3(n: &FastNoiseLite, x: f32, y: f32, z: f32, p: &Noise) -> f32 {
    let mut amp = 1.0_f32;
    let mut freq = 1.0_f32;
    let mut sum = 0.0_f32;
    let mut max_amp = 0.0_f32;
    for _ in 0..p.octaves.max(1) {
        sum += n.get_noise_3d(x * freq, y * freq, z * freq) * amp;
        max_amp += amp;
        amp *= p.persistence;
        freq *= p.lacunarity;
    }
    if max_amp > 0.0 { sum / max_amp } else { sum }
}

/// Fractal OpenSimplex2 field; cells whose noise exceeds `threshold` end up solid.
pub fn fractal_density(size: usize, seed: u64, p: &Noise) -> ShapeResult<DensityField> {
    let mut noise = FastNoiseLite::with_seed(noise_seed(seed));
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(p.frequency));
    DensityField::from_fn(size, |i, j, k| {
        let v = fractal3(&noise, k as f32, i as f32, j as f32, p);
        0.5 + 0.5 * (v - p.threshold)
    })
}
