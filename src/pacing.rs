// Pacing line through (5 frames, 75 ms) and (20 frames, 8 ms).
const P0: (f32, f32) = (5.0, 75.0);
const P1: (f32, f32) = (20.0, 8.0);

pub const MIN_INTERVAL_MS: f32 = 1.0;

fn line(n: f32) -> f32 {
    let slope = (P1.1 - P0.1) / (P1.0 - P0.0);
    P0.1 + slope * (n - P0.0)
}

/// Default interval between displayed frames for an animation of `frames` frames.
pub fn default_interval_ms(frames: usize) -> f32 {
    let n = frames as f32;
    (line(n) * n).max(MIN_INTERVAL_MS)
}

pub fn interval_ms(frames: usize, explicit: Option<f32>) -> f32 {
    match explicit {
        Some(ms) => ms.max(MIN_INTERVAL_MS),
        None => default_interval_ms(frames),
    }
}
