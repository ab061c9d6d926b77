//! Per-cell coordinate features used as network input.

/// Feature rows `[x, y, z, r]` for every cell of an `n`³ cube, in `(i, j, k)` order.
///
/// `x` follows `j` and `y` follows `i` (meshgrid "xy" indexing); `r` is the distance to the
/// cube centre `(n/2, n/2, n/2)`. The table is normalized to `[0, 1]` with one global min/max
/// over all four columns.
pub fn coordinate_field(n: usize) -> Vec<[f32; 4]> {
    let c = n as f32 / 2.0;
    let mut rows = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let (x, y, z) = (j as f32, i as f32, k as f32);
                let r = ((x - c).powi(2) + (y - c).powi(2) + (z - c).powi(2)).sqrt();
                rows.push([x, y, z, r]);
            }
        }
    }
    normalize_global(&mut rows);
    rows
}

fn normalize_global(rows: &mut [[f32; 4]]) {
    let (lo, hi) = rows
        .iter()
        .flatten()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 {
        rows.iter_mut().for_each(|r| *r = [0.0; 4]);
        return;
    }
    for row in rows.iter_mut() {
        for v in row.iter_mut() {
            *v = (*v - lo) / span;
        }
    }
}
