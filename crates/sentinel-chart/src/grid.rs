// File: crates/sentinel-chart/src/grid.rs
// Summary: Tick layout helpers for the value axis and the category axis.

/// Round `x` to a 1/2/5 x 10^k step.
fn nice_step(x: f64) -> f64 {
    let exp = x.log10().floor();
    let base = 10f64.powf(exp);
    let f = x / base;
    let nf = if f < 1.5 { 1.0 } else if f < 3.0 { 2.0 } else if f < 7.0 { 5.0 } else { 10.0 };
    nf * base
}

/// Evenly stepped "nice" tick values inside `[min, max]`, at most roughly `max_count` of them.
pub fn nice_ticks(min: f64, max: f64, max_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_count < 2 {
        return Vec::new();
    }
    let step = nice_step((max - min) / (max_count as f64 - 1.0));
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    // Snap away float noise such as 7.000000000000001.
    let decimals = (-step.log10().floor()).max(0.0) as i32 + 1;
    let scale = 10f64.powi(decimals);
    (first..=last)
        .map(|k| ((k as f64 * step) * scale).round() / scale)
        .collect()
}

/// Category indices that get a tick label; skips evenly when there are too many.
pub fn category_ticks(count: usize, max_ticks: usize) -> Vec<usize> {
    if count == 0 || max_ticks == 0 { return Vec::new(); }
    let step = count.div_ceil(max_ticks).max(1);
    (0..count).step_by(step).collect()
}
