// File: crates/sentinel-chart/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY runs.

/// Largest-Triangle-Three-Buckets downsampling.
/// Returns at most `threshold` points; first and last are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }

    let inner = threshold - 2;
    let bucket = (n - 2) as f64 / inner.max(1) as f64;
    let bound = |i: usize| ((1.0 + i as f64 * bucket).floor() as usize).min(n - 1);

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut anchor = 0usize;

    for i in 0..inner {
        let (start, end) = (bound(i), bound(i + 1).max(bound(i) + 1));

        // Centroid of the following bucket (or the last point for the final bucket).
        let next = &points[end.min(n - 1)..bound(i + 2).max(end + 1).min(n)];
        let (cx, cy) = if next.is_empty() {
            points[n - 1]
        } else {
            let (sx, sy) = next.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
            (sx / next.len() as f64, sy / next.len() as f64)
        };

        let (ax, ay) = points[anchor];
        let mut best = start;
        let mut best_area = -1.0f64;
        for (k, &(px, py)) in points.iter().enumerate().take(end.min(n - 1)).skip(start) {
            let area = ((ax - cx) * (py - ay) - (ax - px) * (cy - ay)).abs();
            if area > best_area {
                best_area = area;
                best = k;
            }
        }
        out.push(points[best]);
        anchor = best;
    }

    out.push(points[n - 1]);
    out
}
