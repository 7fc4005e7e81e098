//! Piecewise-linear interpolation on ascending 1-D grids.
//!
//! Matches `numpy.interp`: values outside the grid clamp to the end points.
//! Callers that need zero outside a reaction's domain test the range first.

/// Linear interpolation of `ys(xs)` at `x`.
///
/// `xs` must be non-decreasing and the same length as `ys`; an empty grid
/// yields 0. At a grid point the stored value is returned exactly. A NaN
/// abscissa yields NaN.
pub fn interp1d(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[i] > x; guaranteed 1 <= i <= n-1 here.
    let i = xs[..n].partition_point(|&e| e <= x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// True if `xs` is non-decreasing and finite.
pub fn is_ascending(xs: &[f64]) -> bool {
    xs.iter().all(|v| v.is_finite()) && xs.windows(2).all(|w| w[0] <= w[1])
}
