//! Small fixed-size vector helpers on `[f64; 3]`.

pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Point reached after travelling `distance` from `origin` along `direction`.
pub fn ray_point(origin: [f64; 3], direction: [f64; 3], distance: f64) -> [f64; 3] {
    add(origin, scale(direction, distance))
}

/// Unit vector along `a`, or `None` for a zero/non-finite vector.
pub fn normalize(a: [f64; 3]) -> Option<[f64; 3]> {
    let n = norm(a);
    if n > 0.0 && n.is_finite() {
        Some(scale(a, 1.0 / n))
    } else {
        None
    }
}

/// Direction cosines of the displacement `from -> to`.
pub fn direction_cosines(from: [f64; 3], to: [f64; 3]) -> Option<[f64; 3]> {
    normalize(sub(to, from))
}

/// Unit vector from polar cosine `mu` and azimuth `phi` about +z.
pub fn from_polar(mu: f64, phi: f64) -> [f64; 3] {
    let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
    [sin_theta * phi.cos(), sin_theta * phi.sin(), mu]
}
