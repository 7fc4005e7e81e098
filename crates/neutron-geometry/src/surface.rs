// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Surfaces
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed set of primitive surfaces.
//!
//! Each primitive splits space into an inside (`f(p) <= 0`) and an outside,
//! and can report the nearest forward intersection of a ray with itself.

use neutron_math::vec3::{dot, normalize, sub};
use neutron_types::error::{NeutronError, NeutronResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Surface {
    /// Solid ball `|p - center| <= radius`.
    Sphere { center: [f64; 3], radius: f64 },
    /// Half-space `normal · p <= offset` with unit `normal`.
    Plane { normal: [f64; 3], offset: f64 },
    /// Infinite cylinder parallel to z: `(x-x0)² + (y-y0)² <= radius²`.
    ZCylinder { x0: f64, y0: f64, radius: f64 },
}

impl Surface {
    pub fn sphere(center: [f64; 3], radius: f64) -> NeutronResult<Self> {
        if !radius.is_finite() || radius <= 0.0 || center.iter().any(|c| !c.is_finite()) {
            return Err(NeutronError::Geometry(format!(
                "sphere requires finite center and radius > 0, got radius={radius}"
            )));
        }
        Ok(Surface::Sphere { center, radius })
    }

    /// Half-space `normal · p <= offset`; `normal` need not be unit length.
    pub fn plane(normal: [f64; 3], offset: f64) -> NeutronResult<Self> {
        let len = neutron_math::vec3::norm(normal);
        let unit = normalize(normal).ok_or_else(|| {
            NeutronError::Geometry(format!("plane normal must be non-zero, got {normal:?}"))
        })?;
        if !offset.is_finite() {
            return Err(NeutronError::Geometry(
                "plane offset must be finite".to_string(),
            ));
        }
        Ok(Surface::Plane {
            normal: unit,
            offset: offset / len,
        })
    }

    pub fn z_cylinder(x0: f64, y0: f64, radius: f64) -> NeutronResult<Self> {
        if !radius.is_finite() || radius <= 0.0 || !x0.is_finite() || !y0.is_finite() {
            return Err(NeutronError::Geometry(format!(
                "z-cylinder requires finite axis and radius > 0, got radius={radius}"
            )));
        }
        Ok(Surface::ZCylinder { x0, y0, radius })
    }

    /// Signed distance-like function: negative inside, zero on the surface.
    pub fn evaluate(&self, p: [f64; 3]) -> f64 {
        match *self {
            Surface::Sphere { center, radius } => {
                let d = sub(p, center);
                dot(d, d).sqrt() - radius
            }
            Surface::Plane { normal, offset } => dot(normal, p) - offset,
            Surface::ZCylinder { x0, y0, radius } => {
                let dx = p[0] - x0;
                let dy = p[1] - y0;
                (dx * dx + dy * dy).sqrt() - radius
            }
        }
    }

    /// Inside test with tolerance `tol` (positive widens, negative shrinks).
    pub fn contains_with(&self, p: [f64; 3], tol: f64) -> bool {
        self.evaluate(p) <= tol
    }

    pub fn contains(&self, p: [f64; 3]) -> bool {
        self.contains_with(p, crate::GEOMETRY_TOLERANCE)
    }

    /// Nearest intersection distance along the unit `direction`, if any lies
    /// at `t >= 0`. A ray starting exactly on the surface may return 0.
    pub fn distance(&self, position: [f64; 3], direction: [f64; 3]) -> Option<f64> {
        match *self {
            Surface::Sphere { center, radius } => {
                let oc = sub(position, center);
                let b = dot(oc, direction);
                let c = dot(oc, oc) - radius * radius;
                nearest_quadratic_root(1.0, b, c)
            }
            Surface::Plane { normal, offset } => {
                let denom = dot(normal, direction);
                if denom == 0.0 {
                    return None;
                }
                let t = (offset - dot(normal, position)) / denom;
                (t >= 0.0).then_some(t)
            }
            Surface::ZCylinder { x0, y0, radius } => {
                let (u, v) = (direction[0], direction[1]);
                let a = u * u + v * v;
                if a == 0.0 {
                    return None;
                }
                let dx = position[0] - x0;
                let dy = position[1] - y0;
                let b = dx * u + dy * v;
                let c = dx * dx + dy * dy - radius * radius;
                nearest_quadratic_root(a, b, c)
            }
        }
    }
}

/// Smallest non-negative root of `a t² + 2 b t + c = 0` (a > 0).
fn nearest_quadratic_root(a: f64, b: f64, c: f64) -> Option<f64> {
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let s = disc.sqrt();
    let t_near = (-b - s) / a;
    let t_far = (-b + s) / a;
    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        Some(t_far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_from_center() {
        let s = Surface::sphere([0.0; 3], 10.0).unwrap();
        let d = s.distance([0.0; 3], [0.0, 0.0, 1.0]).unwrap();
        assert!((d - 10.0).abs() < 1e-12, "d = {d}");
    }

    #[test]
    fn test_sphere_from_outside() {
        let s = Surface::sphere([0.0; 3], 2.0).unwrap();
        let d = s.distance([-5.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
        assert!((d - 3.0).abs() < 1e-12);
        assert!(s.distance([-5.0, 0.0, 0.0], [-1.0, 0.0, 0.0]).is_none());
        assert!(s.distance([-5.0, 3.0, 0.0], [1.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_sphere_on_surface_outward_is_zero() {
        let s = Surface::sphere([0.0; 3], 1.0).unwrap();
        let d = s.distance([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_plane_normalized() {
        let p = Surface::plane([2.0, 0.0, 0.0], 10.0).unwrap();
        match p {
            Surface::Plane { normal, offset } => {
                assert_eq!(normal, [1.0, 0.0, 0.0]);
                assert!((offset - 5.0).abs() < 1e-15);
            }
            _ => panic!("expected plane"),
        }
        assert!(p.contains([4.0, 100.0, -3.0]));
        assert!(!p.contains([6.0, 0.0, 0.0]));
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let p = Surface::plane([1.0, 0.0, 0.0], 0.0).unwrap();
        assert!(p.distance([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]).is_none());
        let d = p.distance([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]).unwrap();
        assert!((d - 1.0).abs() < 1e-15);
        assert!(p.distance([-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_z_cylinder() {
        let c = Surface::z_cylinder(0.0, 0.0, 3.0).unwrap();
        let d = c.distance([0.0, 0.0, 7.0], [0.6, 0.0, 0.8]).unwrap();
        assert!((d - 5.0).abs() < 1e-12, "d = {d}");
        assert!(c.distance([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]).is_none());
        assert!(c.contains([1.0, 1.0, 1e6]));
    }

    #[test]
    fn test_invalid_surfaces_rejected() {
        assert!(Surface::sphere([0.0; 3], 0.0).is_err());
        assert!(Surface::plane([0.0; 3], 1.0).is_err());
        assert!(Surface::z_cylinder(0.0, f64::NAN, 1.0).is_err());
    }
}
