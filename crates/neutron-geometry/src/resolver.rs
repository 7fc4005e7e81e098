// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Boundary Resolver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nearest-boundary search and point location over a set of regions.

use crate::region::Region;
use neutron_math::vec3::ray_point;

/// Nearest composite boundary along a ray.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryHit<'a> {
    pub point: [f64; 3],
    /// Top-level region whose boundary was hit.
    pub region: &'a Region,
    pub distance: f64,
}

/// Distance to a possibly-absent hit; `None` means open space.
pub fn hit_distance(hit: &Option<BoundaryHit<'_>>) -> f64 {
    hit.as_ref().map_or(f64::INFINITY, |h| h.distance)
}

/// Find the closest point along `position + t·direction`, `t >= 0`, that
/// lies on a primitive of some region and inside that same top-level region.
///
/// The containment check is made against the composite region, not the
/// primitive, so sub-surfaces hidden inside an intersection or difference
/// are skipped. `None` signals that the ray escapes to open space.
pub fn nearest_boundary<'a>(
    position: [f64; 3],
    direction: [f64; 3],
    regions: &'a [Region],
) -> Option<BoundaryHit<'a>> {
    let mut best: Option<BoundaryHit<'a>> = None;
    let mut best_distance = f64::INFINITY;

    for region in regions {
        for surface in region.primitives() {
            let distance = match surface.distance(position, direction) {
                Some(d) if d >= 0.0 && d.is_finite() => d,
                _ => continue,
            };
            if distance >= best_distance {
                continue;
            }
            let candidate = ray_point(position, direction, distance);
            if region.contains(candidate) {
                best_distance = distance;
                best = Some(BoundaryHit {
                    point: candidate,
                    region,
                    distance,
                });
            }
        }
    }

    best
}

/// Highest-priority region containing `point`; the first listed wins ties.
pub fn locate(regions: &[Region], point: [f64; 3]) -> Option<&Region> {
    let mut found: Option<&Region> = None;
    for region in regions {
        if !region.contains(point) {
            continue;
        }
        match found {
            Some(current) if current.priority >= region.priority => {}
            _ => found = Some(region),
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aabb::Aabb;
    use crate::region::RegionNode;
    use crate::surface::Surface;

    fn cube(name: &str, lo: [f64; 3], hi: [f64; 3]) -> Region {
        Region::cuboid(name, &Aabb::new(lo, hi).unwrap()).unwrap()
    }

    #[test]
    fn test_nested_region_resolves_to_wrapper() {
        let inner_box = cube("Box", [0.0; 3], [10.0; 3]);
        let wrapper = Region::union("Wrapper", vec![RegionNode::Region(inner_box)]).unwrap();
        let regions = vec![wrapper];

        let hit = nearest_boundary([-5.0, 5.0, 5.0], [1.0, 0.0, 0.0], &regions)
            .expect("ray must hit the box face");
        assert!((hit.distance - 5.0).abs() < 1e-12, "d = {}", hit.distance);
        assert!((hit.point[0] - 0.0).abs() < 1e-12);
        assert!((hit.point[1] - 5.0).abs() < 1e-12);
        assert!((hit.point[2] - 5.0).abs() < 1e-12);
        assert_eq!(hit.region.name, "Wrapper");
    }

    #[test]
    fn test_nested_matches_unwrapped() {
        let bare = vec![cube("Box", [0.0; 3], [10.0; 3])];
        let wrapped = vec![Region::union(
            "Wrapper",
            vec![cube("Box", [0.0; 3], [10.0; 3]).into()],
        )
        .unwrap()];
        let a = nearest_boundary([-5.0, 5.0, 5.0], [1.0, 0.0, 0.0], &bare).unwrap();
        let b = nearest_boundary([-5.0, 5.0, 5.0], [1.0, 0.0, 0.0], &wrapped).unwrap();
        assert_eq!(a.distance, b.distance);
        assert_eq!(a.point, b.point);
        assert_eq!(a.region.name, "Box");
    }

    #[test]
    fn test_plane_extension_rejected() {
        // The y = 10 plane is hit first at x = -5, but that point is off the box.
        let regions = vec![cube("Box", [0.0; 3], [10.0; 3])];
        let d = 1.0 / 2f64.sqrt();
        let hit = nearest_boundary([-10.0, 5.0, 5.0], [d, d, 0.0], &regions);
        assert!(hit.is_none(), "ray passes above the box");
    }

    #[test]
    fn test_hidden_face_of_intersection_skipped() {
        // Lens = sphere A ∩ sphere B. From inside, only the lens boundary counts.
        let a = Surface::sphere([0.0; 3], 10.0).unwrap();
        let b = Surface::sphere([12.0, 0.0, 0.0], 10.0).unwrap();
        let lens = Region::intersection("Lens", vec![a.into(), b.into()]).unwrap();
        let regions = vec![lens];
        let hit = nearest_boundary([6.0, 0.0, 0.0], [1.0, 0.0, 0.0], &regions).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-9, "exits through sphere A at x = 10");
        let hit = nearest_boundary([6.0, 0.0, 0.0], [-1.0, 0.0, 0.0], &regions).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-9, "exits through sphere B at x = 2");
    }

    #[test]
    fn test_escape_sentinel() {
        let regions = vec![Region::union(
            "Sphere",
            vec![Surface::sphere([0.0; 3], 1.0).unwrap().into()],
        )
        .unwrap()];
        let hit = nearest_boundary([5.0, 0.0, 0.0], [1.0, 0.0, 0.0], &regions);
        assert!(hit.is_none());
        assert_eq!(hit_distance(&hit), f64::INFINITY);
        assert!(nearest_boundary([0.0; 3], [1.0, 0.0, 0.0], &[]).is_none());
    }

    #[test]
    fn test_zero_distance_on_boundary() {
        let regions = vec![cube("Box", [0.0; 3], [10.0; 3])];
        let hit = nearest_boundary([0.0, 5.0, 5.0], [1.0, 0.0, 0.0], &regions).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_locate_priority() {
        let low = cube("World", [-20.0; 3], [20.0; 3]).with_priority(0);
        let high = cube("Core", [-1.0; 3], [1.0; 3]).with_priority(5);
        let regions = vec![low, high];
        assert_eq!(locate(&regions, [0.0; 3]).unwrap().name, "Core");
        assert_eq!(locate(&regions, [10.0, 0.0, 0.0]).unwrap().name, "World");
        assert!(locate(&regions, [30.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_locate_tie_keeps_first() {
        let a = cube("A", [0.0; 3], [2.0; 3]);
        let b = cube("B", [1.0; 3], [3.0; 3]);
        let regions = vec![a, b];
        assert_eq!(locate(&regions, [1.5; 3]).unwrap().name, "A");
    }
}
