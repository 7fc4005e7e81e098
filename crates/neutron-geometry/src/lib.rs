// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Neutron Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Constructive solid geometry for neutron tracking.
//!
//! Primitive [`surface::Surface`]s are composed into named, prioritized
//! [`region::Region`] trees. [`resolver::nearest_boundary`] finds the next
//! composite boundary along a ray; [`resolver::locate`] finds the region
//! that owns a point.

pub mod aabb;
pub mod region;
pub mod resolver;
pub mod surface;

/// Absolute containment tolerance [cm]. Points this close to a surface
/// count as lying on it.
pub const GEOMETRY_TOLERANCE: f64 = 1e-9;
