// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Regions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boolean composition of surfaces and nested regions.
//!
//! A region is a tagged tree: leaves are primitive [`Surface`]s, internal
//! nodes are regions. The primitive surfaces of the whole tree are
//! flattened once at construction so boundary searches never recurse.

use crate::aabb::Aabb;
use crate::surface::Surface;
use crate::GEOMETRY_TOLERANCE;
use neutron_types::error::{NeutronError, NeutronResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersection,
    /// First child minus every following child.
    Difference,
}

#[derive(Debug, Clone)]
pub enum RegionNode {
    Surface(Surface),
    Region(Region),
}

impl RegionNode {
    fn contains_with(&self, p: [f64; 3], tol: f64) -> bool {
        match self {
            RegionNode::Surface(s) => s.contains_with(p, tol),
            RegionNode::Region(r) => r.contains_with(p, tol),
        }
    }

    fn collect_primitives(&self, out: &mut Vec<Surface>) {
        match self {
            RegionNode::Surface(s) => out.push(*s),
            RegionNode::Region(r) => {
                for child in &r.children {
                    child.collect_primitives(out);
                }
            }
        }
    }
}

impl From<Surface> for RegionNode {
    fn from(s: Surface) -> Self {
        RegionNode::Surface(s)
    }
}

impl From<Region> for RegionNode {
    fn from(r: Region) -> Self {
        RegionNode::Region(r)
    }
}

/// Named, prioritized CSG region, optionally filled with a material.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    /// Higher priority wins when several regions contain a point.
    pub priority: i32,
    /// Material name; `None` is void.
    pub material: Option<String>,
    op: BooleanOp,
    children: Vec<RegionNode>,
    primitives: Vec<Surface>,
}

impl Region {
    pub fn new(name: &str, op: BooleanOp, children: Vec<RegionNode>) -> NeutronResult<Self> {
        if children.is_empty() {
            return Err(NeutronError::Geometry(format!(
                "region '{name}' needs at least one surface or sub-region"
            )));
        }
        let mut primitives = Vec::new();
        for child in &children {
            child.collect_primitives(&mut primitives);
        }
        Ok(Region {
            name: name.to_string(),
            priority: 0,
            material: None,
            op,
            children,
            primitives,
        })
    }

    pub fn union(name: &str, children: Vec<RegionNode>) -> NeutronResult<Self> {
        Self::new(name, BooleanOp::Union, children)
    }

    pub fn intersection(name: &str, children: Vec<RegionNode>) -> NeutronResult<Self> {
        Self::new(name, BooleanOp::Intersection, children)
    }

    pub fn difference(name: &str, children: Vec<RegionNode>) -> NeutronResult<Self> {
        Self::new(name, BooleanOp::Difference, children)
    }

    /// Box as the intersection of its six bounding half-spaces.
    pub fn cuboid(name: &str, bounds: &Aabb) -> NeutronResult<Self> {
        let mut faces = Vec::with_capacity(6);
        for k in 0..3 {
            let mut n = [0.0; 3];
            n[k] = -1.0;
            faces.push(RegionNode::Surface(Surface::plane(n, -bounds.min[k])?));
            n[k] = 1.0;
            faces.push(RegionNode::Surface(Surface::plane(n, bounds.max[k])?));
        }
        Self::intersection(name, faces)
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    pub fn op(&self) -> BooleanOp {
        self.op
    }

    pub fn children(&self) -> &[RegionNode] {
        &self.children
    }

    /// Every primitive surface in this region's tree, depth-first.
    pub fn primitives(&self) -> &[Surface] {
        &self.primitives
    }

    /// Point-in-region test; surfaces count as part of the region.
    pub fn contains(&self, p: [f64; 3]) -> bool {
        self.contains_with(p, GEOMETRY_TOLERANCE)
    }

    fn contains_with(&self, p: [f64; 3], tol: f64) -> bool {
        match self.op {
            BooleanOp::Union => self.children.iter().any(|c| c.contains_with(p, tol)),
            BooleanOp::Intersection => self.children.iter().all(|c| c.contains_with(p, tol)),
            BooleanOp::Difference => {
                // Subtracted parts are open so the cut surface stays in the region.
                let (first, rest) = match self.children.split_first() {
                    Some(split) => split,
                    None => return false,
                };
                first.contains_with(p, tol) && !rest.iter().any(|c| c.contains_with(p, -tol))
            }
        }
    }
}
