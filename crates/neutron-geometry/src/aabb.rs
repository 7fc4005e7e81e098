//! Axis-aligned boxes: cuboid construction and flight-length bounds.

use neutron_types::error::{NeutronError, NeutronResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> NeutronResult<Self> {
        for k in 0..3 {
            if !min[k].is_finite() || !max[k].is_finite() || min[k] >= max[k] {
                return Err(NeutronError::Geometry(format!(
                    "box bounds must be finite with min < max on every axis, got {min:?} / {max:?}"
                )));
            }
        }
        Ok(Aabb { min, max })
    }

    /// Closed-interval containment on all three axes.
    pub fn contains(&self, p: [f64; 3]) -> bool {
        (0..3).all(|k| self.min[k] <= p[k] && p[k] <= self.max[k])
    }

    /// Space diagonal: the longest straight flight inside the box.
    pub fn diagonal(&self) -> f64 {
        (0..3)
            .map(|k| (self.max[k] - self.min[k]).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub fn count_contained<'a, I>(&self, points: I) -> usize
    where
        I: IntoIterator<Item = &'a [f64; 3]>,
    {
        points.into_iter().filter(|p| self.contains(**p)).count()
    }
}
