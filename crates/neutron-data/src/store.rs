//! Storage contract for per-element reaction data.

use neutron_types::error::NeutronResult;

/// Raw reaction arrays as stored on disk.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactionRecord {
    /// Cross-section values [barn].
    pub xs: Vec<f64>,
    /// Reaction-local energy grid [eV]; `None` selects the global grid.
    pub energy: Option<Vec<f64>>,
    /// Offset of `xs[0]` into the global grid (ignored with a local grid).
    pub threshold_idx: usize,
}

impl ReactionRecord {
    pub fn local(energy: Vec<f64>, xs: Vec<f64>) -> Self {
        ReactionRecord {
            xs,
            energy: Some(energy),
            threshold_idx: 0,
        }
    }

    pub fn global(threshold_idx: usize, xs: Vec<f64>) -> Self {
        ReactionRecord {
            xs,
            energy: None,
            threshold_idx,
        }
    }
}

/// Read-only source of cross-section data, shared across worker threads.
///
/// Errors:
/// - `ElementNotFound` when the element has no data at all.
/// - `ReadError` for data that exists but cannot be decoded.
pub trait CrossSectionStore: Send + Sync {
    /// `Ok(None)` when the element exists but has no such reaction.
    fn reaction(&self, element: &str, mt: u32) -> NeutronResult<Option<ReactionRecord>>;

    /// Shared energy grid for the element, if one is stored.
    fn global_energy(&self, element: &str) -> NeutronResult<Option<Vec<f64>>>;
}

/// Group path of a reaction, `<ELEMENT>/reactions/reaction_<MT:03>/294K`.
pub fn reaction_group_path(element: &str, mt: u32) -> String {
    format!("{element}/reactions/reaction_{mt:03}/294K")
}

/// Path of the element's global grid, `<ELEMENT>/energy/294K`.
pub fn global_energy_path(element: &str) -> String {
    format!("{element}/energy/294K")
}
