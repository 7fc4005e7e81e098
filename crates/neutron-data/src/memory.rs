//! In-memory cross-section store for synthetic problems and tests.

use crate::store::{CrossSectionStore, ReactionRecord};
use neutron_types::error::{NeutronError, NeutronResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct ElementData {
    global_energy: Option<Vec<f64>>,
    reactions: HashMap<u32, ReactionRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    elements: HashMap<String, ElementData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element with no reactions yet.
    pub fn with_element(mut self, element: &str) -> Self {
        self.elements.entry(element.to_string()).or_default();
        self
    }

    pub fn with_global_energy(mut self, element: &str, energy: Vec<f64>) -> Self {
        self.elements
            .entry(element.to_string())
            .or_default()
            .global_energy = Some(energy);
        self
    }

    pub fn with_reaction(mut self, element: &str, mt: u32, record: ReactionRecord) -> Self {
        self.elements
            .entry(element.to_string())
            .or_default()
            .reactions
            .insert(mt, record);
        self
    }

    /// Flat cross-section over `[e_min, e_max]` on a two-point local grid.
    pub fn with_constant_xs(self, element: &str, mt: u32, barns: f64, e_min: f64, e_max: f64) -> Self {
        self.with_reaction(
            element,
            mt,
            ReactionRecord::local(vec![e_min, e_max], vec![barns, barns]),
        )
    }

    fn element(&self, element: &str) -> NeutronResult<&ElementData> {
        self.elements
            .get(element)
            .ok_or_else(|| NeutronError::ElementNotFound {
                element: element.to_string(),
                path: format!("memory://neutron/{element}"),
            })
    }
}

impl CrossSectionStore for MemoryStore {
    fn reaction(&self, element: &str, mt: u32) -> NeutronResult<Option<ReactionRecord>> {
        Ok(self.element(element)?.reactions.get(&mt).cloned())
    }

    fn global_energy(&self, element: &str) -> NeutronResult<Option<Vec<f64>>> {
        Ok(self.element(element)?.global_energy.clone())
    }
}
