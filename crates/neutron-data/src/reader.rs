// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Cross-Section Provider
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated microscopic lookups and their macroscopic conversion.

use crate::nuclide::{MacroscopicXs, NuclideXs};
use crate::store::CrossSectionStore;
use crate::table::ReactionTable;
use neutron_types::constants::{BARN_TO_CM2, MT_CAPTURE, MT_ELASTIC, MT_FISSION};
use neutron_types::error::{NeutronError, NeutronResult};

/// Σ = σ·1e-24·N [cm⁻¹]. Negative microscopic input gives 0.
pub fn macroscopic_xs(microscopic: f64, number_density: f64) -> f64 {
    if microscopic < 0.0 {
        return 0.0;
    }
    microscopic * BARN_TO_CM2 * number_density
}

pub fn validate_request(element: &str, mt: u32) -> NeutronResult<()> {
    if element.is_empty() || !element.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(NeutronError::InvalidElement(element.to_string()));
    }
    if !(1..=999).contains(&mt) {
        return Err(NeutronError::InvalidReaction(mt));
    }
    Ok(())
}

pub struct CrossSectionReader<S: CrossSectionStore> {
    store: S,
}

impl<S: CrossSectionStore> CrossSectionReader<S> {
    pub fn new(store: S) -> Self {
        CrossSectionReader { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve one reaction into a table; `Ok(None)` if the element has no
    /// such reaction.
    pub fn reaction_table(&self, element: &str, mt: u32) -> NeutronResult<Option<ReactionTable>> {
        validate_request(element, mt)?;
        let Some(record) = self.store.reaction(element, mt)? else {
            return Ok(None);
        };
        let global = if record.energy.is_none() {
            self.store.global_energy(element)?
        } else {
            None
        };
        ReactionTable::from_record(element, mt, record, global.as_deref()).map(Some)
    }

    /// Microscopic cross-section [barn]; 0 for an absent reaction.
    pub fn microscopic_xs(&self, element: &str, mt: u32, energy: f64) -> NeutronResult<f64> {
        Ok(self
            .reaction_table(element, mt)?
            .map_or(0.0, |t| t.evaluate(energy)))
    }

    pub fn get_macroscopic_xs(
        &self,
        element: &str,
        mt: u32,
        energy: f64,
        number_density: f64,
    ) -> NeutronResult<f64> {
        let micro = self.microscopic_xs(element, mt, energy)?;
        Ok(macroscopic_xs(micro, number_density))
    }

    /// Scatter (MT 2), absorption (MT 102) and fission (MT 18) at one
    /// energy. A fission lookup failure counts as zero.
    pub fn total_cross_sections(
        &self,
        element: &str,
        energy: f64,
        number_density: f64,
    ) -> NeutronResult<MacroscopicXs> {
        let scatter = self.get_macroscopic_xs(element, MT_ELASTIC, energy, number_density)?;
        let absorb = self.get_macroscopic_xs(element, MT_CAPTURE, energy, number_density)?;
        let fission = self
            .get_macroscopic_xs(element, MT_FISSION, energy, number_density)
            .unwrap_or_else(|e| {
                log::warn!("{element}: fission lookup failed, using 0: {e}");
                0.0
            });
        Ok(MacroscopicXs::new(scatter, absorb, fission))
    }

    /// Preload the three transport reactions for an element.
    pub fn load_nuclide(&self, element: &str) -> NeutronResult<NuclideXs> {
        let elastic = self.reaction_table(element, MT_ELASTIC)?;
        let capture = self.reaction_table(element, MT_CAPTURE)?;
        let fission = self.reaction_table(element, MT_FISSION).unwrap_or_else(|e| {
            log::warn!("{element}: fission table unreadable, treating as absent: {e}");
            None
        });
        log::debug!(
            "loaded {element}: elastic={} capture={} fission={}",
            elastic.is_some(),
            capture.is_some(),
            fission.is_some()
        );
        Ok(NuclideXs {
            element: element.to_string(),
            elastic,
            capture,
            fission,
        })
    }
}
