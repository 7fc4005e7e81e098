// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Preloaded Nuclide Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::reader::macroscopic_xs;
use crate::table::ReactionTable;

/// Macroscopic cross-sections [cm⁻¹] at one energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroscopicXs {
    pub scatter: f64,
    pub absorb: f64,
    pub fission: f64,
    pub total: f64,
}

impl MacroscopicXs {
    pub fn new(scatter: f64, absorb: f64, fission: f64) -> Self {
        MacroscopicXs {
            scatter,
            absorb,
            fission,
            total: scatter + absorb + fission,
        }
    }

    /// Void: no interaction anywhere along the flight.
    pub fn void() -> Self {
        Self::default()
    }
}

/// Elastic, capture and fission tables for one element, resolved once.
/// An absent reaction contributes zero.
#[derive(Debug, Clone)]
pub struct NuclideXs {
    pub element: String,
    pub elastic: Option<ReactionTable>,
    pub capture: Option<ReactionTable>,
    pub fission: Option<ReactionTable>,
}

fn lookup(table: &Option<ReactionTable>, energy: f64) -> f64 {
    table.as_ref().map_or(0.0, |t| t.evaluate(energy))
}

impl NuclideXs {
    pub fn total_cross_sections(&self, energy: f64, number_density: f64) -> MacroscopicXs {
        MacroscopicXs::new(
            macroscopic_xs(lookup(&self.elastic, energy), number_density),
            macroscopic_xs(lookup(&self.capture, energy), number_density),
            macroscopic_xs(lookup(&self.fission, energy), number_density),
        )
    }
}
