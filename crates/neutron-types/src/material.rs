// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Material
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-nuclide material bound to a geometric region.

use crate::constants::{AMU_KG, AVOGADRO};
use crate::error::{NeutronError, NeutronResult};
use serde::{Deserialize, Serialize};

/// Discrete inelastic level available to the scattering branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InelasticLevel {
    /// Energy lost to the level [eV].
    pub q_value_ev: f64,
    /// Probability that a scattering event excites this level (0-1).
    pub branching: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Nuclide key in the cross-section library, e.g. "Pb208".
    pub element: String,
    /// Mass density [g/cm³].
    pub density: f64,
    /// Atomic mass [amu].
    pub atomic_mass: f64,
    /// Target-to-neutron mass ratio A.
    pub atomic_weight_ratio: f64,
    /// Overrides the density-derived number density when set [atoms/cm³].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_density_override: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inelastic: Option<InelasticLevel>,
}

impl Material {
    pub fn new(
        name: &str,
        element: &str,
        density: f64,
        atomic_mass: f64,
        atomic_weight_ratio: f64,
    ) -> NeutronResult<Self> {
        let material = Material {
            name: name.to_string(),
            element: element.to_string(),
            density,
            atomic_mass,
            atomic_weight_ratio,
            number_density_override: None,
            inelastic: None,
        };
        material.validate()?;
        Ok(material)
    }

    pub fn with_number_density(mut self, number_density: f64) -> NeutronResult<Self> {
        if !number_density.is_finite() || number_density < 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "{}: number density must be finite and >= 0, got {number_density}",
                self.name
            )));
        }
        self.number_density_override = Some(number_density);
        Ok(self)
    }

    pub fn with_inelastic_level(mut self, level: InelasticLevel) -> NeutronResult<Self> {
        if !level.q_value_ev.is_finite() || level.q_value_ev < 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "{}: inelastic Q-value must be finite and >= 0",
                self.name
            )));
        }
        if !(0.0..=1.0).contains(&level.branching) {
            return Err(NeutronError::ConfigError(format!(
                "{}: inelastic branching must lie in [0, 1], got {}",
                self.name, level.branching
            )));
        }
        self.inelastic = Some(level);
        Ok(self)
    }

    pub fn validate(&self) -> NeutronResult<()> {
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "{}: density must be finite and >= 0",
                self.name
            )));
        }
        if !self.atomic_mass.is_finite() || self.atomic_mass <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "{}: atomic mass must be finite and > 0",
                self.name
            )));
        }
        if !self.atomic_weight_ratio.is_finite() || self.atomic_weight_ratio <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "{}: atomic weight ratio must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }

    /// Atom density [atoms/cm³]: ρ·N_A / M unless overridden.
    pub fn number_density(&self) -> f64 {
        self.number_density_override
            .unwrap_or(self.density * AVOGADRO / self.atomic_mass)
    }

    /// Target nucleus mass [kg].
    pub fn target_mass_kg(&self) -> f64 {
        self.atomic_mass * AMU_KG
    }
}
