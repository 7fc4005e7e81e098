// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Free-Gas Velocity Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Target-nucleus speed sampling for the free-gas model.
//!
//! Uses the standard mixture/rejection scheme. With `β = sqrt(M / 2kT)`
//! and `y = β·v_n`, the reduced target speed `x = β·v_t` is drawn from
//! `x³e^{-x²}` with probability `2 / (√π·y + 2)` and from `x²e^{-x²}`
//! otherwise (both are Gamma draws in `x²`), then accepted with
//! probability `|v_n − v_t| / (v_n + v_t)` for an isotropic relative
//! cosine. The accepted speed follows the relative-speed-weighted
//! Maxwellian seen by a neutron of speed `v_n`.

use neutron_types::constants::{K_BOLTZMANN, MODERATOR_TEMPERATURE_K};
use neutron_types::error::{NeutronError, NeutronResult};
use neutron_types::material::Material;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use std::f64::consts::PI;

#[derive(Debug, Clone)]
pub struct VelocitySampler {
    mass_kg: f64,
    temperature_k: f64,
    /// sqrt(M / 2kT) [s/m]
    beta: f64,
    gamma_2: Gamma<f64>,
    gamma_1_5: Gamma<f64>,
}

impl VelocitySampler {
    pub fn new(mass_kg: f64, temperature_k: f64) -> NeutronResult<Self> {
        if !mass_kg.is_finite() || mass_kg <= 0.0 {
            return Err(NeutronError::PhysicsViolation(format!(
                "target mass must be finite and > 0, got {mass_kg}"
            )));
        }
        if !temperature_k.is_finite() || temperature_k <= 0.0 {
            return Err(NeutronError::PhysicsViolation(format!(
                "temperature must be finite and > 0, got {temperature_k}"
            )));
        }
        let gamma = |shape: f64| {
            Gamma::new(shape, 1.0)
                .map_err(|e| NeutronError::PhysicsViolation(format!("gamma({shape}): {e}")))
        };
        Ok(VelocitySampler {
            mass_kg,
            temperature_k,
            beta: (mass_kg / (2.0 * K_BOLTZMANN * temperature_k)).sqrt(),
            gamma_2: gamma(2.0)?,
            gamma_1_5: gamma(1.5)?,
        })
    }

    /// Sampler for a material's target nuclide at the moderator temperature.
    pub fn for_material(material: &Material) -> NeutronResult<Self> {
        Self::new(material.target_mass_kg(), MODERATOR_TEMPERATURE_K)
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    /// Most probable Maxwellian speed `sqrt(2kT/M)` [m/s].
    pub fn thermal_speed(&self) -> f64 {
        1.0 / self.beta
    }

    /// Target speed [m/s] seen by a neutron moving at `neutron_speed` [m/s].
    /// Safe for any non-negative neutron speed.
    pub fn sample_speed<R: Rng + ?Sized>(&self, neutron_speed: f64, rng: &mut R) -> f64 {
        let y = self.beta * neutron_speed.max(0.0);
        let p_gamma_2 = 2.0 / (PI.sqrt() * y + 2.0);
        loop {
            let x_sq = if rng.gen::<f64>() < p_gamma_2 {
                self.gamma_2.sample(rng)
            } else {
                self.gamma_1_5.sample(rng)
            };
            let x = x_sq.sqrt();
            let mu: f64 = 2.0 * rng.gen::<f64>() - 1.0;
            let sum = x + y;
            if sum <= 0.0 {
                return 0.0;
            }
            let rel = (x_sq + y * y - 2.0 * x * y * mu).max(0.0).sqrt();
            if rng.gen::<f64>() < rel / sum {
                return x / self.beta;
            }
        }
    }
}
