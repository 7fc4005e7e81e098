// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Scattering Kinematics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Free-gas two-body kinematics in the centre-of-mass frame.
//!
//! The incoming neutron travels along +z in a local frame; the outgoing lab
//! cosine `mu_lab` is measured against that axis and applied to the real
//! flight direction with [`rotate_direction`].

use crate::sampler::VelocitySampler;
use neutron_math::vec3::{add, from_polar, norm, scale, sub};
use neutron_types::config::LookupEnergyModel;
use neutron_types::constants::{EV_TO_J, M_NEUTRON, THERMAL_CUTOFF_EV};
use rand::Rng;
use std::f64::consts::PI;

/// Speed [m/s] of a neutron with kinetic energy `energy_ev`.
pub fn neutron_speed(energy_ev: f64) -> f64 {
    (2.0 * energy_ev.max(0.0) * EV_TO_J / M_NEUTRON).sqrt()
}

/// Kinetic energy [eV] of a neutron moving at `speed` [m/s].
pub fn neutron_energy(speed: f64) -> f64 {
    0.5 * M_NEUTRON * speed * speed / EV_TO_J
}

/// Velocities of one neutron-target encounter [m/s].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionFrame {
    /// Neutron lab velocity, along +z.
    pub neutron_lab: [f64; 3],
    pub target_lab: [f64; 3],
    /// Centre-of-mass velocity `(v_n + A·v_t)/(A + 1)`.
    pub center_of_mass: [f64; 3],
    /// Neutron velocity in the CM frame.
    pub neutron_cm: [f64; 3],
}

impl CollisionFrame {
    /// Build the frame for a neutron of `energy_ev` on a target of mass
    /// ratio `awr`. Above the thermal cutoff the target is at rest and no
    /// draws are consumed; otherwise the sampler's draws are followed by two
    /// for the isotropic target direction.
    pub fn sample<R: Rng + ?Sized>(
        energy_ev: f64,
        awr: f64,
        sampler: &VelocitySampler,
        rng: &mut R,
    ) -> Self {
        let v_n = neutron_speed(energy_ev);
        let neutron_lab = [0.0, 0.0, v_n];

        let v_t = if energy_ev > THERMAL_CUTOFF_EV {
            0.0
        } else {
            sampler.sample_speed(v_n, rng)
        };
        let target_lab = if v_t > 0.0 {
            let mu_t = 2.0 * rng.gen::<f64>() - 1.0;
            let phi_t = 2.0 * PI * rng.gen::<f64>();
            scale(from_polar(mu_t, phi_t), v_t)
        } else {
            [0.0; 3]
        };

        Self::from_velocities(neutron_lab, target_lab, awr)
    }

    pub fn from_velocities(neutron_lab: [f64; 3], target_lab: [f64; 3], awr: f64) -> Self {
        let center_of_mass = scale(add(neutron_lab, scale(target_lab, awr)), 1.0 / (awr + 1.0));
        CollisionFrame {
            neutron_lab,
            target_lab,
            center_of_mass,
            neutron_cm: sub(neutron_lab, center_of_mass),
        }
    }

    /// Neutron speed in the CM frame [m/s].
    pub fn cm_speed(&self) -> f64 {
        norm(self.neutron_cm)
    }

    /// Neutron kinetic energy in the CM frame [eV].
    pub fn cm_energy(&self) -> f64 {
        neutron_energy(self.cm_speed())
    }

    /// Scatter isotropically in CM at `cm_speed` and return to the lab.
    /// Consumes two draws (polar cosine, azimuth).
    pub fn scatter<R: Rng + ?Sized>(&self, cm_speed: f64, rng: &mut R) -> ScatterResult {
        let mu_cm = 2.0 * rng.gen::<f64>() - 1.0;
        let phi_cm = 2.0 * PI * rng.gen::<f64>();
        let outgoing_cm = scale(from_polar(mu_cm, phi_cm), cm_speed);
        let outgoing_lab = add(outgoing_cm, self.center_of_mass);

        let speed = norm(outgoing_lab);
        let mu_lab = if speed > 0.0 {
            outgoing_lab[2] / speed
        } else {
            1.0
        };

        ScatterResult {
            energy: neutron_energy(speed),
            mu_cm,
            mu_lab,
            outgoing_cm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Outgoing lab energy [eV].
    pub energy: f64,
    pub mu_cm: f64,
    /// Cosine between incoming and outgoing lab directions.
    pub mu_lab: f64,
    /// Outgoing neutron velocity in the CM frame [m/s].
    pub outgoing_cm: [f64; 3],
}

/// Elastic free-gas scatter: CM speed conserved.
pub fn elastic_scatter<R: Rng + ?Sized>(
    energy_ev: f64,
    awr: f64,
    sampler: &VelocitySampler,
    rng: &mut R,
) -> ScatterResult {
    let frame = CollisionFrame::sample(energy_ev, awr, sampler, rng);
    frame.scatter(frame.cm_speed(), rng)
}

/// Discrete-level inelastic scatter losing `q_value_ev` from the CM kinetic
/// energy.
///
/// Below threshold (`E_cm·(A+1)/A <= Q`) the level cannot be excited and the
/// collision is elastic in the frame already sampled, so the draws consumed
/// match [`elastic_scatter`] exactly.
pub fn inelastic_scatter<R: Rng + ?Sized>(
    energy_ev: f64,
    awr: f64,
    q_value_ev: f64,
    sampler: &VelocitySampler,
    rng: &mut R,
) -> ScatterResult {
    let frame = CollisionFrame::sample(energy_ev, awr, sampler, rng);
    let total_cm = frame.cm_energy() * (awr + 1.0) / awr;
    if total_cm <= q_value_ev {
        return frame.scatter(frame.cm_speed(), rng);
    }
    let e_cm_out = (total_cm - q_value_ev) * awr / (awr + 1.0);
    frame.scatter(neutron_speed(e_cm_out), rng)
}

/// Rotate unit direction `dir` by polar cosine `mu` about a uniformly
/// sampled azimuth. Returns the renormalised direction and the azimuth.
pub fn rotate_direction<R: Rng + ?Sized>(dir: [f64; 3], mu: f64, rng: &mut R) -> ([f64; 3], f64) {
    let phi = 2.0 * PI * rng.gen::<f64>();
    let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let [u, v, w] = dir;

    let rotated = if w.abs() >= 0.999999 {
        let sign = if w > 0.0 { 1.0 } else { -1.0 };
        [sin_theta * cos_phi, sin_theta * sin_phi, sign * mu]
    } else {
        let denom = (1.0 - w * w).max(1e-12).sqrt();
        [
            mu * u + sin_theta / denom * (u * w * cos_phi - v * sin_phi),
            mu * v + sin_theta / denom * (v * w * cos_phi + u * sin_phi),
            mu * w - sin_theta * denom * cos_phi,
        ]
    };

    let n = norm(rotated);
    (scale(rotated, 1.0 / n), phi)
}

/// Energy [eV] used for cross-section lookup.
///
/// Above the thermal cutoff, or with [`LookupEnergyModel::Lab`], this is the
/// lab energy and no draws are consumed. With
/// [`LookupEnergyModel::RelativeSpeed`] a target speed is sampled and the
/// relative speed is taken as `sqrt(v_n² + v_t²)`.
pub fn effective_lookup_energy<R: Rng + ?Sized>(
    energy_ev: f64,
    model: LookupEnergyModel,
    sampler: &VelocitySampler,
    rng: &mut R,
) -> f64 {
    if energy_ev > THERMAL_CUTOFF_EV {
        return energy_ev;
    }
    match model {
        LookupEnergyModel::Lab => energy_ev,
        LookupEnergyModel::RelativeSpeed => {
            let v_n = neutron_speed(energy_ev);
            let v_t = sampler.sample_speed(v_n, rng);
            0.5 * M_NEUTRON * (v_n * v_n + v_t * v_t) / EV_TO_J
        }
    }
}
