// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — History Transport
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Random walk of a single neutron history.
//!
//! Each step either crosses the nearest region boundary or collides,
//! whichever comes first. A history ends when it leaves every region
//! (escaped) or is absorbed or lost to roulette (killed).

use crate::model::{LoadedMaterial, Model};
use neutron_data::nuclide::MacroscopicXs;
use neutron_geometry::region::Region;
use neutron_geometry::resolver::{locate, nearest_boundary};
use neutron_physics::kinematics::{
    effective_lookup_energy, elastic_scatter, inelastic_scatter, rotate_direction,
};
use neutron_types::config::{RouletteParams, Settings, TransportMode};
use neutron_types::error::NeutronResult;
use neutron_types::state::{Outcome, ParticleState};
use rand::Rng;

/// Reaction branch picked at an analog collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Scatter,
    Absorb,
    Fission,
}

/// Pick a branch from `ξ·Σ_t` against the cumulative partials.
pub fn sample_reaction(xs: &MacroscopicXs, xi: f64) -> Reaction {
    let target = xi * xs.total;
    if target < xs.scatter {
        Reaction::Scatter
    } else if target < xs.scatter + xs.absorb {
        Reaction::Absorb
    } else {
        Reaction::Fission
    }
}

/// Distance to the next collision, `-ln(ξ)/Σ_t`; infinite in void.
pub fn collision_distance<R: Rng + ?Sized>(total: f64, rng: &mut R) -> f64 {
    if total > 0.0 {
        // 1 - U is in (0, 1], so the log is finite.
        -(1.0 - rng.gen::<f64>()).ln() / total
    } else {
        f64::INFINITY
    }
}

/// Russian roulette below the weight cutoff. Returns `false` if the history
/// is killed; survivors are raised to the survival weight.
pub fn play_roulette<R: Rng + ?Sized>(
    state: &mut ParticleState,
    params: &RouletteParams,
    rng: &mut R,
) -> bool {
    if state.weight >= params.weight_cutoff {
        return true;
    }
    let survival = params.survival_weight();
    if rng.gen::<f64>() < state.weight / survival {
        state.weight = survival;
        true
    } else {
        false
    }
}

fn macroscopic_at<R: Rng + ?Sized>(
    material: Option<&LoadedMaterial>,
    state: &ParticleState,
    settings: &Settings,
    rng: &mut R,
) -> MacroscopicXs {
    match material {
        Some(m) => {
            let e = effective_lookup_energy(state.energy, settings.lookup_energy, &m.sampler, rng);
            m.nuclide.total_cross_sections(e, m.number_density)
        }
        None => MacroscopicXs::void(),
    }
}

/// Apply free-gas kinematics and turn the flight direction.
///
/// A level with zero branching draws nothing, so it samples exactly like a
/// material without one.
fn scatter<R: Rng + ?Sized>(material: &LoadedMaterial, state: &mut ParticleState, rng: &mut R) {
    let awr = material.material.atomic_weight_ratio;
    let result = match material.material.inelastic {
        Some(level) if level.branching > 0.0 && rng.gen::<f64>() < level.branching => {
            inelastic_scatter(state.energy, awr, level.q_value_ev, &material.sampler, rng)
        }
        _ => elastic_scatter(state.energy, awr, &material.sampler, rng),
    };
    state.energy = result.energy;
    let (direction, _) = rotate_direction(state.direction, result.mu_lab, rng);
    state.direction = direction;
}

/// Follow one history to termination.
///
/// A start point outside every region escapes at once with its state
/// untouched. Tables are preloaded, so data errors surface from
/// [`Model::load`] and a history on a built model never returns `Err`.
/// The `Result` is kept so callers collect histories with `?`.
pub fn simulate_history<R: Rng + ?Sized>(
    model: &Model,
    settings: &Settings,
    mut state: ParticleState,
    rng: &mut R,
) -> NeutronResult<Outcome> {
    let regions = model.regions();
    let mut collisions = 0u64;

    let mut region: &Region = match locate(regions, state.position) {
        Some(r) => r,
        None => return Ok(Outcome::escaped(&state, collisions)),
    };

    loop {
        let material = model.material_in(region);
        let xs = macroscopic_at(material, &state, settings, rng);
        let d_collision = collision_distance(xs.total, rng);
        let hit = nearest_boundary(state.position, state.direction, regions);

        let crosses = match &hit {
            Some(h) => h.distance < d_collision,
            None => !d_collision.is_finite(),
        };

        if crosses {
            let Some(hit) = hit else {
                return Ok(Outcome::escaped(&state, collisions));
            };
            state.position = hit.point;
            state.advance(settings.boundary_bump_cm);
            match locate(regions, state.position) {
                Some(next) => region = next,
                None => {
                    log::trace!("left '{}' at {:?}", hit.region.name, state.position);
                    return Ok(Outcome::escaped(&state, collisions));
                }
            }
            continue;
        }

        // Collision: only reachable with Σ_t > 0, so a material is present.
        let Some(material) = material else {
            return Ok(Outcome::escaped(&state, collisions));
        };
        state.advance(d_collision);
        state.has_interacted = true;
        collisions += 1;

        match settings.mode {
            TransportMode::ImplicitCapture => {
                state.weight *= xs.scatter / xs.total;
            }
            TransportMode::Analog => match sample_reaction(&xs, rng.gen::<f64>()) {
                Reaction::Scatter => {}
                Reaction::Absorb | Reaction::Fission => {
                    return Ok(Outcome::killed(&state, collisions));
                }
            },
        }

        scatter(material, &mut state, rng);

        if !play_roulette(&mut state, &settings.roulette, rng) {
            return Ok(Outcome::killed(&state, collisions));
        }
    }
}
