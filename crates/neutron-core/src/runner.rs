// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Batch Runner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parallel execution of independent histories.
//!
//! History `i` draws from its own `StdRng` seeded with `seed + i`. Outcomes
//! are collected in index order and summed sequentially, so the tally is
//! bit-for-bit identical for any thread count.

use crate::model::Model;
use crate::source::PointSource;
use crate::tally::Tally;
use crate::transport::simulate_history;
use neutron_types::config::Settings;
use neutron_types::error::NeutronResult;
use neutron_types::state::Outcome;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Run one source history with its own seeded stream.
pub fn run_history(
    model: &Model,
    source: &PointSource,
    settings: &Settings,
    index: u64,
) -> NeutronResult<Outcome> {
    let mut rng = StdRng::seed_from_u64(settings.seed.wrapping_add(index));
    let state = source.sample(&mut rng);
    let outcome = simulate_history(model, settings, state, &mut rng)?;
    log::debug!(
        "history {index}: {:?} E={:.4e} eV w={:.4} after {} collisions",
        outcome.status,
        outcome.final_energy,
        outcome.final_weight,
        outcome.collisions
    );
    Ok(outcome)
}

/// Every history's outcome, in index order. The first error aborts.
pub fn run_outcomes(
    model: &Model,
    source: &PointSource,
    settings: &Settings,
) -> NeutronResult<Vec<Outcome>> {
    settings.validate()?;
    (0..settings.particles)
        .into_par_iter()
        .map(|i| run_history(model, source, settings, i as u64))
        .collect()
}

pub fn run_batch(model: &Model, source: &PointSource, settings: &Settings) -> NeutronResult<Tally> {
    let outcomes = run_outcomes(model, source, settings)?;
    let tally: Tally = outcomes.iter().collect();
    log::info!(
        "{} histories ({:?}): leakage={:.5}, <E_esc>={:.2} eV, escaped={}, killed={}",
        tally.histories,
        settings.mode,
        tally.leakage_fraction(),
        tally.average_escape_energy(),
        tally.escaped,
        tally.killed
    );
    Ok(tally)
}
