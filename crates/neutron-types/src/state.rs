// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Phase-space state of one neutron history.
/// Owned by a single history and mutated in place at every transport step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub position: [f64; 3],  // (x, y, z) [cm]
    pub direction: [f64; 3], // (u, v, w) unit direction cosines
    pub energy: f64,         // [eV]
    pub weight: f64,
    pub has_interacted: bool,
}

impl ParticleState {
    pub fn new(position: [f64; 3], direction: [f64; 3], energy: f64) -> Self {
        ParticleState {
            position,
            direction,
            energy,
            weight: 1.0,
            has_interacted: false,
        }
    }

    /// Move `distance` along the current direction.
    pub fn advance(&mut self, distance: f64) {
        for k in 0..3 {
            self.position[k] += distance * self.direction[k];
        }
    }
}

/// Terminal state of a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Escaped,
    Killed,
}

/// Terminal record emitted once per history and consumed by the tally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: HistoryStatus,
    pub final_energy: f64,
    pub final_weight: f64,
    /// Number of collisions resolved before termination.
    pub collisions: u64,
}

impl Outcome {
    pub fn escaped(state: &ParticleState, collisions: u64) -> Self {
        Outcome {
            status: HistoryStatus::Escaped,
            final_energy: state.energy,
            final_weight: state.weight,
            collisions,
        }
    }

    pub fn killed(state: &ParticleState, collisions: u64) -> Self {
        Outcome {
            status: HistoryStatus::Killed,
            final_energy: state.energy,
            final_weight: state.weight,
            collisions,
        }
    }

    pub fn is_escaped(&self) -> bool {
        self.status == HistoryStatus::Escaped
    }
}
