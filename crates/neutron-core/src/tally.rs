// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Tally
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use neutron_types::state::{HistoryStatus, Outcome};
use serde::{Deserialize, Serialize};

/// Leakage accumulator over terminal outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub histories: u64,
    pub escaped: u64,
    pub killed: u64,
    pub collisions: u64,
    /// Σ w over escaped histories.
    pub escaped_weight: f64,
    /// Σ E·w over escaped histories [eV].
    pub escaped_energy_weight: f64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.histories += 1;
        self.collisions += outcome.collisions;
        match outcome.status {
            HistoryStatus::Escaped => {
                self.escaped += 1;
                self.escaped_weight += outcome.final_weight;
                self.escaped_energy_weight += outcome.final_energy * outcome.final_weight;
            }
            HistoryStatus::Killed => self.killed += 1,
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        self.histories += other.histories;
        self.escaped += other.escaped;
        self.killed += other.killed;
        self.collisions += other.collisions;
        self.escaped_weight += other.escaped_weight;
        self.escaped_energy_weight += other.escaped_energy_weight;
    }

    /// Escaped weight per source history.
    pub fn leakage_fraction(&self) -> f64 {
        if self.histories == 0 {
            return 0.0;
        }
        self.escaped_weight / self.histories as f64
    }

    /// Weight-averaged escape energy [eV]; 0 if nothing escaped.
    pub fn average_escape_energy(&self) -> f64 {
        if self.escaped_weight > 0.0 {
            self.escaped_energy_weight / self.escaped_weight
        } else {
            0.0
        }
    }
}

impl<'a> FromIterator<&'a Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Outcome>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}
