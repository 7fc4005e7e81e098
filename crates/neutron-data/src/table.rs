// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Reaction Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Energy-dependent reaction cross-section with its grid convention
//! resolved at load time.
//!
//! Two on-disk conventions exist:
//! - **local**: the reaction carries its own energy grid; outside
//!   `[grid_min, grid_max]` the cross-section is zero.
//! - **global**: values start at `threshold_idx` of the element's shared
//!   grid; below the threshold energy the cross-section is zero and above
//!   the last stored point it holds the last value.

use crate::store::ReactionRecord;
use neutron_math::interp::{interp1d, is_ascending};
use neutron_types::error::{NeutronError, NeutronResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridConvention {
    Local,
    Global {
        threshold_idx: usize,
        /// Stored array ran past the end of the global grid.
        truncated: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactionTable {
    convention: GridConvention,
    energy: Vec<f64>,
    xs: Vec<f64>,
    /// Lookups above this energy return zero.
    upper: f64,
}

impl ReactionTable {
    /// Resolve a stored record. `global_energy` is only consulted when the
    /// record has no local grid.
    pub fn from_record(
        element: &str,
        mt: u32,
        record: ReactionRecord,
        global_energy: Option<&[f64]>,
    ) -> NeutronResult<Self> {
        let ReactionRecord {
            xs,
            energy,
            threshold_idx,
        } = record;

        if xs.is_empty() {
            return Err(NeutronError::read(element, mt, "empty cross-section array"));
        }

        let (convention, energy, xs, upper) = match energy {
            Some(grid) => {
                if grid.len() != xs.len() {
                    return Err(NeutronError::read(
                        element,
                        mt,
                        format!(
                            "local grid length {} does not match xs length {}",
                            grid.len(),
                            xs.len()
                        ),
                    ));
                }
                let upper = grid[grid.len() - 1];
                (GridConvention::Local, grid, xs, upper)
            }
            None => {
                let global = global_energy.ok_or_else(|| {
                    NeutronError::read(
                        element,
                        mt,
                        format!(
                            "energy data path '{}' not found",
                            crate::store::global_energy_path(element)
                        ),
                    )
                })?;
                if threshold_idx >= global.len() {
                    return Err(NeutronError::read(
                        element,
                        mt,
                        format!(
                            "threshold_idx {threshold_idx} outside global grid of length {}",
                            global.len()
                        ),
                    ));
                }
                let mut xs = xs;
                let usable = global.len() - threshold_idx;
                let truncated = xs.len() > usable;
                if truncated {
                    log::debug!(
                        "{element} MT={mt}: truncating {} stored values to {usable} usable grid points",
                        xs.len()
                    );
                    xs.truncate(usable);
                }
                let energy = global[threshold_idx..threshold_idx + xs.len()].to_vec();
                (
                    GridConvention::Global {
                        threshold_idx,
                        truncated,
                    },
                    energy,
                    xs,
                    f64::INFINITY,
                )
            }
        };

        if !is_ascending(&energy) {
            return Err(NeutronError::read(
                element,
                mt,
                "energy grid is not ascending",
            ));
        }

        Ok(ReactionTable {
            convention,
            energy,
            xs,
            upper,
        })
    }

    /// Microscopic cross-section [barn] at `energy` [eV]. NaN reads as 0.
    pub fn evaluate(&self, energy: f64) -> f64 {
        if !(energy >= self.energy[0] && energy <= self.upper) {
            return 0.0;
        }
        interp1d(&self.energy, &self.xs, energy)
    }

    pub fn convention(&self) -> GridConvention {
        self.convention
    }

    /// Energy points actually used for interpolation.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Lowest energy with a non-zero lookup.
    pub fn threshold_energy(&self) -> f64 {
        self.energy[0]
    }
}
