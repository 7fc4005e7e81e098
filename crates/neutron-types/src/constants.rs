// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Neutron rest mass (kg)
pub const M_NEUTRON: f64 = 1.674927471e-27;

/// Electron-volt to Joule
pub const EV_TO_J: f64 = 1.60217663e-19;

/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Atomic mass unit (kg)
pub const AMU_KG: f64 = 1.660539e-27;

/// Avogadro constant (1/mol)
pub const AVOGADRO: f64 = 6.02214076e23;

/// Barn to cm²
pub const BARN_TO_CM2: f64 = 1e-24;

/// Library reference temperature (K). Data groups are keyed `294K`.
pub const REFERENCE_TEMPERATURE_K: f64 = 294.0;

/// Moderator temperature used for free-gas target motion (K).
pub const MODERATOR_TEMPERATURE_K: f64 = 293.6;

/// Above this lab energy (eV) target thermal motion is ignored.
pub const THERMAL_CUTOFF_EV: f64 = 10.0;

/// ENDF reaction identifiers used by the kernel.
pub const MT_ELASTIC: u32 = 2;
pub const MT_FISSION: u32 = 18;
pub const MT_CAPTURE: u32 = 102;
