// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Neutron Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collision physics: free-gas target motion and two-body kinematics.
//!
//! Every sampling routine takes the random stream explicitly so each
//! history owns its own reproducible sequence.

pub mod kinematics;
pub mod sampler;
