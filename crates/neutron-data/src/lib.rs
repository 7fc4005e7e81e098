// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Neutron Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cross-section data access.
//!
//! [`store::CrossSectionStore`] is the storage contract: it reports a
//! reaction as present, absent (`Ok(None)`) or malformed (`Err`).
//! [`table::ReactionTable`] resolves the on-disk grid convention once at
//! load time. [`reader::CrossSectionReader`] validates requests and
//! converts microscopic values to macroscopic ones; [`nuclide::NuclideXs`]
//! holds the preloaded tables used on the transport hot path.

pub mod memory;
pub mod npz;
pub mod nuclide;
pub mod reader;
pub mod store;
pub mod table;
