//! Neutron history transport.
//!
//! Model assembly, the per-history random walk, sources, tallies and the
//! parallel batch runner.

pub mod benchmark;
pub mod model;
pub mod runner;
pub mod source;
pub mod tally;
pub mod transport;
