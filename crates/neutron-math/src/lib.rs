//! Mathematical primitives for SCPN Neutron Transport.

pub mod interp;
pub mod vec3;
