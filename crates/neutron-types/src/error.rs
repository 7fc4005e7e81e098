// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeutronError {
    #[error("Invalid element identifier '{0}': use alphanumeric characters (e.g. U235, Pb208)")]
    InvalidElement(String),

    #[error("Invalid MT number {0}: must be between 1 and 999")]
    InvalidReaction(u32),

    #[error("Cross-section data for {element} not found at {path}")]
    ElementNotFound { element: String, path: String },

    #[error("Error reading {element} MT={mt}: {message}")]
    ReadError {
        element: String,
        mt: u32,
        message: String,
    },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NeutronError {
    pub fn read(element: &str, mt: u32, message: impl Into<String>) -> Self {
        NeutronError::ReadError {
            element: element.to_string(),
            mt,
            message: message.into(),
        }
    }
}

pub type NeutronResult<T> = Result<T, NeutronError>;
