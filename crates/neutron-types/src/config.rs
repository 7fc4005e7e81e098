// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{NeutronError, NeutronResult};
use serde::{Deserialize, Serialize};

/// Collision treatment for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    /// Absorption and fission terminate the history.
    Analog,
    /// Weight is reduced by the absorption probability at every collision.
    #[serde(alias = "shielding")]
    ImplicitCapture,
}

/// Energy used for cross-section lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupEnergyModel {
    /// Always the lab-frame neutron energy.
    Lab,
    /// Below the thermal cutoff, the energy of the neutron-target relative
    /// speed with target motion taken orthogonal on average.
    #[default]
    RelativeSpeed,
}

/// Russian roulette parameters, relative to a unit starting weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouletteParams {
    /// Histories below this weight play roulette (default: 0.25)
    #[serde(default = "default_weight_cutoff")]
    pub weight_cutoff: f64,
    /// Weight given to survivors. Defaults to the cutoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survival_weight: Option<f64>,
}

fn default_weight_cutoff() -> f64 {
    0.25
}

impl Default for RouletteParams {
    fn default() -> Self {
        RouletteParams {
            weight_cutoff: default_weight_cutoff(),
            survival_weight: None,
        }
    }
}

impl RouletteParams {
    pub fn survival_weight(&self) -> f64 {
        self.survival_weight.unwrap_or(self.weight_cutoff)
    }
}

/// Immutable run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub mode: TransportMode,
    pub particles: usize,
    /// History `i` draws from a stream seeded with `seed + i` (default: 12345)
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub roulette: RouletteParams,
    #[serde(default)]
    pub lookup_energy: LookupEnergyModel,
    /// Push past a crossed surface before re-locating [cm] (default: 1e-8)
    #[serde(default = "default_boundary_bump")]
    pub boundary_bump_cm: f64,
}

fn default_seed() -> u64 {
    12345
}
fn default_boundary_bump() -> f64 {
    1e-8
}

impl Settings {
    pub fn new(mode: TransportMode, particles: usize) -> Self {
        Settings {
            mode,
            particles,
            seed: default_seed(),
            roulette: RouletteParams::default(),
            lookup_energy: LookupEnergyModel::default(),
            boundary_bump_cm: default_boundary_bump(),
        }
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> NeutronResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> NeutronResult<()> {
        if self.particles == 0 {
            return Err(NeutronError::ConfigError(
                "particles must be >= 1".to_string(),
            ));
        }
        let cutoff = self.roulette.weight_cutoff;
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "roulette.weight_cutoff must be finite and > 0, got {cutoff}"
            )));
        }
        let survival = self.roulette.survival_weight();
        if !survival.is_finite() || survival < cutoff {
            return Err(NeutronError::ConfigError(format!(
                "roulette.survival_weight must be finite and >= weight_cutoff, got {survival}"
            )));
        }
        // Without a push past the surface the next step re-finds the same hit.
        if !self.boundary_bump_cm.is_finite() || self.boundary_bump_cm <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "boundary_bump_cm must be finite and > 0, got {}",
                self.boundary_bump_cm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_uses_defaults() {
        let s: Settings =
            serde_json::from_str(r#"{ "mode": "implicit-capture", "particles": 100 }"#).unwrap();
        assert_eq!(s.mode, TransportMode::ImplicitCapture);
        assert_eq!(s.particles, 100);
        assert_eq!(s.seed, 12345);
        assert!((s.roulette.weight_cutoff - 0.25).abs() < 1e-15);
        assert!((s.roulette.survival_weight() - 0.25).abs() < 1e-15);
        assert_eq!(s.lookup_energy, LookupEnergyModel::RelativeSpeed);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_shielding_alias() {
        let s: Settings =
            serde_json::from_str(r#"{ "mode": "shielding", "particles": 10 }"#).unwrap();
        assert_eq!(s.mode, TransportMode::ImplicitCapture);
    }

    #[test]
    fn test_analog_and_lookup_model() {
        let s: Settings = serde_json::from_str(
            r#"{ "mode": "analog", "particles": 5, "lookup_energy": "lab",
                 "roulette": { "weight_cutoff": 0.1, "survival_weight": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(s.mode, TransportMode::Analog);
        assert_eq!(s.lookup_energy, LookupEnergyModel::Lab);
        assert!((s.roulette.survival_weight() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_validate_rejects_zero_particles() {
        let s = Settings::new(TransportMode::Analog, 0);
        assert!(matches!(s.validate(), Err(NeutronError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_survival_below_cutoff() {
        let mut s = Settings::new(TransportMode::ImplicitCapture, 10);
        s.roulette.survival_weight = Some(0.1);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_boundary_bump() {
        let mut s = Settings::new(TransportMode::ImplicitCapture, 10);
        s.boundary_bump_cm = 0.0;
        assert!(matches!(s.validate(), Err(NeutronError::ConfigError(_))));
        s.boundary_bump_cm = -1e-8;
        assert!(s.validate().is_err());

        let json = r#"{ "mode": "analog", "particles": 1, "boundary_bump_cm": 0.0 }"#;
        let parsed: Settings = serde_json::from_str(json).unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let s = Settings::new(TransportMode::ImplicitCapture, 42);
        let json = serde_json::to_string_pretty(&s).unwrap();
        let s2: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s2.mode, s.mode);
        assert_eq!(s2.particles, 42);
        assert!(json.contains("implicit-capture"));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let result = Settings::from_file("/nonexistent/settings.json");
        assert!(matches!(result, Err(NeutronError::Io(_))));
    }
}
