// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Sources
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use neutron_math::vec3::from_polar;
use neutron_types::error::{NeutronError, NeutronResult};
use neutron_types::state::ParticleState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Isotropic, monoenergetic point source with unit starting weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSource {
    pub position: [f64; 3],
    /// [eV]
    pub energy: f64,
}

impl PointSource {
    pub fn new(position: [f64; 3], energy: f64) -> NeutronResult<Self> {
        if !energy.is_finite() || energy <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "source energy must be finite and > 0, got {energy}"
            )));
        }
        if position.iter().any(|c| !c.is_finite()) {
            return Err(NeutronError::ConfigError(
                "source position must be finite".to_string(),
            ));
        }
        Ok(PointSource { position, energy })
    }

    /// `cosθ = 1 − 2ξ₁`, `φ = 2πξ₂`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState {
        let mu = 1.0 - 2.0 * rng.gen::<f64>();
        let phi = 2.0 * PI * rng.gen::<f64>();
        ParticleState::new(self.position, from_polar(mu, phi), self.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_bad_energy() {
        assert!(PointSource::new([0.0; 3], 0.0).is_err());
        assert!(PointSource::new([0.0; 3], f64::NAN).is_err());
        assert!(PointSource::new([f64::INFINITY, 0.0, 0.0], 1e6).is_err());
    }

    #[test]
    fn test_isotropic_mean_direction() {
        let src = PointSource::new([1.0, 2.0, 3.0], 1e6).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let n = 20_000;
        let mut mean = [0.0; 3];
        for _ in 0..n {
            let s = src.sample(&mut rng);
            assert_eq!(s.position, [1.0, 2.0, 3.0]);
            assert_eq!(s.energy, 1e6);
            assert_eq!(s.weight, 1.0);
            let len = s.direction.iter().map(|c| c * c).sum::<f64>().sqrt();
            assert!((len - 1.0).abs() < 1e-12);
            for k in 0..3 {
                mean[k] += s.direction[k] / n as f64;
            }
        }
        for (k, m) in mean.iter().enumerate() {
            assert!(m.abs() < 0.02, "mean direction component {k} = {m}");
        }
    }
}
