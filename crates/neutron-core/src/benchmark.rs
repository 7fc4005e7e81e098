// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Sphere Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bare single-nuclide sphere with a central isotropic point source.

use crate::model::Model;
use crate::runner::run_batch;
use crate::source::PointSource;
use crate::tally::Tally;
use neutron_data::npz::NpzStore;
use neutron_data::reader::CrossSectionReader;
use neutron_data::store::CrossSectionStore;
use neutron_geometry::region::{Region, RegionNode};
use neutron_geometry::surface::Surface;
use neutron_types::config::{Settings, TransportMode};
use neutron_types::error::{NeutronError, NeutronResult};
use neutron_types::material::Material;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Library root holding `neutron/<ELEMENT>.npz`.
    pub data_path: String,
    pub material: Material,
    pub radius_cm: f64,
    /// [eV]
    pub source_energy_ev: f64,
    pub settings: Settings,
}

impl BenchmarkConfig {
    /// Pb-208 sphere, R = 10 cm, 1 MeV source, implicit capture,
    /// 10 000 histories.
    pub fn lead_sphere(data_path: &str) -> NeutronResult<Self> {
        Ok(BenchmarkConfig {
            data_path: data_path.to_string(),
            material: Material::new("Lead", "Pb208", 11.35, 207.97, 207.2)?,
            radius_cm: 10.0,
            source_energy_ev: 1.0e6,
            settings: Settings::new(TransportMode::ImplicitCapture, 10_000),
        })
    }

    pub fn from_file(path: &str) -> NeutronResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NeutronResult<()> {
        if !self.radius_cm.is_finite() || self.radius_cm <= 0.0 {
            return Err(NeutronError::ConfigError(format!(
                "radius_cm must be finite and > 0, got {}",
                self.radius_cm
            )));
        }
        self.material.validate()?;
        self.settings.validate()
    }

    pub fn source(&self) -> NeutronResult<PointSource> {
        PointSource::new([0.0; 3], self.source_energy_ev)
    }

    pub fn build_model<S: CrossSectionStore>(
        &self,
        reader: &CrossSectionReader<S>,
    ) -> NeutronResult<Model> {
        let sphere = Region::union(
            &format!("{}Sphere", self.material.name),
            vec![RegionNode::from(Surface::sphere([0.0; 3], self.radius_cm)?)],
        )?
        .with_priority(1)
        .with_material(&self.material.name);
        Model::load(vec![sphere], vec![self.material.clone()], reader)
    }

    pub fn run_with<S: CrossSectionStore>(&self, reader: &CrossSectionReader<S>) -> NeutronResult<Tally> {
        self.validate()?;
        let model = self.build_model(reader)?;
        run_batch(&model, &self.source()?, &self.settings)
    }

    /// Run against the NPZ library at `data_path`.
    pub fn run(&self) -> NeutronResult<Tally> {
        let reader = CrossSectionReader::new(NpzStore::new(&self.data_path));
        self.run_with(&reader)
    }
}
