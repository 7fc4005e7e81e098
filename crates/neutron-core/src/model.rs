// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Read-only geometry plus material data shared by every history.

use neutron_data::nuclide::NuclideXs;
use neutron_data::reader::CrossSectionReader;
use neutron_data::store::CrossSectionStore;
use neutron_geometry::region::Region;
use neutron_physics::sampler::VelocitySampler;
use neutron_types::error::{NeutronError, NeutronResult};
use neutron_types::material::Material;
use std::collections::HashMap;

/// A material with its preloaded tables and free-gas sampler.
#[derive(Debug, Clone)]
pub struct LoadedMaterial {
    pub material: Material,
    pub nuclide: NuclideXs,
    pub sampler: VelocitySampler,
    /// [atoms/cm³]
    pub number_density: f64,
}

impl LoadedMaterial {
    pub fn new(material: Material, nuclide: NuclideXs) -> NeutronResult<Self> {
        material.validate()?;
        if nuclide.element != material.element {
            return Err(NeutronError::ConfigError(format!(
                "{}: tables are for {} but material uses {}",
                material.name, nuclide.element, material.element
            )));
        }
        let sampler = VelocitySampler::for_material(&material)?;
        let number_density = material.number_density();
        Ok(LoadedMaterial {
            material,
            nuclide,
            sampler,
            number_density,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Model {
    regions: Vec<Region>,
    materials: HashMap<String, LoadedMaterial>,
}

impl Model {
    /// Build from regions and loaded materials. Every region's material tag
    /// must name one of the materials; untagged regions are void.
    pub fn new(regions: Vec<Region>, materials: Vec<LoadedMaterial>) -> NeutronResult<Self> {
        let mut by_name = HashMap::with_capacity(materials.len());
        for m in materials {
            let name = m.material.name.clone();
            if by_name.insert(name.clone(), m).is_some() {
                return Err(NeutronError::ConfigError(format!(
                    "material '{name}' defined twice"
                )));
            }
        }
        for region in &regions {
            if let Some(tag) = &region.material {
                if !by_name.contains_key(tag) {
                    return Err(NeutronError::ConfigError(format!(
                        "region '{}' references unknown material '{tag}'",
                        region.name
                    )));
                }
            }
        }
        Ok(Model {
            regions,
            materials: by_name,
        })
    }

    /// Load each material's tables through `reader`.
    pub fn load<S: CrossSectionStore>(
        regions: Vec<Region>,
        materials: Vec<Material>,
        reader: &CrossSectionReader<S>,
    ) -> NeutronResult<Self> {
        let loaded = materials
            .into_iter()
            .map(|m| {
                let nuclide = reader.load_nuclide(&m.element)?;
                LoadedMaterial::new(m, nuclide)
            })
            .collect::<NeutronResult<Vec<_>>>()?;
        Self::new(regions, loaded)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn material(&self, name: &str) -> Option<&LoadedMaterial> {
        self.materials.get(name)
    }

    /// Material filling `region`; `None` for void.
    pub fn material_in(&self, region: &Region) -> Option<&LoadedMaterial> {
        region.material.as_deref().and_then(|n| self.materials.get(n))
    }
}
