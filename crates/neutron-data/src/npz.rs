// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — NPZ Cross-Section Archives
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One NumPy `.npz` archive per element at `<base>/neutron/<ELEMENT>.npz`.
//!
//! Archive entries mirror the hierarchical group layout:
//! `<ELEMENT>/reactions/reaction_<MT:03>/294K/xs.npy`, optional `energy.npy`
//! (local grid) and `threshold_idx.npy` (single `i64`), plus the shared grid
//! at `<ELEMENT>/energy/294K.npy`.

use crate::store::{global_energy_path, reaction_group_path, CrossSectionStore, ReactionRecord};
use ndarray::{Array1, Ix1, OwnedRepr};
use ndarray_npy::{NpzReader, NpzWriter};
use neutron_types::error::{NeutronError, NeutronResult};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct NpzStore {
    base: PathBuf,
}

impl NpzStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        NpzStore { base: base.into() }
    }

    pub fn archive_path(&self, element: &str) -> PathBuf {
        self.base.join("neutron").join(format!("{element}.npz"))
    }

    fn open(&self, element: &str, mt: u32) -> NeutronResult<NpzReader<File>> {
        let path = self.archive_path(element);
        let file = File::open(&path).map_err(|_| NeutronError::ElementNotFound {
            element: element.to_string(),
            path: path.display().to_string(),
        })?;
        NpzReader::new(file).map_err(|e| {
            NeutronError::read(
                element,
                mt,
                format!("failed to open archive '{}': {e}", path.display()),
            )
        })
    }
}

fn has_entry(names: &[String], key: &str) -> bool {
    let with_ext = format!("{key}.npy");
    names.iter().any(|n| n == key || *n == with_ext)
}

fn read_f64(
    npz: &mut NpzReader<File>,
    key: &str,
    element: &str,
    mt: u32,
) -> NeutronResult<Vec<f64>> {
    npz.by_name::<OwnedRepr<f64>, Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<OwnedRepr<f64>, Ix1>(key))
        .map(|a| a.to_vec())
        .map_err(|e| NeutronError::read(element, mt, format!("failed to read {key}: {e}")))
}

fn read_index(npz: &mut NpzReader<File>, key: &str, element: &str, mt: u32) -> NeutronResult<usize> {
    let arr = npz
        .by_name::<OwnedRepr<i64>, Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<OwnedRepr<i64>, Ix1>(key))
        .map_err(|e| NeutronError::read(element, mt, format!("failed to read {key}: {e}")))?;
    let raw = *arr
        .get(0)
        .ok_or_else(|| NeutronError::read(element, mt, format!("{key} is empty")))?;
    usize::try_from(raw)
        .map_err(|_| NeutronError::read(element, mt, format!("negative threshold_idx {raw}")))
}

impl CrossSectionStore for NpzStore {
    fn reaction(&self, element: &str, mt: u32) -> NeutronResult<Option<ReactionRecord>> {
        let mut npz = self.open(element, mt)?;
        let names = npz
            .names()
            .map_err(|e| NeutronError::read(element, mt, format!("failed to list archive: {e}")))?;

        let group = reaction_group_path(element, mt);
        let xs_key = format!("{group}/xs");
        if !has_entry(&names, &xs_key) {
            return Ok(None);
        }

        let xs = read_f64(&mut npz, &xs_key, element, mt)?;
        let energy_key = format!("{group}/energy");
        let energy = if has_entry(&names, &energy_key) {
            Some(read_f64(&mut npz, &energy_key, element, mt)?)
        } else {
            None
        };
        let idx_key = format!("{group}/threshold_idx");
        let threshold_idx = if has_entry(&names, &idx_key) {
            read_index(&mut npz, &idx_key, element, mt)?
        } else {
            0
        };

        Ok(Some(ReactionRecord {
            xs,
            energy,
            threshold_idx,
        }))
    }

    fn global_energy(&self, element: &str) -> NeutronResult<Option<Vec<f64>>> {
        let mut npz = self.open(element, 0)?;
        let names = npz
            .names()
            .map_err(|e| NeutronError::read(element, 0, format!("failed to list archive: {e}")))?;
        let key = global_energy_path(element);
        if !has_entry(&names, &key) {
            return Ok(None);
        }
        read_f64(&mut npz, &key, element, 0).map(Some)
    }
}

/// Write an element archive under `<base>/neutron/`, creating the directory.
pub fn write_element(
    base: &Path,
    element: &str,
    global_energy: Option<&[f64]>,
    reactions: &[(u32, ReactionRecord)],
) -> NeutronResult<PathBuf> {
    let dir = base.join("neutron");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{element}.npz"));
    let file = File::create(&path)?;
    let mut writer = NpzWriter::new(file);

    let write_err = |mt: u32, e: ndarray_npy::WriteNpzError| {
        NeutronError::read(element, mt, format!("failed to write archive: {e}"))
    };

    if let Some(grid) = global_energy {
        writer
            .add_array(
                format!("{}.npy", global_energy_path(element)),
                &Array1::from(grid.to_vec()),
            )
            .map_err(|e| write_err(0, e))?;
    }
    for (mt, record) in reactions {
        let group = reaction_group_path(element, *mt);
        writer
            .add_array(format!("{group}/xs.npy"), &Array1::from(record.xs.clone()))
            .map_err(|e| write_err(*mt, e))?;
        if let Some(energy) = &record.energy {
            writer
                .add_array(format!("{group}/energy.npy"), &Array1::from(energy.clone()))
                .map_err(|e| write_err(*mt, e))?;
        }
        if record.threshold_idx > 0 {
            writer
                .add_array(
                    format!("{group}/threshold_idx.npy"),
                    &Array1::from(vec![record.threshold_idx as i64]),
                )
                .map_err(|e| write_err(*mt, e))?;
        }
    }
    writer.finish().map_err(|e| write_err(0, e))?;
    Ok(path)
}
