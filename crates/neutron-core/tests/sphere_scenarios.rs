// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — End-to-End Sphere Scenarios
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Whole-batch checks on a bare 10 cm sphere with a central 1 MeV source.
//!
//! Cross-sections are flat so reference values are analytic: a pure
//! absorber with Σ = 0.1 cm⁻¹ leaks `e^{-1}` of the source.

use neutron_core::model::Model;
use neutron_core::runner::{run_batch, run_outcomes};
use neutron_core::source::PointSource;
use neutron_data::memory::MemoryStore;
use neutron_data::reader::CrossSectionReader;
use neutron_geometry::aabb::Aabb;
use neutron_geometry::region::{Region, RegionNode};
use neutron_geometry::surface::Surface;
use neutron_types::config::{Settings, TransportMode};
use neutron_types::material::Material;

const RADIUS: f64 = 10.0;
const N_DENSITY: f64 = 1e23;

fn reader(scatter_b: f64, capture_b: f64) -> CrossSectionReader<MemoryStore> {
    let mut store = MemoryStore::new().with_element("X100");
    if scatter_b > 0.0 {
        store = store.with_constant_xs("X100", 2, scatter_b, 1e-5, 2e7);
    }
    if capture_b > 0.0 {
        store = store.with_constant_xs("X100", 102, capture_b, 1e-5, 2e7);
    }
    CrossSectionReader::new(store)
}

fn material() -> Material {
    Material::new("Slab", "X100", 1.0, 100.0, 99.2)
        .unwrap()
        .with_number_density(N_DENSITY)
        .unwrap()
}

fn ball() -> Region {
    Region::union(
        "Ball",
        vec![RegionNode::from(Surface::sphere([0.0; 3], RADIUS).unwrap())],
    )
    .unwrap()
    .with_priority(1)
    .with_material("Slab")
}

fn bare_sphere(scatter_b: f64, capture_b: f64) -> Model {
    Model::load(vec![ball()], vec![material()], &reader(scatter_b, capture_b)).unwrap()
}

fn source() -> PointSource {
    PointSource::new([0.0; 3], 1.0e6).unwrap()
}

fn settings(mode: TransportMode, particles: usize) -> Settings {
    Settings::new(mode, particles)
}

#[test]
fn pure_absorber_leaks_exp_minus_one_analog() {
    let model = bare_sphere(0.0, 1.0);
    let tally = run_batch(&model, &source(), &settings(TransportMode::Analog, 4000)).unwrap();
    let expected = (-1.0f64).exp();
    assert!(
        (tally.leakage_fraction() - expected).abs() < 0.03,
        "leakage {} vs e^-1 = {expected}",
        tally.leakage_fraction()
    );
    // Uncollided escapes keep the source energy.
    assert_eq!(tally.average_escape_energy(), 1.0e6);
}

#[test]
fn pure_absorber_leaks_exp_minus_one_implicit() {
    let model = bare_sphere(0.0, 1.0);
    let tally =
        run_batch(&model, &source(), &settings(TransportMode::ImplicitCapture, 4000)).unwrap();
    let expected = (-1.0f64).exp();
    assert!(
        (tally.leakage_fraction() - expected).abs() < 0.03,
        "leakage {} vs e^-1 = {expected}",
        tally.leakage_fraction()
    );
}

fn fissile_sphere(fission_b: f64) -> Model {
    let store = MemoryStore::new()
        .with_element("X100")
        .with_constant_xs("X100", 18, fission_b, 1e-5, 2e7);
    Model::load(vec![ball()], vec![material()], &CrossSectionReader::new(store)).unwrap()
}

#[test]
fn pure_fission_leaks_exp_minus_one_in_both_modes() {
    let model = fissile_sphere(1.0);
    let expected = (-1.0f64).exp();
    for mode in [TransportMode::Analog, TransportMode::ImplicitCapture] {
        let tally = run_batch(&model, &source(), &settings(mode, 4000)).unwrap();
        assert!(
            (tally.leakage_fraction() - expected).abs() < 0.03,
            "{mode:?}: leakage {} vs e^-1 = {expected}",
            tally.leakage_fraction()
        );
        assert_eq!(tally.average_escape_energy(), 1.0e6);
        assert_eq!(tally.escaped + tally.killed, 4000);
    }
}

#[test]
fn pure_scatterer_implicit_leaks_everything() {
    let model = bare_sphere(5.0, 0.0);
    let tally =
        run_batch(&model, &source(), &settings(TransportMode::ImplicitCapture, 500)).unwrap();
    assert_eq!(tally.escaped, 500);
    assert_eq!(tally.leakage_fraction(), 1.0);
    assert!(tally.average_escape_energy() < 1.0e6);
    assert!(tally.collisions > 0);
}

#[test]
fn analog_and_implicit_capture_agree() {
    let model = bare_sphere(2.0, 0.5);
    let analog = run_batch(&model, &source(), &settings(TransportMode::Analog, 4000)).unwrap();
    let implicit =
        run_batch(&model, &source(), &settings(TransportMode::ImplicitCapture, 4000)).unwrap();
    assert!(
        (analog.leakage_fraction() - implicit.leakage_fraction()).abs() < 0.04,
        "analog {} vs implicit {}",
        analog.leakage_fraction(),
        implicit.leakage_fraction()
    );
}

#[test]
fn batch_is_bit_reproducible_across_thread_counts() {
    let model = bare_sphere(4.0, 0.3);
    let s = settings(TransportMode::ImplicitCapture, 300);

    let first = run_batch(&model, &source(), &s).unwrap();
    let second = run_batch(&model, &source(), &s).unwrap();
    assert_eq!(first, second);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let single = pool.install(|| run_batch(&model, &source(), &s)).unwrap();
    assert_eq!(first.leakage_fraction().to_bits(), single.leakage_fraction().to_bits());
    assert_eq!(
        first.average_escape_energy().to_bits(),
        single.average_escape_energy().to_bits()
    );
}

#[test]
fn different_seed_changes_result() {
    let model = bare_sphere(4.0, 0.3);
    let a = settings(TransportMode::ImplicitCapture, 200);
    let mut b = a.clone();
    b.seed = 777;
    let ta = run_batch(&model, &source(), &a).unwrap();
    let tb = run_batch(&model, &source(), &b).unwrap();
    assert_ne!(ta, tb);
}

#[test]
fn void_shell_leaves_results_unchanged() {
    // A void box around the sphere adds boundary crossings but no draws.
    let bounds = Aabb::new([-20.0; 3], [20.0; 3]).unwrap();
    let shell = Region::difference(
        "Shell",
        vec![
            RegionNode::from(Region::cuboid("Box", &bounds).unwrap()),
            RegionNode::from(Surface::sphere([0.0; 3], RADIUS).unwrap()),
        ],
    )
    .unwrap();
    let wrapped =
        Model::load(vec![ball(), shell], vec![material()], &reader(3.0, 0.5)).unwrap();
    let bare = bare_sphere(3.0, 0.5);

    let s = settings(TransportMode::ImplicitCapture, 200);
    let a = run_outcomes(&bare, &source(), &s).unwrap();
    let b = run_outcomes(&wrapped, &source(), &s).unwrap();
    assert_eq!(a, b);
}

#[test]
fn source_outside_geometry_escapes_immediately() {
    let model = bare_sphere(5.0, 1.0);
    let far = PointSource::new([0.0, 0.0, 50.0], 2.0e6).unwrap();
    let outcomes = run_outcomes(&model, &far, &settings(TransportMode::Analog, 100)).unwrap();
    for o in &outcomes {
        assert!(o.is_escaped());
        assert_eq!(o.final_energy, 2.0e6);
        assert_eq!(o.final_weight, 1.0);
        assert_eq!(o.collisions, 0);
    }
}

#[test]
fn zero_particles_rejected() {
    let model = bare_sphere(1.0, 1.0);
    assert!(run_batch(&model, &source(), &settings(TransportMode::Analog, 0)).is_err());
}

#[test]
fn zero_boundary_bump_rejected() {
    let model = bare_sphere(5.0, 0.0);
    let mut s = settings(TransportMode::ImplicitCapture, 20);
    s.boundary_bump_cm = 0.0;
    assert!(run_batch(&model, &source(), &s).is_err());
}
