// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Sphere Benchmark Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bare-sphere leakage benchmark.
//!
//! ```bash
//! cargo run --release --bin sphere-benchmark -- [config.json | data_path]
//! ```
//!
//! A `.json` argument is read as a `BenchmarkConfig`; any other argument is
//! taken as the library root for the default Pb-208 sphere (`./endfb` when
//! omitted).

use neutron_core::benchmark::BenchmarkConfig;
use neutron_types::error::NeutronResult;
use std::process::ExitCode;
use std::time::Instant;

fn load_config() -> NeutronResult<BenchmarkConfig> {
    match std::env::args().nth(1) {
        Some(arg) if arg.ends_with(".json") => BenchmarkConfig::from_file(&arg),
        Some(arg) => BenchmarkConfig::lead_sphere(&arg),
        None => BenchmarkConfig::lead_sphere("./endfb"),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Sphere benchmark: {} (R={} cm), {:.3e} eV source, {} histories, {:?}",
        config.material.element,
        config.radius_cm,
        config.source_energy_ev,
        config.settings.particles,
        config.settings.mode
    );

    let start = Instant::now();
    let tally = match config.run() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("run failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "=".repeat(40));
    println!("Total Particles:   {}", tally.histories);
    println!("Leakage Fraction:  {:.5}", tally.leakage_fraction());
    println!("Avg Escape Energy: {:.2} eV", tally.average_escape_energy());
    println!("Escaped / Killed:  {} / {}", tally.escaped, tally.killed);
    println!("Collisions:        {}", tally.collisions);
    println!("Wall time:         {:.2?}", start.elapsed());
    println!("{}", "=".repeat(40));
    ExitCode::SUCCESS
}
