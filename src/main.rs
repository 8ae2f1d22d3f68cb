mod cli;
mod report;

use std::error::Error;
use std::io::Write;

use clap::Parser;
use cli::{Cli, Command};
use log::LevelFilter;
use oarstrain::{beam_height_sweep, force_sweep, OarConfiguration};
use report::{render_force_sweep, render_height_sweep, render_report, render_theory1};
use serde::Serialize;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    // Resolve the parameter set once. Sweeps derive their own copies from it, so
    // nothing below mutates this value.
    let config = cli.parameters.resolve()?;
    for warning in config.check() {
        log::warn!("{warning}; evaluating anyway");
    }

    match cli.command {
        Command::Report => {
            if cli.json {
                print_json(&ReportJson::new(&config))?;
            } else {
                print!("{}", render_report(&config));
            }
        }
        Command::SweepForce { forces } => {
            let points = force_sweep(&config, &forces);
            if cli.json {
                print_json(&points)?;
            } else {
                print!("{}", render_force_sweep(&points));
            }
        }
        Command::SweepHeight { heights } => {
            let points = beam_height_sweep(&config, &heights);
            if cli.json {
                print_json(&points)?;
            } else {
                print!("{}", render_height_sweep(&points));
            }
        }
        Command::Theory1 => {
            let strain = oarstrain::calc_theory1_strain(
                config.force,
                config.handle_position,
                config.beam_root,
                config.beam_length,
                config.shaft_outer_diameter,
                config.shaft_inner_diameter,
                config.beam_height,
                config.beam_eccentricity,
                config.shaft_modulus,
            );
            if cli.json {
                print_json(&strain)?;
            } else {
                print!("{}", render_theory1(&strain));
            }
        }
    }

    Ok(())
}

/// Initialise `env_logger` from `--log-level`, then `RUST_LOG`, then `warn`.
fn init_logging(level: Option<&str>) {
    let level = level
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|value| value.parse().ok())
        })
        .unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
    log::debug!("logger initialised at {level}");
}

/// Pretty-print `value` as JSON on standard output.
fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Everything the text report shows, in machine-readable form.
#[derive(Serialize)]
struct ReportJson {
    /// Parameters the report was computed from.
    inputs: OarConfiguration,
    /// Section properties of shaft and beam.
    section: oarstrain::SectionProperties,
    /// Gauge geometry, curvature and strains.
    strain: oarstrain::StrainResult,
    /// Bridge output.
    bridge: oarstrain::BridgeOutput,
}

impl ReportJson {
    /// Evaluate every part of the report for `config`.
    fn new(config: &OarConfiguration) -> Self {
        Self {
            inputs: *config,
            section: oarstrain::SectionProperties::from_config(config),
            strain: oarstrain::strains(config),
            bridge: oarstrain::BridgeOutput::from_config(config),
        }
    }
}
