use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oarstrain::{ConfigError, OarConfiguration, BEAM_HEIGHT_SAMPLES_MM, FORCE_SAMPLES_N};

/// Strain and bridge output of an instrumented rowing oar (clamped cantilever model)
#[derive(Debug, Parser)]
#[command(name = "oarstrain")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); falls back to RUST_LOG
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub parameters: ParameterArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full report of inputs, section properties, strains and bridge output
    Report,
    /// Strain and bridge output against handle force
    SweepForce {
        /// Forces to sample in N
        #[arg(long, value_delimiter = ',', default_values_t = FORCE_SAMPLES_N)]
        forces: Vec<f64>,
    },
    /// Strain and bridge output against beam height
    SweepHeight {
        /// Beam heights to sample in mm
        #[arg(long, value_delimiter = ',', default_values_t = BEAM_HEIGHT_SAMPLES_MM)]
        heights: Vec<f64>,
    },
    /// Top, bottom and differential strain only
    Theory1,
}

/// Parameter sources: an optional JSON file, then per-field overrides.
#[derive(Debug, Args)]
pub struct ParameterArgs {
    /// JSON configuration file; missing fields use the Concept2 defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Applied handle force F [N]
    #[arg(long, global = true)]
    pub force: Option<f64>,
    /// Handle position x_F [mm]
    #[arg(long, global = true)]
    pub handle_position: Option<f64>,
    /// Beam root position x_b [mm]
    #[arg(long, global = true)]
    pub beam_root: Option<f64>,
    /// Beam length L_b [mm]
    #[arg(long, global = true)]
    pub beam_length: Option<f64>,
    /// Shaft outer diameter D_o_s [mm]
    #[arg(long, global = true)]
    pub shaft_outer_diameter: Option<f64>,
    /// Shaft inner diameter D_i_s [mm]
    #[arg(long, global = true)]
    pub shaft_inner_diameter: Option<f64>,
    /// Beam height h_b [mm]
    #[arg(long, global = true)]
    pub beam_height: Option<f64>,
    /// Beam width b [mm]
    #[arg(long, global = true)]
    pub beam_width: Option<f64>,
    /// Beam eccentricity e_b from the shaft surface [mm]
    #[arg(long, global = true)]
    pub beam_eccentricity: Option<f64>,
    /// Shaft Young's modulus E_s [MPa]
    #[arg(long, global = true)]
    pub shaft_modulus: Option<f64>,
    /// Beam Young's modulus E_b [MPa]
    #[arg(long, global = true)]
    pub beam_modulus: Option<f64>,
    /// Gauge factor GF
    #[arg(long, global = true)]
    pub gauge_factor: Option<f64>,
    /// Bridge excitation voltage V_ex [V]
    #[arg(long, global = true)]
    pub excitation_voltage: Option<f64>,
}

impl ParameterArgs {
    /// Build the configuration: defaults, then the file, then command-line overrides.
    pub fn resolve(&self) -> Result<OarConfiguration, ConfigError> {
        let base = match &self.config {
            Some(path) => OarConfiguration::from_json_file(path)?,
            None => OarConfiguration::default(),
        };
        Ok(self.apply(base))
    }

    /// Apply the explicit overrides to `base`.
    fn apply(&self, base: OarConfiguration) -> OarConfiguration {
        OarConfiguration {
            force: self.force.unwrap_or(base.force),
            handle_position: self.handle_position.unwrap_or(base.handle_position),
            beam_root: self.beam_root.unwrap_or(base.beam_root),
            beam_length: self.beam_length.unwrap_or(base.beam_length),
            shaft_outer_diameter: self
                .shaft_outer_diameter
                .unwrap_or(base.shaft_outer_diameter),
            shaft_inner_diameter: self
                .shaft_inner_diameter
                .unwrap_or(base.shaft_inner_diameter),
            beam_height: self.beam_height.unwrap_or(base.beam_height),
            beam_width: self.beam_width.unwrap_or(base.beam_width),
            beam_eccentricity: self.beam_eccentricity.unwrap_or(base.beam_eccentricity),
            shaft_modulus: self.shaft_modulus.unwrap_or(base.shaft_modulus),
            beam_modulus: self.beam_modulus.unwrap_or(base.beam_modulus),
            gauge_factor: self.gauge_factor.unwrap_or(base.gauge_factor),
            excitation_voltage: self.excitation_voltage.unwrap_or(base.excitation_voltage),
        }
    }
}
