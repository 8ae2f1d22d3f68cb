#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod section;
pub mod strain;
pub mod sweep;

pub use bridge::{bridge_output, bridge_ratio, BridgeOutput};
pub use config::OarConfiguration;
pub use errors::{ConfigError, GeometryWarning};
pub use geometry::{gauge_position, gauge_radii, GaugeGeometry, GaugeRadii};
pub use section::{beam_second_moment, shaft_second_moment, SectionProperties};
pub use strain::{calc_theory1_strain, curvature, strains, StrainResult, Theory1Strain, MICROSTRAIN};
pub use sweep::{
    beam_height_sweep, force_sweep, sweep, SweepPoint, BEAM_HEIGHT_SAMPLES_MM, FORCE_SAMPLES_N,
};
