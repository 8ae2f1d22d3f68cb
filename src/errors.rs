//! Error and warning types produced while loading or checking an oar configuration.
//!
//! The strain formulas themselves never fail. Degenerate geometry propagates as
//! zero, negative or non-finite numbers, so the types here only cover reading a
//! configuration and flagging inputs that are physically meaningless.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when an [`OarConfiguration`](crate::OarConfiguration) cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("could not read configuration file {path:?}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the configuration text is not valid JSON for the parameter set.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Plausibility finding for a configuration that still evaluates.
///
/// None of these stop a calculation. They exist so callers can tell an operator
/// why a result looks non-physical.
///
/// # Examples
///
/// ```
/// use oarstrain::{GeometryWarning, OarConfiguration};
///
/// let config = OarConfiguration {
///     shaft_inner_diameter: 40.0,
///     ..OarConfiguration::default()
/// };
/// assert!(config
///     .check()
///     .contains(&GeometryWarning::HollowSectionInverted { outer: 38.0, inner: 40.0 }));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryWarning {
    /// The bore is at least as large as the shaft, so the second moment is zero or negative.
    #[error("shaft inner diameter {inner} mm is not smaller than outer diameter {outer} mm")]
    HollowSectionInverted {
        /// Shaft outer diameter in millimetres.
        outer: f64,
        /// Shaft inner diameter in millimetres.
        inner: f64,
    },
    /// A shaft diameter is zero or negative.
    #[error("shaft diameter `{field}` must be positive (received {value} mm)")]
    NonPositiveDiameter {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected diameter in millimetres.
        value: f64,
    },
    /// A Young's modulus is zero or negative.
    #[error("modulus `{field}` must be positive (received {value} MPa)")]
    NonPositiveModulus {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected modulus in megapascals.
        value: f64,
    },
    /// The instrumented beam has no length.
    #[error("beam length must be positive (received {0} mm)")]
    NonPositiveBeamLength(f64),
    /// The handle sits at or before the gauge, so curvature changes sign or vanishes.
    #[error("handle position {handle} mm does not lie beyond the gauge at {gauge} mm")]
    LoadInsideGauge {
        /// Handle position in millimetres.
        handle: f64,
        /// Gauge position in millimetres.
        gauge: f64,
    },
}
