//! Half-bridge output for the top/bottom gauge pair.
//!
//! Two active gauges on opposite surfaces see equal and opposite bending strain
//! about the beam neutral axis, so the bridge responds to their difference
//! (see <https://en.wikipedia.org/wiki/Wheatstone_bridge>).

use serde::{Deserialize, Serialize};

use crate::config::OarConfiguration;
use crate::strain::strains;

/// Normalised half-bridge output `V_out / V_ex` for a differential strain.
///
/// # Examples
/// ```
/// use oarstrain::bridge_ratio;
///
/// assert_eq!(bridge_ratio(2.0, 1.0e-3), 1.0e-3);
/// ```
#[must_use]
pub fn bridge_ratio(gauge_factor: f64, delta_eps: f64) -> f64 {
    (gauge_factor / 2.0) * delta_eps
}

/// Normalised bridge output for `config`. Multiply by the excitation for volts.
#[must_use]
pub fn bridge_output(config: &OarConfiguration) -> f64 {
    bridge_ratio(config.gauge_factor, strains(config).delta_eps)
}

/// Bridge output both normalised and scaled by the excitation voltage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgeOutput {
    /// Output over excitation, dimensionless.
    pub ratio: f64,
    /// Output voltage in volts.
    pub volts: f64,
}

impl BridgeOutput {
    /// Evaluate the bridge for `config`.
    #[must_use]
    pub fn from_config(config: &OarConfiguration) -> Self {
        Self::from_ratio(bridge_output(config), config.excitation_voltage)
    }

    /// Scale an already computed ratio by `excitation_voltage`.
    #[must_use]
    pub fn from_ratio(ratio: f64, excitation_voltage: f64) -> Self {
        Self {
            ratio,
            volts: ratio * excitation_voltage,
        }
    }

    /// Normalised output in mV/V.
    #[must_use]
    pub fn millivolts_per_volt(&self) -> f64 {
        self.ratio * 1.0e3
    }

    /// Output voltage in millivolts.
    #[must_use]
    pub fn millivolts(&self) -> f64 {
        self.volts * 1.0e3
    }

    /// Output voltage in microvolts.
    #[must_use]
    pub fn microvolts(&self) -> f64 {
        self.volts * 1.0e6
    }
}
