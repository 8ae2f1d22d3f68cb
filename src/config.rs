//! Parameter set describing one instrumented oar and its load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GeometryWarning};
use crate::geometry::gauge_position;

/// Geometry, material, gauge and load parameters for one evaluation.
///
/// Lengths are in millimetres, moduli in megapascals and the force in newtons.
/// The value is plain data: sweeps derive a new configuration per step with the
/// `with_*` helpers instead of mutating a shared one.
///
/// Deserialising fills any missing field from [`OarConfiguration::concept2`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OarConfiguration {
    /// Applied handle force `F` in newtons.
    pub force: f64,
    /// Handle position `x_F` along the oar axis.
    pub handle_position: f64,
    /// Beam root position `x_b`.
    pub beam_root: f64,
    /// Beam length `L_b`.
    pub beam_length: f64,
    /// Shaft outer diameter `D_o_s`.
    pub shaft_outer_diameter: f64,
    /// Shaft inner diameter `D_i_s`.
    pub shaft_inner_diameter: f64,
    /// Beam height `h_b` in the bending direction.
    pub beam_height: f64,
    /// Beam width `b`.
    pub beam_width: f64,
    /// Beam eccentricity `e_b` from the shaft outer surface.
    pub beam_eccentricity: f64,
    /// Shaft Young's modulus `E_s`.
    pub shaft_modulus: f64,
    /// Beam Young's modulus `E_b`. Reported only.
    pub beam_modulus: f64,
    /// Strain gauge factor `GF`.
    pub gauge_factor: f64,
    /// Bridge excitation voltage `V_ex` in volts.
    pub excitation_voltage: f64,
}

impl OarConfiguration {
    /// Concept2 sculling oar loaded with a 200 kg peak handle force.
    ///
    /// # Examples
    /// ```
    /// use oarstrain::OarConfiguration;
    ///
    /// let config = OarConfiguration::concept2();
    /// assert_eq!(config.force, 1962.0);
    /// assert_eq!(config, OarConfiguration::default());
    /// ```
    #[must_use]
    pub const fn concept2() -> Self {
        Self {
            force: 1962.0,
            handle_position: 900.0,
            beam_root: 200.0,
            beam_length: 100.0,
            shaft_outer_diameter: 38.0,
            shaft_inner_diameter: 32.0,
            beam_height: 2.0,
            beam_width: 12.0,
            beam_eccentricity: 20.0,
            shaft_modulus: 140.0e3,
            beam_modulus: 69.0e3,
            gauge_factor: 2.15,
            excitation_voltage: 3.3,
        }
    }

    /// Copy of this configuration with a different handle force.
    #[must_use]
    pub const fn with_force(self, force: f64) -> Self {
        Self { force, ..self }
    }

    /// Copy of this configuration with a different beam height.
    #[must_use]
    pub const fn with_beam_height(self, beam_height: f64) -> Self {
        Self {
            beam_height,
            ..self
        }
    }

    /// Copy of this configuration with a different gauge factor.
    #[must_use]
    pub const fn with_gauge_factor(self, gauge_factor: f64) -> Self {
        Self {
            gauge_factor,
            ..self
        }
    }

    /// Parse a configuration from JSON, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `text` is not a JSON object of numbers.
    ///
    /// # Examples
    /// ```
    /// use oarstrain::OarConfiguration;
    ///
    /// let config = OarConfiguration::from_json_str(r#"{ "force": 500.0 }"#).unwrap();
    /// assert_eq!(config.force, 500.0);
    /// assert_eq!(config.beam_height, 2.0);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded oar configuration from {}", path.display());
        Ok(config)
    }

    /// List the inputs that make the model physically meaningless.
    ///
    /// The configuration still evaluates; these findings only explain odd results.
    #[must_use]
    pub fn check(&self) -> Vec<GeometryWarning> {
        let mut warnings = Vec::new();

        for (field, value) in [
            ("shaft_outer_diameter", self.shaft_outer_diameter),
            ("shaft_inner_diameter", self.shaft_inner_diameter),
        ] {
            if value <= 0.0 {
                warnings.push(GeometryWarning::NonPositiveDiameter { field, value });
            }
        }
        if self.shaft_inner_diameter >= self.shaft_outer_diameter {
            warnings.push(GeometryWarning::HollowSectionInverted {
                outer: self.shaft_outer_diameter,
                inner: self.shaft_inner_diameter,
            });
        }
        for (field, value) in [
            ("shaft_modulus", self.shaft_modulus),
            ("beam_modulus", self.beam_modulus),
        ] {
            if value <= 0.0 {
                warnings.push(GeometryWarning::NonPositiveModulus { field, value });
            }
        }
        if self.beam_length <= 0.0 {
            warnings.push(GeometryWarning::NonPositiveBeamLength(self.beam_length));
        }
        let gauge = gauge_position(self.beam_root, self.beam_length);
        if self.handle_position <= gauge {
            warnings.push(GeometryWarning::LoadInsideGauge {
                handle: self.handle_position,
                gauge,
            });
        }

        warnings
    }
}

impl Default for OarConfiguration {
    fn default() -> Self {
        Self::concept2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_plausible() {
        assert!(OarConfiguration::default().check().is_empty());
    }

    #[test]
    fn with_helpers_leave_base_untouched() {
        let base = OarConfiguration::default();
        let heavier = base.with_force(2500.0);
        let thicker = base.with_beam_height(3.0);
        assert_eq!(base.force, 1962.0);
        assert_eq!(heavier.force, 2500.0);
        assert_eq!(thicker.beam_height, 3.0);
        assert_eq!(thicker.force, base.force);
        assert_eq!(base.with_gauge_factor(4.3).gauge_factor, 4.3);
    }

    #[test]
    fn json_overrides_subset_of_fields() {
        let config = OarConfiguration::from_json_str(
            r#"{ "beam_height": 3.0, "shaft_modulus": 70000.0 }"#,
        )
        .expect("valid json");
        assert_eq!(config.beam_height, 3.0);
        assert_eq!(config.shaft_modulus, 70_000.0);
        assert_eq!(config.handle_position, 900.0);
    }

    #[test]
    fn json_round_trips_through_serde() {
        let config = OarConfiguration::default().with_force(1234.5);
        let text = serde_json::to_string(&config).expect("serialises");
        let parsed = OarConfiguration::from_json_str(&text).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let error = OarConfiguration::from_json_str(r#"{ "force": "heavy" }"#)
            .expect_err("string force rejected");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = OarConfiguration::from_json_file("does/not/exist.json")
            .expect_err("missing file rejected");
        match error {
            ConfigError::Io { path, .. } => assert!(path.ends_with("exist.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_flags_degenerate_inputs() {
        let config = OarConfiguration {
            shaft_inner_diameter: 38.0,
            shaft_modulus: 0.0,
            beam_length: 0.0,
            handle_position: 100.0,
            ..OarConfiguration::default()
        };
        let warnings = config.check();
        assert!(warnings.contains(&GeometryWarning::HollowSectionInverted {
            outer: 38.0,
            inner: 38.0
        }));
        assert!(warnings.contains(&GeometryWarning::NonPositiveModulus {
            field: "shaft_modulus",
            value: 0.0
        }));
        assert!(warnings.contains(&GeometryWarning::NonPositiveBeamLength(0.0)));
        assert!(warnings.contains(&GeometryWarning::LoadInsideGauge {
            handle: 100.0,
            gauge: 200.0
        }));
        assert_eq!(warnings.len(), 4);
    }
}
