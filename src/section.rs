//! Cross-section properties of the shaft and the instrumented beam.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::OarConfiguration;

/// Second moment of area of the hollow circular shaft in mm⁴.
///
/// Returns zero when the diameters match and a negative value when the bore is
/// larger than the shaft. Callers are responsible for sensible diameters.
///
/// # Examples
/// ```
/// use oarstrain::shaft_second_moment;
///
/// assert_eq!(shaft_second_moment(38.0, 38.0), 0.0);
/// assert!(shaft_second_moment(38.0, 32.0) > 0.0);
/// ```
#[must_use]
pub fn shaft_second_moment(outer_diameter: f64, inner_diameter: f64) -> f64 {
    (PI / 64.0) * (outer_diameter.powi(4) - inner_diameter.powi(4))
}

/// Second moment of area of the rectangular beam in mm⁴, bending about its width.
#[must_use]
pub fn beam_second_moment(width: f64, height: f64) -> f64 {
    width * height.powi(3) / 12.0
}

/// Section properties derived from a configuration.
///
/// Only the shaft rigidity enters the strain model. The beam values are kept for
/// reporting: the eccentric beam is not modelled as a load path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Shaft second moment of area in mm⁴.
    pub shaft_inertia: f64,
    /// Beam second moment of area in mm⁴.
    pub beam_inertia: f64,
    /// Shaft flexural rigidity `E_s·I_s` in N·mm².
    pub shaft_rigidity: f64,
    /// Beam flexural rigidity `E_b·I_b` in N·mm².
    pub beam_rigidity: f64,
}

impl SectionProperties {
    /// Compute the section properties of `config`.
    #[must_use]
    pub fn from_config(config: &OarConfiguration) -> Self {
        let shaft_inertia =
            shaft_second_moment(config.shaft_outer_diameter, config.shaft_inner_diameter);
        let beam_inertia = beam_second_moment(config.beam_width, config.beam_height);
        Self {
            shaft_inertia,
            beam_inertia,
            shaft_rigidity: config.shaft_modulus * shaft_inertia,
            beam_rigidity: config.beam_modulus * beam_inertia,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn concept2_shaft_inertia() {
        assert_relative_eq!(shaft_second_moment(38.0, 32.0), 50_882.02, epsilon = 0.01);
    }

    #[test]
    fn solid_shaft_matches_circle_formula() {
        assert_relative_eq!(shaft_second_moment(10.0, 0.0), PI * 10_000.0 / 64.0);
    }

    #[test]
    fn shaft_inertia_vanishes_only_for_equal_diameters() {
        assert_eq!(shaft_second_moment(32.0, 32.0), 0.0);
        assert!(shaft_second_moment(32.0, 31.9) > 0.0);
        assert!(shaft_second_moment(32.0, 32.1) < 0.0);
    }

    #[test]
    fn shaft_inertia_grows_with_outer_diameter() {
        let mut previous = shaft_second_moment(32.0, 32.0);
        for outer in [33.0, 35.0, 38.0, 42.0, 50.0] {
            let current = shaft_second_moment(outer, 32.0);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn beam_inertia_is_rectangular() {
        assert_relative_eq!(beam_second_moment(12.0, 2.0), 8.0);
    }

    #[test]
    fn properties_follow_configuration() {
        let config = OarConfiguration::default();
        let properties = SectionProperties::from_config(&config);
        assert_relative_eq!(
            properties.shaft_rigidity,
            config.shaft_modulus * shaft_second_moment(38.0, 32.0)
        );
        assert_relative_eq!(properties.beam_rigidity, 69_000.0 * 8.0);
    }
}
