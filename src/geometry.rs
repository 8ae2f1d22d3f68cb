//! Gauge placement on the instrumented beam.
//!
//! Positions are measured in millimetres. Axial positions run along the oar from
//! the clamp, radial offsets are measured from the shaft centreline.

use serde::{Deserialize, Serialize};

use crate::config::OarConfiguration;

/// Radial offsets of the beam neutral axis and of both gauge surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeRadii {
    /// Distance from the shaft centreline to the beam neutral axis.
    pub y_b: f64,
    /// Distance from the shaft centreline to the top gauge surface.
    pub y_top: f64,
    /// Distance from the shaft centreline to the bottom gauge surface.
    pub y_bottom: f64,
}

/// Axial and radial placement of the gauges for one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    /// Axial position of the gauges.
    pub x_gauge: f64,
    /// Radial offsets of the gauge surfaces.
    pub radii: GaugeRadii,
}

impl GaugeGeometry {
    /// Resolve the gauge placement for `config`.
    ///
    /// # Examples
    /// ```
    /// use oarstrain::{GaugeGeometry, OarConfiguration};
    ///
    /// let geometry = GaugeGeometry::from_config(&OarConfiguration::default());
    /// assert_eq!(geometry.x_gauge, 250.0);
    /// assert_eq!(geometry.radii.y_top, 40.0);
    /// ```
    #[must_use]
    pub fn from_config(config: &OarConfiguration) -> Self {
        Self {
            x_gauge: gauge_position(config.beam_root, config.beam_length),
            radii: gauge_radii(
                config.shaft_outer_diameter,
                config.beam_eccentricity,
                config.beam_height,
            ),
        }
    }
}

/// Axial gauge position at the midpoint of the instrumented beam span.
///
/// # Examples
/// ```
/// use oarstrain::gauge_position;
///
/// assert_eq!(gauge_position(200.0, 100.0), 250.0);
/// ```
#[must_use]
pub fn gauge_position(beam_root: f64, beam_length: f64) -> f64 {
    beam_root + beam_length / 2.0
}

/// Radial offsets of the beam neutral axis and its top and bottom surfaces.
///
/// The beam sits `beam_eccentricity` above the shaft outer surface. Negative
/// eccentricity or height simply moves the offsets to the other side.
///
/// # Examples
/// ```
/// use oarstrain::gauge_radii;
///
/// let radii = gauge_radii(38.0, 20.0, 2.0);
/// assert_eq!((radii.y_b, radii.y_top, radii.y_bottom), (39.0, 40.0, 38.0));
/// ```
#[must_use]
pub fn gauge_radii(shaft_outer_diameter: f64, beam_eccentricity: f64, beam_height: f64) -> GaugeRadii {
    let y_b = shaft_outer_diameter / 2.0 + beam_eccentricity;
    GaugeRadii {
        y_b,
        y_top: y_b + beam_height / 2.0,
        y_bottom: y_b - beam_height / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn gauge_sits_at_beam_midspan() {
        assert_relative_eq!(gauge_position(200.0, 100.0), 250.0);
        assert_relative_eq!(gauge_position(-10.0, 30.0), 5.0);
    }

    #[test]
    fn surfaces_straddle_neutral_axis_by_half_height() {
        let radii = gauge_radii(38.0, 20.0, 2.0);
        assert_relative_eq!(radii.y_b, 39.0);
        assert_relative_eq!(radii.y_top - radii.y_bottom, 2.0);
        assert_relative_eq!((radii.y_top + radii.y_bottom) / 2.0, radii.y_b);
    }

    #[test]
    fn negative_height_swaps_surfaces() {
        let radii = gauge_radii(38.0, 20.0, -2.0);
        assert!(radii.y_top < radii.y_bottom);
    }

    #[test]
    fn configuration_resolves_both_positions() {
        let config = OarConfiguration {
            beam_root: 150.0,
            beam_eccentricity: 10.0,
            ..OarConfiguration::default()
        };
        let geometry = GaugeGeometry::from_config(&config);
        assert_relative_eq!(geometry.x_gauge, 200.0);
        assert_eq!(geometry.radii, gauge_radii(38.0, 10.0, 2.0));
    }
}
