//! Clamped-cantilever strain model for the instrumented shaft.
//!
//! The shaft is treated as an Euler-Bernoulli cantilever loaded at the handle.
//! Curvature at the gauge is the bending moment over the shaft flexural rigidity,
//! and surface strain is curvature times the radial offset of each gauge
//! (see <https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory>).

use serde::{Deserialize, Serialize};

use crate::config::OarConfiguration;
use crate::geometry::GaugeGeometry;
use crate::section::shaft_second_moment;

/// Factor converting strain to microstrain.
pub const MICROSTRAIN: f64 = 1.0e6;

/// Bending curvature in 1/mm at axial position `x` for a load applied at `load_position`.
///
/// Positive when the load lies beyond `x`. A load inside `x` gives a sign-reversed
/// curvature and zero rigidity gives a non-finite value; neither is intercepted.
///
/// # Examples
/// ```
/// use oarstrain::curvature;
///
/// assert_eq!(curvature(100.0, 300.0, 100.0, 200.0, 1.0), 100.0);
/// assert!(curvature(100.0, 300.0, 100.0, 0.0, 1.0).is_infinite());
/// ```
#[must_use]
pub fn curvature(force: f64, load_position: f64, x: f64, modulus: f64, inertia: f64) -> f64 {
    force * (load_position - x) / (modulus * inertia)
}

/// Gauge geometry, curvature and surface strains for one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrainResult {
    /// Axial gauge position in mm.
    pub x_gauge: f64,
    /// Radial offset of the beam neutral axis in mm.
    pub y_b: f64,
    /// Radial offset of the top gauge surface in mm.
    pub y_top: f64,
    /// Radial offset of the bottom gauge surface in mm.
    pub y_bottom: f64,
    /// Shaft curvature at the gauge in 1/mm.
    pub curvature: f64,
    /// Strain at the top gauge.
    pub eps_top: f64,
    /// Strain at the bottom gauge.
    pub eps_bottom: f64,
    /// Differential strain `eps_top - eps_bottom`.
    pub delta_eps: f64,
    /// Top strain in microstrain.
    pub eps_top_ustrain: f64,
    /// Bottom strain in microstrain.
    pub eps_bottom_ustrain: f64,
    /// Differential strain in microstrain.
    pub delta_eps_ustrain: f64,
}

/// Evaluate the strain model for `config`.
///
/// # Examples
/// ```
/// use oarstrain::{strains, OarConfiguration};
///
/// let result = strains(&OarConfiguration::default());
/// assert_eq!(result.x_gauge, 250.0);
/// assert!(result.eps_top > result.eps_bottom);
/// ```
#[must_use]
pub fn strains(config: &OarConfiguration) -> StrainResult {
    let GaugeGeometry { x_gauge, radii } = GaugeGeometry::from_config(config);
    let inertia = shaft_second_moment(config.shaft_outer_diameter, config.shaft_inner_diameter);
    let kappa = curvature(
        config.force,
        config.handle_position,
        x_gauge,
        config.shaft_modulus,
        inertia,
    );

    let eps_top = kappa * radii.y_top;
    let eps_bottom = kappa * radii.y_bottom;
    let delta_eps = eps_top - eps_bottom;

    log::debug!(
        "gauge at {x_gauge} mm: kappa = {kappa:e} 1/mm, eps_top = {eps_top:e}, eps_bottom = {eps_bottom:e}"
    );
    if !kappa.is_finite() {
        log::warn!(
            "non-finite curvature: shaft rigidity E_s*I_s = {}",
            config.shaft_modulus * inertia
        );
    }

    StrainResult {
        x_gauge,
        y_b: radii.y_b,
        y_top: radii.y_top,
        y_bottom: radii.y_bottom,
        curvature: kappa,
        eps_top,
        eps_bottom,
        delta_eps,
        eps_top_ustrain: eps_top * MICROSTRAIN,
        eps_bottom_ustrain: eps_bottom * MICROSTRAIN,
        delta_eps_ustrain: delta_eps * MICROSTRAIN,
    }
}

/// Strain outputs of [`calc_theory1_strain`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theory1Strain {
    /// Strain at the top gauge.
    pub eps_top: f64,
    /// Strain at the bottom gauge.
    pub eps_bottom: f64,
    /// Differential strain.
    pub delta_eps: f64,
    /// Top strain in microstrain.
    pub eps_top_ustrain: f64,
    /// Bottom strain in microstrain.
    pub eps_bottom_ustrain: f64,
    /// Differential strain in microstrain.
    pub delta_eps_ustrain: f64,
}

impl From<StrainResult> for Theory1Strain {
    fn from(result: StrainResult) -> Self {
        Self {
            eps_top: result.eps_top,
            eps_bottom: result.eps_bottom,
            delta_eps: result.delta_eps,
            eps_top_ustrain: result.eps_top_ustrain,
            eps_bottom_ustrain: result.eps_bottom_ustrain,
            delta_eps_ustrain: result.delta_eps_ustrain,
        }
    }
}

/// Standalone strain calculation with every parameter passed explicitly.
///
/// Parameters follow [`OarConfiguration`] units. Beam width, beam modulus and the
/// bridge settings do not affect strain, so they keep their default values.
///
/// # Examples
/// ```
/// use oarstrain::calc_theory1_strain;
///
/// let strain = calc_theory1_strain(1962.0, 900.0, 200.0, 100.0, 38.0, 32.0, 2.0, 20.0, 140e3);
/// assert!((strain.delta_eps_ustrain - 358.055).abs() < 1e-3);
/// ```
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn calc_theory1_strain(
    force: f64,
    handle_position: f64,
    beam_root: f64,
    beam_length: f64,
    shaft_outer_diameter: f64,
    shaft_inner_diameter: f64,
    beam_height: f64,
    beam_eccentricity: f64,
    shaft_modulus: f64,
) -> Theory1Strain {
    let config = OarConfiguration {
        force,
        handle_position,
        beam_root,
        beam_length,
        shaft_outer_diameter,
        shaft_inner_diameter,
        beam_height,
        beam_eccentricity,
        shaft_modulus,
        ..OarConfiguration::default()
    };
    strains(&config).into()
}
