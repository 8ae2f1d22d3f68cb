//! Parametric studies over a base configuration.
//!
//! Every step evaluates its own copy of the base configuration, so sweeps can be
//! run from several threads against one shared base.

use serde::{Deserialize, Serialize};

use crate::bridge::BridgeOutput;
use crate::config::OarConfiguration;
use crate::strain::{strains, StrainResult};

/// Handle forces in newtons sampled by [`force_sweep`].
pub const FORCE_SAMPLES_N: [f64; 6] = [0.0, 500.0, 1000.0, 1500.0, 1962.0, 2500.0];

/// Beam heights in millimetres sampled by [`beam_height_sweep`].
pub const BEAM_HEIGHT_SAMPLES_MM: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

/// One evaluated step of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Value of the varied parameter.
    pub value: f64,
    /// Strain model output for this step.
    pub strain: StrainResult,
    /// Bridge output for this step.
    pub bridge: BridgeOutput,
}

/// Evaluate `base` once per entry of `values`, applying each with `apply`.
///
/// # Examples
/// ```
/// use oarstrain::{sweep, OarConfiguration};
///
/// let points = sweep(&OarConfiguration::default(), &[0.0, 1.0], |config, e_b| {
///     OarConfiguration { beam_eccentricity: e_b, ..config }
/// });
/// assert_eq!(points.len(), 2);
/// assert!(points[0].strain.eps_top < points[1].strain.eps_top);
/// ```
pub fn sweep<F>(base: &OarConfiguration, values: &[f64], apply: F) -> Vec<SweepPoint>
where
    F: Fn(OarConfiguration, f64) -> OarConfiguration,
{
    values
        .iter()
        .map(|&value| {
            let config = apply(*base, value);
            let strain = strains(&config);
            let bridge = BridgeOutput::from_config(&config);
            SweepPoint {
                value,
                strain,
                bridge,
            }
        })
        .collect()
}

/// Vary the handle force over `forces`.
#[must_use]
pub fn force_sweep(base: &OarConfiguration, forces: &[f64]) -> Vec<SweepPoint> {
    sweep(base, forces, OarConfiguration::with_force)
}

/// Vary the beam height over `heights`.
#[must_use]
pub fn beam_height_sweep(base: &OarConfiguration, heights: &[f64]) -> Vec<SweepPoint> {
    sweep(base, heights, OarConfiguration::with_beam_height)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn force_sweep_is_linear_in_force() {
        let base = OarConfiguration::default();
        let points = force_sweep(&base, &FORCE_SAMPLES_N);
        assert_eq!(points.len(), FORCE_SAMPLES_N.len());

        let reference = strains(&base.with_force(1.0));
        for point in &points {
            assert_relative_eq!(
                point.strain.eps_top,
                point.value * reference.eps_top,
                max_relative = 1.0e-12
            );
            assert_relative_eq!(
                point.strain.delta_eps,
                point.value * reference.delta_eps,
                max_relative = 1.0e-12
            );
        }
    }

    #[test]
    fn zero_force_step_is_exactly_zero() {
        let points = force_sweep(&OarConfiguration::default(), &FORCE_SAMPLES_N);
        let unloaded = points[0];
        assert_eq!(unloaded.value, 0.0);
        assert_eq!(unloaded.strain.eps_top, 0.0);
        assert_eq!(unloaded.strain.delta_eps, 0.0);
        assert_eq!(unloaded.bridge.ratio, 0.0);
    }

    #[test]
    fn height_sweep_is_linear_in_height() {
        let base = OarConfiguration::default();
        let points = beam_height_sweep(&base, &BEAM_HEIGHT_SAMPLES_MM);
        let curvature = strains(&base).curvature;
        for point in &points {
            assert_relative_eq!(point.strain.curvature, curvature);
            assert_relative_eq!(
                point.strain.delta_eps,
                curvature * point.value,
                max_relative = 1.0e-12
            );
        }
    }

    #[test]
    fn sweep_does_not_alter_base() {
        let base = OarConfiguration::default();
        let _ = beam_height_sweep(&base, &BEAM_HEIGHT_SAMPLES_MM);
        assert_eq!(base, OarConfiguration::default());
    }
}
