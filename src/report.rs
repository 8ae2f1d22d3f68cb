use oarstrain::{
    BridgeOutput, OarConfiguration, SectionProperties, StrainResult, SweepPoint, Theory1Strain,
};
use std::fmt::Write;

/// Heavy rule framing the full report.
const BANNER: &str = "============================================================";
/// Light rule separating sweep headings from rows.
const RULE: &str = "------------------------------------------------------------";

/// Render the full text report for one configuration.
///
/// Lengths are printed to 0.1 mm and strains to whole microstrain.
#[must_use]
pub fn render_report(config: &OarConfiguration) -> String {
    let section = SectionProperties::from_config(config);
    let result = oarstrain::strains(config);
    let bridge = BridgeOutput::from_config(config);
    let mut output = String::new();

    writeln!(&mut output, "{BANNER}").expect("writing to string cannot fail");
    writeln!(&mut output, "ROWING OAR STRAIN CALCULATOR - THEORY 1")
        .expect("writing to string cannot fail");
    writeln!(&mut output, "{BANNER}").expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "\nInput Parameters:\n  \
         Applied Force:           F = {:.1} N\n  \
         Handle Position:      x_F = {:.1} mm\n  \
         Beam Root:            x_b = {:.1} mm\n  \
         Beam Length:          L_b = {:.1} mm\n  \
         Shaft OD:           D_o_s = {:.1} mm\n  \
         Shaft ID:           D_i_s = {:.1} mm\n  \
         Beam Height:          h_b = {:.1} mm\n  \
         Beam Eccentricity:    e_b = {:.1} mm\n  \
         Shaft Modulus:        E_s = {:.0} GPa",
        config.force,
        config.handle_position,
        config.beam_root,
        config.beam_length,
        config.shaft_outer_diameter,
        config.shaft_inner_diameter,
        config.beam_height,
        config.beam_eccentricity,
        config.shaft_modulus / 1.0e3,
    )
    .expect("writing to string cannot fail");

    // The beam inertia is informational; only the shaft carries load in this model.
    writeln!(
        &mut output,
        "\nCalculated Properties:\n  \
         Shaft Inertia:        I_s = {:.0} mm^4\n  \
         Beam Inertia:         I_b = {:.2} mm^4",
        section.shaft_inertia, section.beam_inertia
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "\nGauge Geometry:\n  \
         Gauge Position:    x_gauge = {:.1} mm\n  \
         Beam Neutral Axis:    y_b = {:.1} mm\n  \
         Top Surface:        y_top = {:.1} mm\n  \
         Bottom Surface:  y_bottom = {:.1} mm",
        result.x_gauge, result.y_b, result.y_top, result.y_bottom
    )
    .expect("writing to string cannot fail");

    write_strains(&mut output, &result);

    writeln!(
        &mut output,
        "\nBridge Output:\n  \
         Normalized:     V_out/V_ex = {:.3} mV/V\n  \
         Output Voltage:      V_out = {:.3} mV\n                              \
         = {:.0} µV",
        bridge.millivolts_per_volt(),
        bridge.millivolts(),
        bridge.microvolts()
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "{BANNER}").expect("writing to string cannot fail");
    output
}

/// Append the curvature and strain block of the report.
fn write_strains(output: &mut String, result: &StrainResult) {
    // Curvature is computed per millimetre but engineers read it per metre.
    writeln!(
        output,
        "\nMechanical Strains:\n  \
         Curvature:          kappa = {:.3} m^-1\n  \
         Top Strain:       eps_top = {:.0} µε\n  \
         Bottom Strain: eps_bottom = {:.0} µε\n  \
         Differential:   delta_eps = {:.0} µε",
        result.curvature * 1.0e3,
        result.eps_top_ustrain,
        result.eps_bottom_ustrain,
        result.delta_eps_ustrain
    )
    .expect("writing to string cannot fail");
}

/// Render the strain-versus-force table.
#[must_use]
pub fn render_force_sweep(points: &[SweepPoint]) -> String {
    let mut output = String::new();
    writeln!(&mut output, "\nPARAMETRIC STUDY: Strain vs Force\n{RULE}")
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "{:>10} {:>15} {:>15} {:>12}\n{RULE}",
        "Force [N]", "eps_top [µε]", "delta_eps [µε]", "V_out [mV]"
    )
    .expect("writing to string cannot fail");
    for point in points {
        writeln!(
            &mut output,
            "{:10.0} {:15.0} {:15.0} {:12.3}",
            point.value,
            point.strain.eps_top_ustrain,
            point.strain.delta_eps_ustrain,
            point.bridge.millivolts()
        )
        .expect("writing to string cannot fail");
    }
    output
}

/// Render the strain-versus-beam-height table.
#[must_use]
pub fn render_height_sweep(points: &[SweepPoint]) -> String {
    let mut output = String::new();
    writeln!(&mut output, "\nPARAMETRIC STUDY: Strain vs Beam Height\n{RULE}")
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "{:>10} {:>15} {:>12}\n{RULE}",
        "h_b [mm]", "delta_eps [µε]", "V_out [mV]"
    )
    .expect("writing to string cannot fail");
    for point in points {
        writeln!(
            &mut output,
            "{:10.1} {:15.0} {:12.3}",
            point.value,
            point.strain.delta_eps_ustrain,
            point.bridge.millivolts()
        )
        .expect("writing to string cannot fail");
    }
    output
}

/// Render the three microstrain values of the standalone calculation.
#[must_use]
pub fn render_theory1(strain: &Theory1Strain) -> String {
    format!(
        "Theory 1 Mechanical Strains:\n  \
         Top surface:    {:.0} µε\n  \
         Bottom surface: {:.0} µε\n  \
         Differential:   {:.0} µε\n",
        strain.eps_top_ustrain, strain.eps_bottom_ustrain, strain.delta_eps_ustrain
    )
}
