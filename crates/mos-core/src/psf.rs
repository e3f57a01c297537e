use crate::curves::Curve;
use crate::sweep::VDS_POINTS;
use std::fs;
use std::path::Path;

pub fn format_psf_curves(curves: &[Curve], precision: usize) -> String {
    let mut out = String::new();
    out.push_str("PSF_TEXT\n");
    out.push_str("analysis=IdVd\n");
    out.push_str(&format!("curves={}\n", curves.len()));
    out.push_str(&format!(
        "points={}\n",
        curves.first().map(|c| c.samples.len()).unwrap_or(VDS_POINTS)
    ));
    out.push_str("signals:\n");
    for curve in curves {
        out.push_str(&format!("- {}\n", curve.label));
    }
    for curve in curves {
        out.push_str(&format!(
            "curve \"{}\" device={} vgs={:.*e} region={:?}\n",
            curve.label,
            curve.device.name(),
            precision,
            curve.gate_voltage,
            curve.region
        ));
        out.push_str("values:\n");
        for sample in &curve.samples {
            out.push_str(&format!(
                "{:.*e} {:.*e}\n",
                precision, sample.vds, precision, sample.ids
            ));
        }
    }
    out
}

pub fn write_psf_curves(curves: &[Curve], path: &Path, precision: usize) -> std::io::Result<()> {
    fs::write(path, format_psf_curves(curves, precision))
}
