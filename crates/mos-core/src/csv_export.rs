//! CSV file format output support.
//!
//! All curves share one drain voltage axis, so the table is wide: a `Vds`
//! column followed by one Ids column per curve, in curve order. A curve with
//! fewer samples than the first one leaves `NaN` in the rows it lacks.

use crate::curves::Curve;
use std::fs;
use std::path::Path;

pub fn format_csv_curves(curves: &[Curve], precision: usize) -> String {
    let mut out = String::new();

    // Header row
    out.push_str("Vds");
    for curve in curves {
        out.push_str(&format!(",{}", curve.label));
    }
    out.push('\n');

    let Some(first) = curves.first() else {
        return out;
    };

    // Data rows
    for (i, vds) in first.vds().enumerate() {
        out.push_str(&format!("{:.prec$e}", vds, prec = precision));
        for curve in curves {
            let ids = curve.samples.get(i).map(|s| s.ids).unwrap_or(f64::NAN);
            out.push_str(&format!(",{:.prec$e}", ids, prec = precision));
        }
        out.push('\n');
    }
    out
}

/// Write Id-Vd curves to CSV format.
pub fn write_csv_curves(curves: &[Curve], path: &Path, precision: usize) -> std::io::Result<()> {
    fs::write(path, format_csv_curves(curves, precision))
}
