//! Gate and drain voltage axes.

/// Gate voltage points in sweep mode
pub const VGS_POINTS: usize = 21;
/// Drain voltage points on every curve
pub const VDS_POINTS: usize = 101;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepMode {
    Sweep { vgs_min: f64, vgs_max: f64 },
    Single { vgs_value: f64 },
}

/// Validated sweep description. `vds_min < vds_max`, and `vgs_min < vgs_max`
/// in sweep mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSpec {
    pub mode: SweepMode,
    pub vds_min: f64,
    pub vds_max: f64,
}

impl SweepSpec {
    /// Gate voltages in ascending sweep order
    pub fn vgs_axis(&self) -> Vec<f64> {
        match self.mode {
            SweepMode::Sweep { vgs_min, vgs_max } => linspace(vgs_min, vgs_max, VGS_POINTS),
            SweepMode::Single { vgs_value } => vec![vgs_value],
        }
    }

    pub fn vds_axis(&self) -> Vec<f64> {
        linspace(self.vds_min, self.vds_max, VDS_POINTS)
    }

    pub fn curves_per_device(&self) -> usize {
        match self.mode {
            SweepMode::Sweep { .. } => VGS_POINTS,
            SweepMode::Single { .. } => 1,
        }
    }
}

/// `count` evenly spaced values from `start` to `stop`, both included.
///
/// Values are `start + i * step`; the last one is pinned to `stop` so the
/// endpoint is exact.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            out[count - 1] = stop;
            out
        }
    }
}
