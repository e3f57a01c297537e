//! Curve generation.
//!
//! Every gate voltage of the sweep produces one NMOS and one PMOS curve over
//! the shared drain axis. NMOS curves come first in ascending Vgs order, then
//! PMOS curves in descending Vgs order. Renderers build their legend in this
//! order.

use mos_devices::square_law::{evaluate_ids, region_for, DeviceParameters, MosRegion, MosType};

use crate::chart::ChartLayout;
use crate::sweep::SweepSpec;
use crate::validate::ValidatedParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub vds: f64,
    pub ids: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub device: MosType,
    pub gate_voltage: f64,
    pub region: MosRegion,
    pub samples: Vec<Sample>,
    pub label: String,
}

impl Curve {
    /// Evaluate one device at a fixed gate voltage over `vds_axis`.
    pub fn evaluate(
        params: &DeviceParameters,
        device: MosType,
        vgs: f64,
        vds_axis: &[f64],
    ) -> Self {
        let samples = vds_axis
            .iter()
            .map(|&vds| Sample {
                vds,
                ids: evaluate_ids(params, device, vgs, vds),
            })
            .collect();
        Self {
            device,
            gate_voltage: vgs,
            region: region_for(device, params.vth, vgs),
            samples,
            label: curve_label(device, vgs),
        }
    }

    pub fn vds(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.vds)
    }

    pub fn ids(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.ids)
    }

    pub fn is_cutoff(&self) -> bool {
        self.region == MosRegion::Cutoff
    }
}

/// Legend text, e.g. `Vgs_NMOS = 2.00V`
pub fn curve_label(device: MosType, vgs: f64) -> String {
    format!("{} = {:.2}V", device.label_prefix(), vgs)
}

pub fn generate(params: &ValidatedParams) -> Vec<Curve> {
    generate_with(params.device(), params.sweep())
}

/// Build all curves for a sweep. The sweep must already satisfy its
/// ordering constraints; nothing is checked here.
pub fn generate_with(device: &DeviceParameters, sweep: &SweepSpec) -> Vec<Curve> {
    let vgs_axis = sweep.vgs_axis();
    let vds_axis = sweep.vds_axis();

    let mut curves = Vec::with_capacity(vgs_axis.len() * 2);
    for &vgs in &vgs_axis {
        curves.push(Curve::evaluate(device, MosType::Nmos, vgs, &vds_axis));
    }
    for &vgs in vgs_axis.iter().rev() {
        curves.push(Curve::evaluate(device, MosType::Pmos, vgs, &vds_axis));
    }

    tracing::debug!(
        curves = curves.len(),
        samples = vds_axis.len(),
        "generated id-vd curves"
    );
    curves
}

/// Curves together with the chart metadata a renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub chart: ChartLayout,
    pub curves: Vec<Curve>,
}

impl CurveSet {
    pub fn compute(params: &ValidatedParams) -> Self {
        Self {
            chart: ChartLayout::default(),
            curves: generate(params),
        }
    }

    pub fn nmos(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(|c| c.device == MosType::Nmos)
    }

    pub fn pmos(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(|c| c.device == MosType::Pmos)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
