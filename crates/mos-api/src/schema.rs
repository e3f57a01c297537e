use mos_core::chart::ChartLayout;
use mos_core::curves::{Curve, CurveSet};
use serde::Serialize;

/// One curve as sent to clients. Non-finite currents serialize as `null`.
#[derive(Debug, Serialize)]
pub struct CurveBody {
    pub device: String,
    pub gate_voltage: f64,
    pub region: String,
    pub label: String,
    pub vds: Vec<f64>,
    pub ids: Vec<f64>,
}

impl From<&Curve> for CurveBody {
    fn from(curve: &Curve) -> Self {
        Self {
            device: curve.device.name().to_string(),
            gate_voltage: curve.gate_voltage,
            region: format!("{:?}", curve.region),
            label: curve.label.clone(),
            vds: curve.vds().collect(),
            ids: curve.ids().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CurvesResponse {
    pub chart: ChartLayout,
    pub curves: Vec<CurveBody>,
}

impl From<&CurveSet> for CurvesResponse {
    fn from(set: &CurveSet) -> Self {
        Self {
            chart: set.chart.clone(),
            curves: set.curves.iter().map(CurveBody::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
