use mos_devices::square_law::DeviceParameters;

use crate::error::{Result, ValidationError};
use crate::inputs::{RawInputs, RawVgs};
use crate::sweep::{SweepMode, SweepSpec};

/// Inputs that passed every check, ready for the curve generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParams {
    device: DeviceParameters,
    sweep: SweepSpec,
}

impl ValidatedParams {
    pub fn device(&self) -> &DeviceParameters {
        &self.device
    }

    pub fn sweep(&self) -> &SweepSpec {
        &self.sweep
    }
}

/// Check raw inputs and package them.
///
/// Checks run in a fixed order and stop at the first failure:
/// coefficients, threshold, gate range (sweep mode only), drain range.
/// A single gate voltage is accepted as is, even below threshold.
pub fn validate(raw: &RawInputs) -> Result<ValidatedParams> {
    let result = check(raw);
    if let Err(err) = &result {
        tracing::debug!(code = err.code(), "inputs rejected: {}", err);
    }
    result
}

fn check(raw: &RawInputs) -> Result<ValidatedParams> {
    if raw.kn <= 0.0 || raw.kp <= 0.0 {
        return Err(ValidationError::InvalidCoefficient);
    }
    if raw.vth <= 0.0 {
        return Err(ValidationError::InvalidThreshold);
    }
    let mode = match raw.vgs {
        RawVgs::Sweep { min, max } => {
            if max <= min {
                return Err(ValidationError::InvalidVgsRange);
            }
            SweepMode::Sweep {
                vgs_min: min,
                vgs_max: max,
            }
        }
        RawVgs::Single { value } => SweepMode::Single { vgs_value: value },
    };
    if raw.vds_max <= raw.vds_min {
        return Err(ValidationError::InvalidVdsRange);
    }
    Ok(ValidatedParams {
        device: DeviceParameters::new(raw.kn, raw.kp, raw.vth),
        sweep: SweepSpec {
            mode,
            vds_min: raw.vds_min,
            vds_max: raw.vds_max,
        },
    })
}
