pub mod chart;
pub mod csv_export;
pub mod curves;
pub mod error;
pub mod inputs;
pub mod psf;
pub mod sweep;
pub mod validate;

pub use curves::{generate, Curve, CurveSet, Sample};
pub use error::{Result, ValidationError};
pub use inputs::{InputOverrides, RawInputs, RawVgs, VgsMode, VgsOverrides};
pub use sweep::{SweepMode, SweepSpec, VDS_POINTS, VGS_POINTS};
pub use validate::{validate, ValidatedParams};
