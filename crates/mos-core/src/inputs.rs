//! Raw, unvalidated user inputs and their defaults.
//!
//! Gate voltage defaults follow the entered threshold: a sweep starts two
//! volts below Vth and ends at 5V, a single value sits one volt above Vth.

use mos_devices::square_law::{DEFAULT_KN, DEFAULT_KP, DEFAULT_VTH};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VGS_MAX: f64 = 5.0;
pub const DEFAULT_VDS_MIN: f64 = 0.0;
pub const DEFAULT_VDS_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VgsMode {
    #[default]
    Sweep,
    Single,
}

/// Gate voltage fields as entered, before any ordering check.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RawVgs {
    Sweep { min: f64, max: f64 },
    Single { value: f64 },
}

impl RawVgs {
    pub fn default_sweep(vth: f64) -> Self {
        RawVgs::Sweep {
            min: vth - 2.0,
            max: DEFAULT_VGS_MAX,
        }
    }

    pub fn default_single(vth: f64) -> Self {
        RawVgs::Single { value: vth + 1.0 }
    }

    pub fn mode(&self) -> VgsMode {
        match self {
            RawVgs::Sweep { .. } => VgsMode::Sweep,
            RawVgs::Single { .. } => VgsMode::Single,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RawInputs {
    pub kn: f64,
    pub kp: f64,
    pub vth: f64,
    pub vgs: RawVgs,
    pub vds_min: f64,
    pub vds_max: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            kn: DEFAULT_KN,
            kp: DEFAULT_KP,
            vth: DEFAULT_VTH,
            vgs: RawVgs::default_sweep(DEFAULT_VTH),
            vds_min: DEFAULT_VDS_MIN,
            vds_max: DEFAULT_VDS_MAX,
        }
    }
}

/// Gate fields of a partial request. The mode tag is required; missing
/// bounds take the threshold-dependent defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VgsOverrides {
    Sweep {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    Single {
        #[serde(default)]
        value: Option<f64>,
    },
}

impl From<RawVgs> for VgsOverrides {
    fn from(vgs: RawVgs) -> Self {
        match vgs {
            RawVgs::Sweep { min, max } => VgsOverrides::Sweep {
                min: Some(min),
                max: Some(max),
            },
            RawVgs::Single { value } => VgsOverrides::Single { value: Some(value) },
        }
    }
}

/// Partially filled inputs, as collected by a form, a request body or
/// command-line flags. Same shape as [`RawInputs`] with every field optional;
/// missing fields are filled by [`InputOverrides::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InputOverrides {
    pub kn: Option<f64>,
    pub kp: Option<f64>,
    pub vth: Option<f64>,
    pub vgs: Option<VgsOverrides>,
    pub vds_min: Option<f64>,
    pub vds_max: Option<f64>,
}

impl InputOverrides {
    pub fn resolve(&self) -> RawInputs {
        let vth = self.vth.unwrap_or(DEFAULT_VTH);
        let vgs = match self.vgs {
            None => RawVgs::default_sweep(vth),
            Some(VgsOverrides::Sweep { min, max }) => RawVgs::Sweep {
                min: min.unwrap_or(vth - 2.0),
                max: max.unwrap_or(DEFAULT_VGS_MAX),
            },
            Some(VgsOverrides::Single { value }) => RawVgs::Single {
                value: value.unwrap_or(vth + 1.0),
            },
        };
        RawInputs {
            kn: self.kn.unwrap_or(DEFAULT_KN),
            kp: self.kp.unwrap_or(DEFAULT_KP),
            vth,
            vgs,
            vds_min: self.vds_min.unwrap_or(DEFAULT_VDS_MIN),
            vds_max: self.vds_max.unwrap_or(DEFAULT_VDS_MAX),
        }
    }
}

impl From<RawInputs> for InputOverrides {
    fn from(raw: RawInputs) -> Self {
        Self {
            kn: Some(raw.kn),
            kp: Some(raw.kp),
            vth: Some(raw.vth),
            vgs: Some(raw.vgs.into()),
            vds_min: Some(raw.vds_min),
            vds_max: Some(raw.vds_max),
        }
    }
}
