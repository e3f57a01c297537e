//! Square-law device coefficients
//!
//! Contains the DeviceParameters structure and the default values the
//! characteristic tool starts from.

/// Default NMOS transconductance coefficient [A/V]
pub const DEFAULT_KN: f64 = 1e-3;
/// Default PMOS transconductance coefficient [A/V]
pub const DEFAULT_KP: f64 = 2e-3;
/// Default threshold voltage magnitude [V]
pub const DEFAULT_VTH: f64 = 1.0;

/// Coefficients shared by every curve of one computation.
///
/// `vth` is used directly by the NMOS equation and as a symmetric shift of
/// both Vgs and Vds by the PMOS equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceParameters {
    /// NMOS transconductance coefficient
    pub kn: f64,
    /// PMOS transconductance coefficient
    pub kp: f64,
    /// Threshold voltage magnitude [V]
    pub vth: f64,
}

impl DeviceParameters {
    pub fn new(kn: f64, kp: f64, vth: f64) -> Self {
        Self { kn, kp, vth }
    }
}

impl Default for DeviceParameters {
    fn default() -> Self {
        Self::new(DEFAULT_KN, DEFAULT_KP, DEFAULT_VTH)
    }
}
