//! Square-law drain current evaluation
//!
//! Both equations divide by the gate overdrive. The cutoff test is strict
//! (`<`), so an overdrive of exactly zero reaches the triode formula and
//! yields NaN or an infinity. That result is returned as is.

use super::params::DeviceParameters;
use super::types::{MosRegion, MosType};

/// NMOS branch selection: cutoff iff `vgs < vth`
pub fn nmos_region(vth: f64, vgs: f64) -> MosRegion {
    if vgs < vth {
        MosRegion::Cutoff
    } else {
        MosRegion::Triode
    }
}

/// PMOS branch selection: cutoff iff the shifted gate voltage is negative
pub fn pmos_region(vth: f64, vgs: f64) -> MosRegion {
    let vgs_shifted = vgs - vth;
    if vgs_shifted < 0.0 {
        MosRegion::Cutoff
    } else {
        MosRegion::Triode
    }
}

pub fn region_for(mos_type: MosType, vth: f64, vgs: f64) -> MosRegion {
    match mos_type {
        MosType::Nmos => nmos_region(vth, vgs),
        MosType::Pmos => pmos_region(vth, vgs),
    }
}

/// NMOS drain current
///
/// Ids = Kn * (2*(Vgs-Vth)*Vds - Vds^2) / (Vgs-Vth), zero below threshold.
pub fn nmos_ids(kn: f64, vth: f64, vgs: f64, vds: f64) -> f64 {
    match nmos_region(vth, vgs) {
        MosRegion::Cutoff => 0.0,
        MosRegion::Triode => {
            let vov = vgs - vth;
            kn * (2.0 * vov * vds - vds * vds) / vov
        }
    }
}

/// PMOS drain current (shifted and flipped)
///
/// Both terminal voltages are shifted by Vth and the result is negated:
/// Ids = -Kp * (2*Vgs'*Vds' - Vds'^2) / Vgs'.
pub fn pmos_ids(kp: f64, vth: f64, vgs: f64, vds: f64) -> f64 {
    let vgs_shifted = vgs - vth;
    let vds_shifted = vds - vth;
    match pmos_region(vth, vgs) {
        MosRegion::Cutoff => 0.0,
        MosRegion::Triode => {
            -kp * (2.0 * vgs_shifted * vds_shifted - vds_shifted * vds_shifted) / vgs_shifted
        }
    }
}

/// Route to the equation of the given device type
pub fn evaluate_ids(params: &DeviceParameters, mos_type: MosType, vgs: f64, vds: f64) -> f64 {
    match mos_type {
        MosType::Nmos => nmos_ids(params.kn, params.vth, vgs, vds),
        MosType::Pmos => pmos_ids(params.kp, params.vth, vgs, vds),
    }
}
