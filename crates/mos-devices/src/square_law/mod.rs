//! Square-law MOSFET model
//!
//! This module implements the idealized long-channel drain current equation
//! used to draw Ids vs Vds characteristics for NMOS and PMOS devices.
//!
//! ## Module Structure
//!
//! - `params`: Device coefficients (DeviceParameters) with defaults
//! - `types`: Enums (MosType, MosRegion)
//! - `evaluate`: Piecewise cutoff/triode current equations
//!
//! ## Usage
//!
//! ```ignore
//! use mos_devices::square_law::{DeviceParameters, evaluate_ids, MosType};
//!
//! let params = DeviceParameters::default();
//! let ids = evaluate_ids(&params, MosType::Nmos, 2.0, 1.0);
//! println!("Ids = {:.3e} A", ids);
//! ```
//!
//! ## Model
//!
//! There is a single triode-region formula per device type and a hard
//! cutoff below threshold. No saturation branch, channel-length modulation,
//! body effect or subthreshold conduction is modeled.
//!
//! | Device | Cutoff | Triode |
//! |--------|--------|--------|
//! | NMOS | Vgs < Vth | Kn * (2*(Vgs-Vth)*Vds - Vds^2) / (Vgs-Vth) |
//! | PMOS | Vgs - Vth < 0 | -Kp * (2*Vgs'*Vds' - Vds'^2) / Vgs', with Vgs' = Vgs-Vth, Vds' = Vds-Vth |

pub mod params;
pub mod types;
pub mod evaluate;

// Re-export commonly used items
pub use params::{DeviceParameters, DEFAULT_KN, DEFAULT_KP, DEFAULT_VTH};
pub use types::{MosRegion, MosType};
pub use evaluate::{evaluate_ids, nmos_ids, nmos_region, pmos_ids, pmos_region, region_for};
