//! Square-law MOSFET type definitions

/// MOSFET device type (NMOS or PMOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MosType {
    Nmos,
    Pmos,
}

impl MosType {
    /// Prefix used when naming a curve, e.g. `Vgs_NMOS`
    pub fn label_prefix(self) -> &'static str {
        match self {
            MosType::Nmos => "Vgs_NMOS",
            MosType::Pmos => "Vgs_PMOS",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MosType::Nmos => "NMOS",
            MosType::Pmos => "PMOS",
        }
    }
}

impl Default for MosType {
    fn default() -> Self {
        MosType::Nmos
    }
}

/// Branch of the piecewise current equation selected for a gate voltage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosRegion {
    /// Vgs below threshold: Ids = 0 for every Vds
    Cutoff,
    /// Quadratic-in-Vds triode formula
    Triode,
}

impl Default for MosRegion {
    fn default() -> Self {
        MosRegion::Cutoff
    }
}
