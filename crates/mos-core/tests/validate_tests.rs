use mos_core::error::ValidationError;
use mos_core::inputs::{RawInputs, RawVgs};
use mos_core::sweep::SweepMode;
use mos_core::validate::validate;

fn base() -> RawInputs {
    RawInputs {
        kn: 1e-3,
        kp: 2e-3,
        vth: 1.0,
        vgs: RawVgs::Sweep { min: -1.0, max: 5.0 },
        vds_min: 0.0,
        vds_max: 10.0,
    }
}

#[test]
fn defaults_pass_validation() {
    let params = validate(&RawInputs::default()).unwrap();
    assert_eq!(params.device().kn, 1e-3);
    assert_eq!(params.device().kp, 2e-3);
    assert_eq!(params.device().vth, 1.0);
    assert_eq!(
        params.sweep().mode,
        SweepMode::Sweep {
            vgs_min: -1.0,
            vgs_max: 5.0
        }
    );
}

#[test]
fn non_positive_coefficients_are_rejected_first() {
    for (kn, kp) in [(0.0, 1.0), (1.0, 0.0), (-1e-3, 2e-3), (1e-3, -5.0), (0.0, 0.0)] {
        // every other field is also broken; coefficient error still wins
        let raw = RawInputs {
            kn,
            kp,
            vth: -1.0,
            vgs: RawVgs::Sweep { min: 3.0, max: 1.0 },
            vds_min: 5.0,
            vds_max: 0.0,
        };
        assert_eq!(validate(&raw), Err(ValidationError::InvalidCoefficient));
    }
}

#[test]
fn non_positive_threshold_is_rejected() {
    for vth in [0.0, -0.5, -10.0] {
        let raw = RawInputs {
            vth,
            vds_max: -1.0,
            ..base()
        };
        assert_eq!(validate(&raw), Err(ValidationError::InvalidThreshold));
    }
}

#[test]
fn sweep_range_must_ascend() {
    for (min, max) in [(5.0, 5.0), (5.0, -1.0)] {
        let raw = RawInputs {
            vgs: RawVgs::Sweep { min, max },
            vds_max: -1.0,
            ..base()
        };
        assert_eq!(validate(&raw), Err(ValidationError::InvalidVgsRange));
    }
}

#[test]
fn single_mode_skips_gate_range_check() {
    for value in [-3.0, 0.0, 0.5, 1.0, 42.0] {
        let raw = RawInputs {
            vgs: RawVgs::Single { value },
            ..base()
        };
        let params = validate(&raw).unwrap();
        assert_eq!(params.sweep().mode, SweepMode::Single { vgs_value: value });
    }
}

#[test]
fn drain_range_must_ascend() {
    for (vds_min, vds_max) in [(0.0, 0.0), (10.0, 0.0)] {
        let raw = RawInputs {
            vds_min,
            vds_max,
            ..base()
        };
        assert_eq!(validate(&raw), Err(ValidationError::InvalidVdsRange));

        let single = RawInputs {
            vgs: RawVgs::Single { value: 2.0 },
            ..raw
        };
        assert_eq!(validate(&single), Err(ValidationError::InvalidVdsRange));
    }
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        ValidationError::InvalidCoefficient.to_string(),
        "Kn and Kp must be positive values"
    );
    assert_eq!(
        ValidationError::InvalidThreshold.to_string(),
        "Vth must be a positive value"
    );
    assert_eq!(
        ValidationError::InvalidVgsRange.to_string(),
        "Vgs max must be greater than Vgs min"
    );
    assert_eq!(
        ValidationError::InvalidVdsRange.to_string(),
        "Vds max must be greater than Vds min"
    );
    assert_eq!(ValidationError::InvalidVdsRange.code(), "INVALID_VDS_RANGE");
}

#[test]
fn nan_inputs_fall_through_every_check() {
    let nan = f64::NAN;
    let cases = [
        RawInputs { kn: nan, ..base() },
        RawInputs { kp: nan, ..base() },
        RawInputs { vth: nan, ..base() },
        RawInputs {
            vgs: RawVgs::Sweep { min: nan, max: 5.0 },
            ..base()
        },
        RawInputs {
            vgs: RawVgs::Sweep { min: -1.0, max: nan },
            ..base()
        },
        RawInputs {
            vgs: RawVgs::Single { value: nan },
            ..base()
        },
        RawInputs { vds_min: nan, ..base() },
        RawInputs { vds_max: nan, ..base() },
    ];
    for raw in cases {
        assert!(validate(&raw).is_ok(), "rejected {:?}", raw);
    }
}

#[test]
fn infinite_bounds_are_accepted_when_ordered() {
    let raw = RawInputs {
        vgs: RawVgs::Sweep {
            min: f64::NEG_INFINITY,
            max: 5.0,
        },
        vds_max: f64::INFINITY,
        ..base()
    };
    assert!(validate(&raw).is_ok());
}
