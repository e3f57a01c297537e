use mos_core::inputs::{InputOverrides, RawInputs, RawVgs, VgsMode, VgsOverrides};

#[test]
fn empty_overrides_resolve_to_defaults() {
    assert_eq!(InputOverrides::default().resolve(), RawInputs::default());
}

#[test]
fn gate_defaults_follow_threshold() {
    let sweep = InputOverrides {
        vth: Some(0.5),
        ..InputOverrides::default()
    }
    .resolve();
    assert_eq!(sweep.vgs, RawVgs::Sweep { min: -1.5, max: 5.0 });

    let single = InputOverrides {
        vth: Some(0.5),
        vgs: Some(VgsOverrides::Single { value: None }),
        ..InputOverrides::default()
    }
    .resolve();
    assert_eq!(single.vgs, RawVgs::Single { value: 1.5 });
    assert_eq!(single.vgs.mode(), VgsMode::Single);
}

#[test]
fn explicit_values_override_defaults() {
    let raw = InputOverrides {
        kn: Some(5e-3),
        vgs: Some(VgsOverrides::Sweep {
            min: Some(0.0),
            max: Some(3.0),
        }),
        vds_max: Some(4.0),
        ..InputOverrides::default()
    }
    .resolve();
    assert_eq!(raw.kn, 5e-3);
    assert_eq!(raw.kp, 2e-3);
    assert_eq!(raw.vgs, RawVgs::Sweep { min: 0.0, max: 3.0 });
    assert_eq!(raw.vds_min, 0.0);
    assert_eq!(raw.vds_max, 4.0);
}

#[test]
fn overrides_deserialize_from_partial_json() {
    let overrides: InputOverrides =
        serde_json::from_str(r#"{"vgs":{"mode":"single"},"vth":2.0,"kp":1e-4}"#).unwrap();
    let raw = overrides.resolve();
    assert_eq!(raw.kp, 1e-4);
    assert_eq!(raw.vgs, RawVgs::Single { value: 3.0 });

    let overrides: InputOverrides =
        serde_json::from_str(r#"{"vgs":{"mode":"sweep","max":2.5}}"#).unwrap();
    assert_eq!(overrides.resolve().vgs, RawVgs::Sweep { min: -1.0, max: 2.5 });
}

#[test]
fn full_raw_inputs_json_is_a_valid_override() {
    let raw = RawInputs {
        kn: 3e-3,
        vgs: RawVgs::Single { value: -0.25 },
        vds_min: -1.0,
        ..RawInputs::default()
    };
    let json = serde_json::to_string(&raw).unwrap();
    let overrides: InputOverrides = serde_json::from_str(&json).unwrap();
    assert_eq!(overrides, InputOverrides::from(raw));
    assert_eq!(overrides.resolve(), raw);
}

#[test]
fn raw_inputs_json_tags_gate_mode() {
    let json = serde_json::to_value(RawInputs::default()).unwrap();
    assert_eq!(json["vgs"]["mode"], "sweep");
    assert_eq!(json["vgs"]["min"], -1.0);
    assert_eq!(json["vgs"]["max"], 5.0);
}
