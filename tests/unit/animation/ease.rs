use super::*;

const ALL: [Ease; 17] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::ElasticOut,
    Ease::BounceOut,
    Ease::CAMERA_SMOOTH,
    Ease::CAMERA_ZOOM_IN,
    Ease::CAMERA_ZOOM_OUT,
    Ease::CAMERA_DRAMATIC,
    Ease::CAMERA_SNAPPY,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn inputs_outside_unit_range_are_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::CAMERA_SMOOTH,
    ] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn cubic_bezier_matches_css_reference_values() {
    // CSS `ease`.
    let ease = Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0);
    assert!((ease.apply(0.5) - 0.802_403).abs() < 1e-3);
    // Symmetric curve crosses the midpoint exactly.
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::CAMERA_SMOOTH.apply(0.5) - 0.775_561).abs() < 1e-3);
    assert!((Ease::EaseIn.apply(0.25) - 0.093_465).abs() < 1e-3);
    // The identity bezier is linear.
    let lin = Ease::cubic_bezier(0.0, 0.0, 1.0, 1.0);
    for x in [0.1, 0.3, 0.7, 0.9] {
        assert!((lin.apply(x) - x).abs() < 1e-6);
    }
}

#[test]
fn snappy_preset_overshoots() {
    let peak = (0..=100)
        .map(|i| Ease::CAMERA_SNAPPY.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05);
    assert!(peak < 1.15);
}

#[test]
fn serde_accepts_names_presets_and_bezier_objects() {
    let v: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(v, Ease::EaseInOut);
    let v: Ease = serde_json::from_str("\"smooth\"").unwrap();
    assert_eq!(v, Ease::CAMERA_SMOOTH);
    let v: Ease = serde_json::from_str("{\"cubic_bezier\": [0.25, 0.1, 0.25, 1.0]}").unwrap();
    assert_eq!(v, Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0));

    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
    assert!(serde_json::from_str::<Ease>("{\"cubic_bezier\": [1.5, 0, 0.5, 1]}").is_err());
}

#[test]
fn serde_output_parses_back() {
    for ease in ALL {
        let json = serde_json::to_string(&ease).unwrap();
        let back: Ease = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ease);
    }
}
