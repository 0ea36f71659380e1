use super::*;
use crate::{animation::spring::SpringConfig, effects::transitions::TransitionKind};

#[test]
fn minimal_json_uses_defaults() {
    let scene = Scene::from_json(r#"{"duration": 90}"#).unwrap();
    assert_eq!(scene.fps, Fps::default());
    assert_eq!(scene.duration, FrameIndex(90));
    assert!(scene.camera.is_empty());
    assert!(scene.shot.is_none() && scene.beat.is_none() && scene.viewport.is_none());
    assert!(scene.springs.is_empty());
}

#[test]
fn full_json_parses() {
    let scene = Scene::from_json(
        r#"{
            "fps": {"num": 24, "den": 1},
            "duration": 48,
            "viewport": {"width": 1920, "height": 1080},
            "camera": [
                {"frame": 0, "scale": 1.0, "x": 0, "y": 0},
                {"frame": 40, "scale": 1.2, "x": 5, "y": 0, "easing": "smooth"}
            ],
            "drift": {"drift_x": 4},
            "shot": {"duration_in_frames": 48, "enter": "push", "exit": "flash"},
            "beat": {"bpm": 96, "pulse_frequency": 2},
            "flashes": [{"at": 20}],
            "springs": {"title": {"config": {"damping": 12, "stiffness": 150, "mass": 0.8}, "delay": 5}}
        }"#,
    )
    .unwrap();

    assert_eq!(scene.fps, Fps::new(24, 1).unwrap());
    assert_eq!(scene.camera.len(), 2);
    assert_eq!(scene.drift.unwrap().drift_y, 15.0);
    assert_eq!(scene.shot.unwrap().exit, TransitionKind::Flash);
    let beat = scene.beat.unwrap();
    assert_eq!((beat.grid.bpm, beat.grid.fps), (96.0, 30.0));
    assert_eq!((beat.pulse_frequency, beat.tolerance_frames), (2.0, 2.0));
    assert_eq!(scene.flashes[0].duration, 10);
    assert_eq!(scene.springs["title"].config, SpringConfig::OVERSHOOT);
    assert_eq!(scene.springs["title"].to, 1.0);
}

#[test]
fn validation_rejects_bad_scenes() {
    let bad = [
        r#"{"duration": 0}"#,
        r#"{"fps": {"num": 0, "den": 1}, "duration": 10}"#,
        r#"{"duration": 10, "viewport": {"width": 0, "height": 10}}"#,
        r#"{"duration": 10, "shot": {"duration_in_frames": 0}}"#,
        r#"{"duration": 10, "beat": {"bpm": 0}}"#,
        r#"{"duration": 10, "beat": {"pulse_frequency": 0}}"#,
        r#"{"duration": 10, "flashes": [{"at": 3, "duration": 0}]}"#,
        r#"{"duration": 10, "springs": {"a": {"config": {"mass": 0}}}}"#,
        r#"{"duration": 10, "springs": {" ": {}}}"#,
    ];
    for json in bad {
        let err = Scene::from_json(json).unwrap_err();
        assert!(matches!(err, ReelError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Scene::from_json(r#"{"duration": "soon"}"#).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn spring_errors_name_the_spring() {
    let err = Scene::from_json(r#"{"duration": 10, "springs": {"logo": {"config": {"stiffness": -1}}}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("spring 'logo'"));
}

#[test]
fn serialization_skips_empty_parts() {
    let scene = Scene::new(Fps::default(), FrameIndex(30));
    let json = serde_json::to_value(&scene).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("fps") && obj.contains_key("duration"));
}
