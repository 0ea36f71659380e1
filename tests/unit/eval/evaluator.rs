use super::*;
use crate::{
    animation::{ease::Ease, spring::Spring},
    beat::grid::BeatGrid,
    camera::timeline::CameraKeyframe,
    composition::model::BeatTrack,
    effects::transitions::{FlashPulse, ShotTransition, TransitionKind},
    foundation::core::{Fps, Point, Size},
};

fn scene() -> Scene {
    let mut scene = Scene::new(Fps::default(), FrameIndex(120));
    scene.camera = vec![
        CameraKeyframe::new(0, 0.6, 0.0, 0.0),
        CameraKeyframe::new(60, 1.2, 10.0, -15.0),
    ];
    scene.shot = Some(ShotTransition::new(120).with_easing(Ease::Linear));
    scene.beat = Some(BeatTrack::default());
    scene
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn bundles_camera_shot_and_beat() {
    let s = Evaluator::eval_frame(&scene(), FrameIndex(30)).unwrap();
    let cam = s.camera.unwrap();
    assert!(approx(cam.state.scale, 0.9));
    assert!(approx(cam.state.x, 5.0));
    assert!(approx(cam.state.y, -7.5));
    assert!(approx(cam.transform.translate_x_pct, -5.0));
    assert!(cam.affine.is_none());

    let shot = s.shot.unwrap();
    assert_eq!(shot.phase, ShotPhase::Steady);
    assert_eq!(shot.state, TransitionState::IDENTITY);

    let beat = s.beat.unwrap();
    assert_eq!(beat.beat, 2.0);
    assert!(beat.on_beat);
    assert!(approx(s.time_secs, 1.0));
    assert_eq!(s.flash, 0.0);
    assert!(s.drift.is_none());
}

#[test]
fn enter_window_is_reported() {
    let s = Evaluator::eval_frame(&scene(), FrameIndex(6)).unwrap();
    let shot = s.shot.unwrap();
    assert_eq!(shot.phase, ShotPhase::Entering);
    assert!(approx(shot.state.opacity, 0.5));
}

#[test]
fn viewport_produces_affine() {
    let mut sc = scene();
    sc.viewport = Some(Size::new(1000.0, 500.0));
    let s = Evaluator::eval_frame(&sc, FrameIndex(0)).unwrap();
    let affine = s.camera.unwrap().affine.unwrap();
    // Scale 0.6 about the centre.
    let p = affine * Point::new(0.0, 0.0);
    assert!(approx(p.x, 200.0) && approx(p.y, 100.0));
}

#[test]
fn flash_takes_strongest_source() {
    let mut sc = scene();
    sc.shot = Some(
        ShotTransition::new(120)
            .with_easing(Ease::Linear)
            .with_kinds(TransitionKind::Flash, TransitionKind::Fade),
    );
    sc.flashes = vec![FlashPulse::new(30), FlashPulse { intensity: 0.4, ..FlashPulse::new(31) }];
    assert_eq!(Evaluator::eval_frame(&sc, FrameIndex(0)).unwrap().flash, 1.0);
    assert!(approx(Evaluator::eval_frame(&sc, FrameIndex(33)).unwrap().flash, 1.0));
    assert_eq!(Evaluator::eval_frame(&sc, FrameIndex(60)).unwrap().flash, 0.0);
}

#[test]
fn springs_are_sampled_by_name() {
    let mut sc = scene();
    sc.springs.insert(
        "title".to_string(),
        Spring::default().with_delay(10.0).with_range(-50.0, 0.0),
    );
    let before = Evaluator::eval_frame(&sc, FrameIndex(5)).unwrap();
    assert_eq!(before.springs["title"], -50.0);
    let late = Evaluator::eval_frame(&sc, FrameIndex(119)).unwrap();
    assert!(late.springs["title"].abs() < 0.5);
}

#[test]
fn out_of_bounds_frame_is_an_error() {
    let err = Evaluator::eval_frame(&scene(), FrameIndex(120)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn invalid_scene_fails_before_sampling() {
    let mut sc = scene();
    sc.beat = Some(BeatTrack {
        grid: BeatGrid { bpm: -1.0, fps: 30.0 },
        ..BeatTrack::default()
    });
    assert!(matches!(
        Evaluator::eval_frame(&sc, FrameIndex(0)).unwrap_err(),
        ReelError::Validation(_)
    ));
}

#[test]
fn range_matches_single_frames_in_any_order() {
    let sc = scene();
    let range = FrameRange::new(FrameIndex(0), FrameIndex(120)).unwrap();
    let all = Evaluator::eval_range(&sc, range).unwrap();
    assert_eq!(all.len(), 120);
    for f in [119u64, 3, 77, 0, 60] {
        assert_eq!(all[f as usize], Evaluator::eval_frame(&sc, FrameIndex(f)).unwrap());
    }
}

#[test]
fn empty_scene_has_only_time() {
    let sc = Scene::new(Fps::new(25, 1).unwrap(), FrameIndex(10));
    let s = Evaluator::eval_frame(&sc, FrameIndex(5)).unwrap();
    assert!(approx(s.time_secs, 0.2));
    assert!(s.camera.is_none() && s.shot.is_none() && s.beat.is_none());
    assert!(s.springs.is_empty());
}

#[derive(Clone, Default)]
struct WarnCounter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }
}

#[test]
fn duplicate_camera_keys_are_normalized_once_per_preparation() {
    use tracing_subscriber::layer::SubscriberExt;

    let mut sc = scene();
    sc.camera.push(CameraKeyframe::new(60, 2.0, 0.0, 0.0));

    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let prepared = tracing::subscriber::with_default(subscriber, || {
        PreparedScene::new(&sc).unwrap()
    });
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 1);

    let keys = prepared.camera.as_ref().unwrap().keys();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[1].scale, 2.0);
    let cam = prepared.sample(FrameIndex(60)).unwrap().camera.unwrap();
    assert!(approx(cam.state.scale, 2.0));
}
