use super::*;
use crate::{camera::timeline::CameraTimeline, foundation::core::FrameIndex};

#[test]
fn ken_burns_defaults_pan_right_and_zoom() {
    let keys = ken_burns(0, 90, KenBurnsOpts::default());
    assert_eq!(keys.len(), 2);
    assert_eq!((keys[0].x, keys[0].scale), (-10.0, 1.0));
    assert_eq!((keys[1].x, keys[1].scale), (10.0, 1.15));
    assert_eq!(keys[1].easing, Some(Ease::CAMERA_SMOOTH));
    assert_eq!(keys[0].easing, None);
}

#[test]
fn ken_burns_directions() {
    let opts = |direction| KenBurnsOpts {
        direction,
        amount: 5.0,
        ..KenBurnsOpts::default()
    };
    let up = ken_burns(0, 10, opts(PanDirection::Up));
    assert_eq!((up[0].y, up[1].y), (5.0, -5.0));
    let left = ken_burns(0, 10, opts(PanDirection::Left));
    assert_eq!((left[0].x, left[1].x), (5.0, -5.0));
    let diag = ken_burns(0, 10, opts(PanDirection::Diagonal));
    assert_eq!((diag[0].x, diag[0].y, diag[1].x, diag[1].y), (-5.0, -5.0, 5.0, 5.0));
}

#[test]
fn zoom_to_feature_peaks_at_hold() {
    let keys = zoom_to_feature(0, 45, 90, 12.0, -8.0, ZoomToFeatureOpts::default());
    let tl = CameraTimeline::new(&keys).unwrap();
    let hold = tl.resolve(FrameIndex(45));
    assert_eq!((hold.scale, hold.x, hold.y), (1.5, 12.0, -8.0));
    let end = tl.resolve(FrameIndex(90));
    assert_eq!((end.scale, end.x, end.y), (0.8, 0.0, 0.0));
    // Zoom-in curve front-loads the move.
    assert!(tl.resolve(FrameIndex(10)).scale > 0.8 + (1.5 - 0.8) * (10.0 / 45.0));
}
