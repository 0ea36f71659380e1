use super::*;

#[test]
fn starts_centered_horizontally_and_offset_vertically() {
    let s = HandheldDrift::default().sample(FrameIndex(0));
    assert_eq!(s.translate_x, 0.0);
    assert_eq!(s.translate_y, 15.0);
    assert_eq!(s.rotate_x_deg, 0.0);
    assert_eq!(s.rotate_y_deg, 3.0);
}

#[test]
fn stays_within_amplitudes() {
    let drift = HandheldDrift {
        drift_x: 4.0,
        drift_y: 2.0,
        rotate_scale: 0.5,
    };
    for f in 0..2_000 {
        let s = drift.sample(FrameIndex(f));
        assert!(s.translate_x.abs() <= 4.0);
        assert!(s.translate_y.abs() <= 2.0);
        assert!(s.rotate_x_deg.abs() <= 1.0);
        assert!(s.rotate_y_deg.abs() <= 1.5);
    }
}

#[test]
fn same_frame_same_sample() {
    let drift = HandheldDrift::default();
    assert_eq!(drift.sample(FrameIndex(317)), drift.sample(FrameIndex(317)));
}
