use super::*;

fn square_ish() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 40.0),
    ]
}

#[test]
fn polyline_length_is_sum_of_segments() {
    let path = build_path(&square_ish(), PathStyle::Linear).unwrap();
    assert!((path_length(&path) - 70.0).abs() < 1e-9);
}

#[test]
fn collinear_smooth_path_matches_chord() {
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
    let path = build_path(&pts, PathStyle::default()).unwrap();
    assert!((path_length(&path) - 20.0).abs() < 1e-4);
}

#[test]
fn empty_series_has_zero_length() {
    assert_eq!(path_length(&build_path(&[], PathStyle::Linear).unwrap()), 0.0);
}

#[test]
fn dash_offset_reveals_progressively() {
    assert_eq!(dash_offset(100.0, 0.0), 100.0);
    assert_eq!(dash_offset(100.0, 0.25), 75.0);
    assert_eq!(dash_offset(100.0, 1.0), 0.0);
    assert_eq!(dash_offset(100.0, 2.0), 0.0);
    assert_eq!(dash_offset(100.0, -1.0), 100.0);
}

#[test]
fn cache_hits_for_identical_input() {
    let mut cache = PathLengthCache::new();
    let pts = square_ish();
    let a = cache.length(&pts, PathStyle::Linear).unwrap();
    assert!(cache.is_cached_for(&pts, PathStyle::Linear));
    let b = cache.length(&pts.clone(), PathStyle::Linear).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cache_recomputes_when_points_or_style_change() {
    let mut cache = PathLengthCache::new();
    let pts = square_ish();
    let a = cache.length(&pts, PathStyle::Linear).unwrap();

    let mut longer = pts.clone();
    longer.push(Point::new(30.0, 100.0));
    assert!(!cache.is_cached_for(&longer, PathStyle::Linear));
    let b = cache.length(&longer, PathStyle::Linear).unwrap();
    assert!((b - (a + 60.0)).abs() < 1e-9);

    let smooth = cache.length(&longer, PathStyle::default()).unwrap();
    assert_ne!(smooth, b);
    assert!(cache.is_cached_for(&longer, PathStyle::default()));

    cache.invalidate();
    assert!(!cache.is_cached_for(&longer, PathStyle::default()));
}
