//! Tests for swipe classification.

use bevy::prelude::*;

use super::swipe::{classify_swipe, SwipeDirection, SwipeGesture, SwipeTracker};

const THRESHOLD: f32 = 500.0;

#[test]
fn test_below_threshold_emits_nothing() {
    // 20² + 10² = 500 → уже НЕ меньше порога, поэтому берём чуть меньше
    let deltas = [
        Vec2::ZERO,
        Vec2::new(10.0, 0.0),
        Vec2::new(0.0, -22.0),
        Vec2::new(15.0, 15.0),
        Vec2::new(-19.9, 10.0),
    ];

    for delta in deltas {
        assert!(delta.length_squared() < THRESHOLD);
        assert_eq!(classify_swipe(delta, THRESHOLD), None, "delta {:?}", delta);
    }
}

#[test]
fn test_threshold_is_inclusive() {
    // length_squared == threshold → уже жест
    let gesture = classify_swipe(Vec2::new(20.0, 10.0), THRESHOLD);
    assert!(gesture.is_some());
}

#[test]
fn test_vertical_swipe_follows_sign_of_y() {
    let up = classify_swipe(Vec2::new(0.0, 100.0), THRESHOLD).unwrap();
    assert_eq!(up.vertical, Some(SwipeDirection::Forward));
    assert_eq!(up.horizontal, None);

    let down = classify_swipe(Vec2::new(-30.0, -100.0), THRESHOLD).unwrap();
    assert_eq!(down.vertical, Some(SwipeDirection::Back));
    assert_eq!(down.horizontal, None);
}

#[test]
fn test_horizontal_swipe_follows_sign_of_x() {
    let right = classify_swipe(Vec2::new(100.0, 20.0), THRESHOLD).unwrap();
    assert_eq!(right.horizontal, Some(SwipeDirection::Right));
    assert_eq!(right.vertical, None);

    let left = classify_swipe(Vec2::new(-100.0, -40.0), THRESHOLD).unwrap();
    assert_eq!(left.horizontal, Some(SwipeDirection::Left));
    assert_eq!(left.vertical, None);
}

#[test]
fn test_band_sweep_matches_axis_rule() {
    // Обходим круг с шагом 1°: каждая компонента в (-0.5, 0.5) → своя ось
    for degrees in 0..360 {
        let angle = (degrees as f32).to_radians();
        let delta = Vec2::new(angle.cos(), angle.sin()) * 100.0;
        let gesture = classify_swipe(delta, THRESHOLD).unwrap();
        // Ожидание считаем от того же нормализованного вектора (границы 30°/60° чувствительны к f32)
        let unit = delta.normalize();

        let x_in_band = unit.x > -0.5 && unit.x < 0.5;
        let y_in_band = unit.y > -0.5 && unit.y < 0.5;

        if x_in_band {
            let expected = if unit.y > 0.0 { SwipeDirection::Forward } else { SwipeDirection::Back };
            assert_eq!(gesture.vertical, Some(expected), "angle {}°", degrees);
        } else {
            assert_eq!(gesture.vertical, None, "angle {}°", degrees);
        }

        if y_in_band {
            let expected = if unit.x > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left };
            assert_eq!(gesture.horizontal, Some(expected), "angle {}°", degrees);
        } else {
            assert_eq!(gesture.horizontal, None, "angle {}°", degrees);
        }
    }
}

#[test]
fn test_diagonal_emits_nothing() {
    let gesture = classify_swipe(Vec2::new(100.0, 100.0), THRESHOLD).unwrap();
    assert!(gesture.is_empty());
    assert_eq!(gesture.directions().count(), 0);
}

#[test]
fn test_diagonal_moves_anchor() {
    let mut tracker = SwipeTracker::default();
    tracker.sample(Vec2::new(100.0, 100.0), THRESHOLD);

    let gesture = tracker.sample(Vec2::new(200.0, 200.0), THRESHOLD).unwrap();
    assert!(gesture.is_empty());
    assert_eq!(tracker.anchor, Some(Vec2::new(200.0, 200.0)));
}

#[test]
fn test_still_pointer_with_zero_threshold_emits_nothing() {
    // Нулевой порог пропускает нулевое смещение, но направления у него нет
    let gesture = classify_swipe(Vec2::ZERO, 0.0).unwrap();
    assert!(gesture.is_empty());

    let mut tracker = SwipeTracker::default();
    tracker.sample(Vec2::new(50.0, 50.0), 0.0);
    for _ in 0..3 {
        let gesture = tracker.sample(Vec2::new(50.0, 50.0), 0.0).unwrap();
        assert_eq!(gesture.directions().count(), 0);
    }
}

#[test]
fn test_both_axes_emit_vertical_first() {
    let gesture = SwipeGesture {
        vertical: Some(SwipeDirection::Forward),
        horizontal: Some(SwipeDirection::Left),
    };
    let directions: Vec<_> = gesture.directions().collect();
    assert_eq!(directions, vec![SwipeDirection::Forward, SwipeDirection::Left]);
}

#[test]
fn test_tracker_first_sample_sets_anchor() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(tracker.anchor, None);

    assert_eq!(tracker.sample(Vec2::new(100.0, 100.0), THRESHOLD), None);
    assert_eq!(tracker.anchor, Some(Vec2::new(100.0, 100.0)));
}

#[test]
fn test_tracker_accumulates_small_moves() {
    let mut tracker = SwipeTracker::default();
    tracker.sample(Vec2::new(100.0, 100.0), THRESHOLD);

    // 10px за тик — по отдельности меньше порога, anchor не двигается
    assert_eq!(tracker.sample(Vec2::new(110.0, 100.0), THRESHOLD), None);
    assert_eq!(tracker.sample(Vec2::new(120.0, 100.0), THRESHOLD), None);
    assert_eq!(tracker.anchor, Some(Vec2::new(100.0, 100.0)));

    // Суммарно 30px → 900 ≥ 500 → жест вправо
    let gesture = tracker.sample(Vec2::new(130.0, 100.0), THRESHOLD).unwrap();
    assert_eq!(gesture.horizontal, Some(SwipeDirection::Right));
    assert_eq!(tracker.anchor, Some(Vec2::new(130.0, 100.0)));
}

#[test]
fn test_tracker_reset_clears_anchor() {
    let mut tracker = SwipeTracker::default();
    tracker.sample(Vec2::new(5.0, 5.0), THRESHOLD);
    tracker.reset();
    assert_eq!(tracker.anchor, None);
}

#[test]
fn test_direction_vectors_are_axis_aligned_units() {
    for direction in [
        SwipeDirection::Forward,
        SwipeDirection::Back,
        SwipeDirection::Left,
        SwipeDirection::Right,
    ] {
        let v = direction.to_vec3();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }
    assert_eq!(SwipeDirection::Forward.to_vec3(), -SwipeDirection::Back.to_vec3());
    assert_eq!(SwipeDirection::Right.to_vec3(), -SwipeDirection::Left.to_vec3());
}
