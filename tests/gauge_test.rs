//! Ring gauge mapping properties

use std::f64::consts::PI;

use solvegauge::Difficulty;
use solvegauge::gauge::{CategoryCount, RingLayout, RingSpec, map_rings};

fn spec(easy: (u64, u64), medium: (u64, u64), hard: (u64, u64)) -> RingSpec {
    RingSpec::new(
        CategoryCount::new(easy.0, easy.1),
        CategoryCount::new(medium.0, medium.1),
        CategoryCount::new(hard.0, hard.1),
    )
}

#[test]
fn test_mapping_is_deterministic() {
    let input = spec((80, 828), (30, 1732), (10, 758));
    let layout = RingLayout::default();

    let first = map_rings(&input, &layout);
    let second = map_rings(&input, &layout);

    for (a, b) in first.rings.iter().zip(second.rings.iter()) {
        assert_eq!(a.dash_length.to_bits(), b.dash_length.to_bits());
        assert_eq!(a.gap_length.to_bits(), b.gap_length.to_bits());
        assert_eq!(a.circumference.to_bits(), b.circumference.to_bits());
    }
}

#[test]
fn test_nothing_solved_gives_full_gap() {
    let gauge = map_rings(&spec((0, 100), (0, 100), (0, 100)), &RingLayout::default());
    for ring in &gauge.rings {
        assert_eq!(ring.dash_length, 0.0);
        assert_eq!(ring.gap_length, ring.circumference);
    }
}

#[test]
fn test_everything_solved_gives_full_dash() {
    let gauge = map_rings(&spec((50, 50), (50, 50), (50, 50)), &RingLayout::default());
    for ring in &gauge.rings {
        assert_eq!(ring.dash_length, ring.circumference);
        assert_eq!(ring.gap_length, 0.0);
    }
}

#[test]
fn test_reference_scenario_at_radius_42() {
    let gauge = map_rings(
        &spec((80, 828), (30, 1732), (10, 758)),
        &RingLayout {
            base_radius: 42.0,
            ring_offset: 7.0,
        },
    );
    let easy = gauge.ring(Difficulty::Easy);

    assert!((easy.circumference - 263.89).abs() < 0.01);
    assert!((easy.circumference - 2.0 * PI * 42.0).abs() < 1e-9);
    assert!((easy.dash_length - 25.5).abs() < 0.01);
    assert!((easy.dash_length + easy.gap_length - easy.circumference).abs() < 1e-9);
}

#[test]
fn test_rings_keep_easy_medium_hard_order() {
    let gauge = map_rings(&spec((1, 1), (1, 1), (1, 1)), &RingLayout::default());
    let order: Vec<_> = gauge.rings.iter().map(|r| r.difficulty).collect();
    assert_eq!(
        order,
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    );
    assert!(gauge.rings[0].radius > gauge.rings[1].radius);
    assert!(gauge.rings[1].radius > gauge.rings[2].radius);
}

/// Documents current behavior: solved > total is not clamped, so the dash
/// runs past the ring and the gap goes negative.
#[test]
fn test_solved_above_total_is_not_clamped() {
    let gauge = map_rings(&spec((150, 100), (0, 1), (0, 1)), &RingLayout::default());
    let easy = gauge.ring(Difficulty::Easy);

    assert!((easy.percentage - 1.5).abs() < 1e-12);
    assert!(easy.dash_length > easy.circumference);
    assert!(easy.gap_length < 0.0);
}

#[test]
fn test_custom_layout_changes_inner_radii() {
    let layout = RingLayout {
        base_radius: 60.0,
        ring_offset: 10.0,
    };
    let gauge = map_rings(&spec((0, 1), (0, 1), (0, 1)), &layout);
    assert_eq!(gauge.ring(Difficulty::Hard).radius, 40.0);
    assert!((gauge.ring(Difficulty::Hard).circumference - 80.0 * PI).abs() < 1e-9);
}
