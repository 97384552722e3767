//! Mapping solved/total counts onto ring stroke lengths

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, StatsResult};

/// Radius of the outermost (easy) ring in gauge units
pub const DEFAULT_BASE_RADIUS: f64 = 42.0;

/// Radius step between adjacent rings
pub const DEFAULT_RING_OFFSET: f64 = 7.0;

/// Ring geometry: ring `k` (0 = outermost) has radius `base_radius - k * ring_offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingLayout {
    #[serde(default = "default_base_radius")]
    pub base_radius: f64,
    #[serde(default = "default_ring_offset")]
    pub ring_offset: f64,
}

fn default_base_radius() -> f64 {
    DEFAULT_BASE_RADIUS
}

fn default_ring_offset() -> f64 {
    DEFAULT_RING_OFFSET
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_BASE_RADIUS,
            ring_offset: DEFAULT_RING_OFFSET,
        }
    }
}

impl RingLayout {
    /// Radius of ring `index`, counted from the outside
    pub fn radius(&self, index: usize) -> f64 {
        self.base_radius - index as f64 * self.ring_offset
    }
}

/// One (solved, total) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub solved: u64,
    pub total: u64,
}

impl CategoryCount {
    pub fn new(solved: u64, total: u64) -> Self {
        Self { solved, total }
    }

    /// `solved / total`, 0 when `total` is 0.
    ///
    /// Not clamped: `solved > total` yields a value above 1.
    pub fn fraction(&self) -> f64 {
        if self.total > 0 {
            self.solved as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

/// Gauge input in fixed category order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSpec {
    pub easy: CategoryCount,
    pub medium: CategoryCount,
    pub hard: CategoryCount,
}

impl RingSpec {
    pub fn new(easy: CategoryCount, medium: CategoryCount, hard: CategoryCount) -> Self {
        Self { easy, medium, hard }
    }

    pub fn get(&self, difficulty: Difficulty) -> CategoryCount {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl From<&StatsResult> for RingSpec {
    fn from(stats: &StatsResult) -> Self {
        let count = |d: Difficulty| CategoryCount::new(stats.solved(d), stats.total(d));
        Self::new(
            count(Difficulty::Easy),
            count(Difficulty::Medium),
            count(Difficulty::Hard),
        )
    }
}

/// Stroke parameters for one ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingArc {
    pub difficulty: Difficulty,
    pub radius: f64,
    /// `2πr` of this ring
    pub circumference: f64,
    pub percentage: f64,
    pub dash_length: f64,
    pub gap_length: f64,
    /// Quarter-turn start offset applied by the renderer
    pub dash_offset: f64,
}

impl RingArc {
    /// Value for an SVG `stroke-dasharray` attribute
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.dash_length, self.gap_length)
    }
}

/// Stroke parameters for all three rings, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGauge {
    pub rings: [RingArc; 3],
}

impl RingGauge {
    pub fn ring(&self, difficulty: Difficulty) -> &RingArc {
        match difficulty {
            Difficulty::Easy => &self.rings[0],
            Difficulty::Medium => &self.rings[1],
            Difficulty::Hard => &self.rings[2],
        }
    }
}

/// Map three (solved, total) pairs onto a concentric gauge.
///
/// Each ring splits its own circumference; rings never share one.
pub fn map_rings(spec: &RingSpec, layout: &RingLayout) -> RingGauge {
    let arc = |index: usize, difficulty: Difficulty| {
        let radius = layout.radius(index);
        let circumference = 2.0 * PI * radius;
        let percentage = spec.get(difficulty).fraction();
        let dash_length = circumference * percentage;
        RingArc {
            difficulty,
            radius,
            circumference,
            percentage,
            dash_length,
            gap_length: circumference - dash_length,
            dash_offset: circumference / 4.0,
        }
    };

    RingGauge {
        rings: [
            arc(0, Difficulty::Easy),
            arc(1, Difficulty::Medium),
            arc(2, Difficulty::Hard),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(easy: (u64, u64), medium: (u64, u64), hard: (u64, u64)) -> RingSpec {
        RingSpec::new(
            CategoryCount::new(easy.0, easy.1),
            CategoryCount::new(medium.0, medium.1),
            CategoryCount::new(hard.0, hard.1),
        )
    }

    #[test]
    fn test_radii_step_inwards() {
        let layout = RingLayout::default();
        assert_eq!(layout.radius(0), 42.0);
        assert_eq!(layout.radius(1), 35.0);
        assert_eq!(layout.radius(2), 28.0);
    }

    #[test]
    fn test_each_ring_uses_own_circumference() {
        let gauge = map_rings(&spec((1, 2), (1, 2), (1, 2)), &RingLayout::default());
        let [easy, medium, hard] = gauge.rings;
        assert!((easy.circumference - 2.0 * PI * 42.0).abs() < 1e-9);
        assert!((medium.circumference - 2.0 * PI * 35.0).abs() < 1e-9);
        assert!((hard.circumference - 2.0 * PI * 28.0).abs() < 1e-9);
        assert!((medium.dash_length - medium.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_empty_arc() {
        let gauge = map_rings(&spec((5, 0), (0, 0), (0, 0)), &RingLayout::default());
        let easy = gauge.ring(Difficulty::Easy);
        assert_eq!(easy.percentage, 0.0);
        assert_eq!(easy.dash_length, 0.0);
        assert_eq!(easy.gap_length, easy.circumference);
    }

    #[test]
    fn test_dash_offset_is_quarter_turn() {
        let gauge = map_rings(&spec((0, 1), (0, 1), (0, 1)), &RingLayout::default());
        for ring in &gauge.rings {
            assert!((ring.dash_offset * 4.0 - ring.circumference).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dash_array_format() {
        let gauge = map_rings(&spec((0, 10), (0, 10), (0, 10)), &RingLayout::default());
        let hard = gauge.ring(Difficulty::Hard);
        assert_eq!(hard.dash_array(), format!("0 {}", hard.circumference));
    }

    #[test]
    fn test_spec_from_stats_keeps_category_order() {
        let stats = StatsResult {
            total_solved: 6,
            easy_solved: 1,
            medium_solved: 2,
            hard_solved: 3,
            easy_total: 10,
            medium_total: 20,
            hard_total: 30,
            acceptance_rate_percent: 0.0,
            ranking: 0,
        };
        let spec = RingSpec::from(&stats);
        assert_eq!(spec.easy, CategoryCount::new(1, 10));
        assert_eq!(spec.medium, CategoryCount::new(2, 20));
        assert_eq!(spec.hard, CategoryCount::new(3, 30));
    }
}
