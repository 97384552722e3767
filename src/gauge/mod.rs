//! Concentric ring gauge math
//!
//! Pure functions only: the same counts and layout always give the same
//! lengths, so callers recompute on every render instead of caching.

mod ring;

pub use ring::{
    CategoryCount, DEFAULT_BASE_RADIUS, DEFAULT_RING_OFFSET, RingArc, RingGauge, RingLayout,
    RingSpec, map_rings,
};
