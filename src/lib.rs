//! solvegauge - resilient problem-solving stats with a concentric ring gauge
//!
//! Two independent pieces make up the core:
//!
//! 1. **Stats fetching**: [`provider::StatsProvider`] asks an ordered list of
//!    upstream services for a user's solved-problem counts, stops at the first
//!    one that answers, and degrades to a default record plus a message when
//!    none does.
//!
//! 2. **Gauge mapping**: [`gauge::map_rings`] turns (solved, total) pairs into
//!    stroke lengths for three concentric rings, one per difficulty.
//!
//! The editable portfolio profile is reachable only through the injected
//! [`store::ProfileStore`] trait.

pub mod config;
pub mod domain;
pub mod gauge;
pub mod http;
pub mod persist;
pub mod provider;
pub mod store;

pub use domain::*;
