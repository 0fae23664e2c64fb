//! Search limits and tie-break sources.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Default thinking time per decision.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(3);

/// How long iterative deepening may keep starting new depth levels.
///
/// The limit is only consulted between depth levels: a level that has
/// started always runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Start new levels until this much wall-clock time has passed.
    Time(Duration),
    /// Run levels `0..=max_depth` regardless of time.
    Depth(u32),
}

impl Default for Budget {
    fn default() -> Self {
        Budget::Time(DEFAULT_TIME_BUDGET)
    }
}

impl Budget {
    /// Whether level `depth` may start, given when the search began.
    pub fn allows(&self, started: Instant, depth: u32) -> bool {
        match self {
            Budget::Time(limit) => started.elapsed() < *limit,
            Budget::Depth(max_depth) => depth <= *max_depth,
        }
    }
}

/// Chooses between candidates that rank exactly equal.
#[derive(Debug, Clone)]
pub enum TieBreak {
    /// Coin flip from a seedable generator.
    Random(StdRng),
    /// The candidate seen first always stays.
    KeepFirst,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Random(StdRng::from_os_rng())
    }
}

impl TieBreak {
    /// Random tie-breaks from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        TieBreak::Random(StdRng::seed_from_u64(seed))
    }

    /// Whether an equally ranked challenger replaces the incumbent.
    pub fn take_challenger(&mut self) -> bool {
        match self {
            TieBreak::Random(rng) => rng.random_bool(0.5),
            TieBreak::KeepFirst => false,
        }
    }

    /// Picks one of `options`; `None` only when `options` is empty.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        match self {
            TieBreak::Random(rng) => options.choose(rng),
            TieBreak::KeepFirst => options.first(),
        }
    }
}
