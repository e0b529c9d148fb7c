//! Pluggable randomness for observation-triggered collapse.
//!
//! The survival draw is the only non-deterministic step in the rules, so it
//! sits behind one trait. Production uses a seedable `StdRng`; tests can
//! script exact draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait CollapseSource: Send {
    /// A value in `[0, 1)`.
    fn draw_probability(&mut self) -> f64;
}

pub struct SeededCollapse {
    rng: StdRng,
}

impl SeededCollapse {
    /// Seeded from `seed` when given, otherwise from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CollapseSource for SeededCollapse {
    fn draw_probability(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedCollapse {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedCollapse {
    pub fn new(draws: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback,
        }
    }

    /// Every observed piece survives.
    pub fn always_survive() -> Self {
        Self::new([], 0.0)
    }

    /// Every observed piece is captured.
    pub fn never_survive() -> Self {
        Self::new([], 0.999)
    }
}

impl CollapseSource for ScriptedCollapse {
    fn draw_probability(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
