//! Dice — the injectable uniform randomness source
//!
//! Every probability-driven decision in the crate (mutation, inheritance
//! mode, species roll, gender ratio) draws from a `Dice`. Any `rand::Rng`
//! is a `Dice`, so production code passes `rand::thread_rng()` and tests
//! pass a seeded `StdRng` or a scripted sequence.

use rand::Rng;

/// Uniform randomness source
pub trait Dice {
    /// Uniform integer in `[0, upper)`. `upper` must be non-zero.
    fn roll(&mut self, upper: u32) -> u32;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper.max(1))
    }

    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, for forcing specific outcomes.
///
/// Each `roll(upper)` returns the next scripted value reduced modulo
/// `upper`; once exhausted it keeps returning `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    cursor: usize,
    fallback: u32,
}

impl ScriptedDice {
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
            fallback: 0,
        }
    }

    /// Value returned after the script runs out
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of rolls consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_raw(&mut self) -> u32 {
        match self.rolls.get(self.cursor) {
            Some(v) => {
                self.cursor += 1;
                *v
            }
            None => self.fallback,
        }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, upper: u32) -> u32 {
        self.next_raw() % upper.max(1)
    }

    fn unit(&mut self) -> f64 {
        // scripted as percent
        (self.next_raw() % 100) as f64 / 100.0
    }
}
