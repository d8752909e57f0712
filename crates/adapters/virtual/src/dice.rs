//! Source of randomness for the simulation rules.

use rand::Rng;
use rand::rngs::StdRng;

/// Uniform integer source.
///
/// Every simulation decision goes through this trait so tests can script
/// the exact draws a tick will see.
pub trait Dice: Send {
    /// Uniform integer in `[min, max)`.
    fn roll(&mut self, min: u32, max: u32) -> u32;
}

impl Dice for StdRng {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        self.random_range(min..max)
    }
}

/// Dice that replays a fixed sequence of draws.
#[cfg(test)]
pub(crate) struct ScriptedDice {
    rolls: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedDice {
    pub(crate) fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let value = self
            .rolls
            .pop_front()
            .expect("scripted dice ran out of rolls");
        assert!(
            (min..max).contains(&value),
            "scripted roll {value} outside {min}..{max}"
        );
        value
    }
}
