//! Randomly chosen acknowledgement phrases.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ACKNOWLEDGEMENTS;
use crate::ports::AcknowledgementSource;

/// Picks one of the stock phrases uniformly at random.
#[derive(Debug)]
pub struct RandomAcknowledgements {
    rng: Mutex<StdRng>,
}

impl RandomAcknowledgements {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAcknowledgements {
    fn default() -> Self {
        Self::new()
    }
}

impl AcknowledgementSource for RandomAcknowledgements {
    fn next_acknowledgement(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        ACKNOWLEDGEMENTS
            .choose(&mut *rng)
            .copied()
            .unwrap_or(ACKNOWLEDGEMENTS[0])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_a_stock_phrase() {
        let source = RandomAcknowledgements::new();
        for _ in 0..50 {
            let phrase = source.next_acknowledgement();
            assert!(ACKNOWLEDGEMENTS.contains(&phrase.as_str()));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let a = RandomAcknowledgements::seeded(7);
        let b = RandomAcknowledgements::seeded(7);

        let first: Vec<String> = (0..10).map(|_| a.next_acknowledgement()).collect();
        let second: Vec<String> = (0..10).map(|_| b.next_acknowledgement()).collect();

        assert_eq!(first, second);
    }
}
