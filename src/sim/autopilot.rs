//! Seeded stand-in for a player
//!
//! Holds a random key combination for a random number of ticks, then picks
//! another. The same seed always produces the same input sequence, which is
//! what the headless runner and determinism tests rely on.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::TickInput;

/// Key combinations the autopilot chooses between
const COMBOS: [TickInput; 9] = [
    key(false, false, false, false),
    key(true, false, false, false),
    key(false, true, false, false),
    key(false, false, true, false),
    key(false, false, false, true),
    key(true, false, true, false),
    key(true, false, false, true),
    key(false, true, true, false),
    key(false, true, false, true),
];

const fn key(up: bool, down: bool, left: bool, right: bool) -> TickInput {
    TickInput {
        up,
        down,
        left,
        right,
    }
}

/// Random-walk input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    current: TickInput,
    hold_ticks: u32,
    min_hold: u32,
    max_hold: u32,
}

impl Autopilot {
    /// Autopilot that holds each choice for 15 to 90 ticks
    pub fn new(seed: u64) -> Self {
        Self::with_hold(seed, 15, 90)
    }

    pub fn with_hold(seed: u64, min_hold: u32, max_hold: u32) -> Self {
        let min_hold = min_hold.max(1);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: TickInput::default(),
            hold_ticks: 0,
            min_hold,
            max_hold: max_hold.max(min_hold),
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self) -> TickInput {
        if self.hold_ticks == 0 {
            self.current = COMBOS[self.rng.random_range(0..COMBOS.len())];
            self.hold_ticks = self.rng.random_range(self.min_hold..=self.max_hold);
        }
        self.hold_ticks -= 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = Autopilot::new(42);
        let mut b = Autopilot::new(42);
        for _ in 0..500 {
            assert_eq!(a.next_input(), b.next_input());
        }
    }

    #[test]
    fn test_holds_each_choice() {
        let mut pilot = Autopilot::with_hold(7, 5, 5);
        let inputs: Vec<_> = (0..20).map(|_| pilot.next_input()).collect();
        for chunk in inputs.chunks(5) {
            assert!(chunk.iter().all(|i| *i == chunk[0]));
        }
    }

    #[test]
    fn test_never_presses_opposites() {
        let mut pilot = Autopilot::with_hold(3, 1, 1);
        for _ in 0..200 {
            let input = pilot.next_input();
            assert!(!(input.up && input.down));
            assert!(!(input.left && input.right));
        }
    }
}
