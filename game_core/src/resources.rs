use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random number generator shared by every randomized reset
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system, for live play
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub missed: bool, // target reached the bottom edge
    pub caught: bool, // target overlapped motion
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.missed = false;
        self.caught = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.0.gen_range(0..1000u32), b.0.gen_range(0..1000u32));
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.missed = true;
        events.caught = true;

        events.clear();

        assert!(!events.missed);
        assert!(!events.caught);
    }
}
