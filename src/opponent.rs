use crate::rules::Choice;
use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};

/// Whatever picks the bot's shape each round.
pub trait Opponent {
    fn choose(&mut self) -> Choice;
}

impl<F: FnMut() -> Choice> Opponent for F {
    fn choose(&mut self) -> Choice {
        self()
    }
}

pub struct RandomOpponent<R: Rng> {
    rng: R,
}

impl RandomOpponent<ThreadRng> {
    pub fn new() -> Self {
        RandomOpponent {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomOpponent<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomOpponent<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range(0..Choice::ALL.len())]
    }
}
