use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out one independent generator per request.
///
/// Handles are never shared between requests, so concurrent handlers do not
/// contend on (or corrupt) a common RNG state.
#[derive(Debug)]
pub struct RandomnessSource {
    seed: Option<u64>,
    issued: AtomicU64,
}

impl RandomnessSource {
    /// Every handle is seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            issued: AtomicU64::new(0),
        }
    }

    /// The n-th handle is seeded with `seed + n`: the sequence of handles is
    /// reproducible, while each handle still yields its own stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            issued: AtomicU64::new(0),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn handle(&self) -> StdRng {
        let ordinal = self.issued.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(ordinal)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
}
