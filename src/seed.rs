use std::hash::{DefaultHasher, Hash, Hasher};

use rand::Rng;

/// Derive a deterministic per-tick seed from the global seed, a domain label and the tick.
pub fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Uniform sample from `[lo, hi)`.
///
/// An empty or inverted range does not panic: it yields the midpoint.
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

/// Uniform tick count from `[lo, hi)`. An empty range yields `lo`.
pub fn sample_ticks<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (u32, u32)) -> u32 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

/// One Bernoulli trial against `chance` using a uniform draw from `[0, 1)`.
///
/// A chance of 1.0 always succeeds and 0.0 never does.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.random::<f64>() < chance
}
