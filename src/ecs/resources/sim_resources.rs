use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::coherent::{CoherentNoise, PerlinNoise};
use crate::ecs::clock::SimClock;
use crate::model::Vec2;
use crate::seed::derive_domain_seed;

/// Deterministic RNG for spawning props at initialization and reset.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }
}

/// RNG for steal trials and held-prop sampling. Reseeded every tick by [`distribute_rng`].
#[derive(Resource)]
pub struct InteractionRng(pub SmallRng);

impl Default for InteractionRng {
    fn default() -> Self {
        Self(SmallRng::seed_from_u64(0))
    }
}

/// Exclusive system that reseeds [`InteractionRng`] from the global seed and the tick.
/// Runs in `SimPhase::PreUpdate` after the clock has advanced.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let tick = world.resource::<SimClock>().tick_count;
    world.resource_mut::<InteractionRng>().0 =
        SmallRng::seed_from_u64(derive_domain_seed(seed, "interaction", tick));
}

/// Where the threat (pointer) is this tick. Written by the driver between ticks.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ThreatPosition(pub Vec2);

/// Fear computed once per tick, shared by steering and any cosmetic reader.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Fear(pub f64);

/// Number of props stolen since the last reset.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(pub u64);

/// Edge-triggered reset request, consumed at the start of the next tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingReset(pub bool);

/// Coherent noise capability behind the agent's shake.
#[derive(Resource)]
pub struct NoiseSource(pub Box<dyn CoherentNoise>);

impl NoiseSource {
    pub fn new(noise: impl CoherentNoise + 'static) -> Self {
        Self(Box::new(noise))
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.0.sample(x, y)
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(PerlinNoise::default())
    }
}
