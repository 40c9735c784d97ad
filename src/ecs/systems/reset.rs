use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::world::World;

use crate::ecs::clock::{SimClock, advance_clock};
use crate::ecs::resources::{PendingReset, Score};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::ecs::spawn::{despawn_props, scatter_props};

/// Zero the score and regenerate every prop with the initialization rule.
///
/// The agent keeps its position and velocity.
pub fn reset_world(world: &mut World) {
    let removed = despawn_props(world);
    let spawned = scatter_props(world).len();
    world.resource_mut::<Score>().0 = 0;
    world.resource_mut::<PendingReset>().0 = false;
    tracing::info!(
        tick = world.resource::<SimClock>().tick_count,
        removed,
        spawned,
        "world reset"
    );
}

/// Exclusive system applying a reset requested between ticks.
/// Runs at the very start of `SimPhase::PreUpdate`.
pub fn apply_pending_reset(world: &mut World) {
    if world.resource::<PendingReset>().0 {
        reset_world(world);
    }
}

pub fn add_reset_systems(app: &mut App) {
    app.add_systems(
        SimTick,
        apply_pending_reset
            .before(advance_clock)
            .in_set(SimPhase::PreUpdate),
    );
}
