use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::config::{AgentTuning, SimConfig};
use crate::ecs::components::*;
use crate::ecs::resources::SimRng;
use crate::model::Vec2;
use crate::seed::sample_range;

pub fn spawn_agent(world: &mut World, position: Vec2, tuning: AgentTuning) -> Entity {
    world
        .spawn((Agent { tuning }, Position(position), Velocity(Vec2::ZERO)))
        .id()
}

pub fn spawn_prop(
    world: &mut World,
    index: usize,
    radius: f64,
    position: Vec2,
    velocity: Vec2,
    state: PropState,
) -> Entity {
    world
        .spawn((
            Prop { index, radius },
            state,
            Position(position),
            Velocity(velocity),
        ))
        .id()
}

/// Scatter `config.prop_count` free props uniformly inside the spawn margin.
///
/// Draws from [`SimRng`], so consecutive calls (initialize, then each reset)
/// produce different layouts from the same seed.
pub fn scatter_props(world: &mut World) -> Vec<Entity> {
    let config = world.resource::<SimConfig>().clone();
    let bounds = config.bounds;
    let tuning = &config.props;
    let margin = tuning.spawn_margin;

    let drawn: Vec<(f64, Vec2, Vec2)> = {
        let mut sim_rng = world.resource_mut::<SimRng>();
        let rng = &mut sim_rng.rng;
        (0..config.prop_count)
            .map(|_| {
                let position = Vec2::new(
                    sample_range(rng, (margin, bounds.width - margin)),
                    sample_range(rng, (margin, bounds.height - margin)),
                );
                let radius = sample_range(rng, tuning.radius_range);
                let velocity = Vec2::new(
                    sample_range(rng, tuning.initial_speed_range),
                    sample_range(rng, tuning.initial_speed_range),
                );
                (radius, position, velocity)
            })
            .collect()
    };

    drawn
        .into_iter()
        .enumerate()
        .map(|(index, (radius, position, velocity))| {
            spawn_prop(world, index, radius, position, velocity, PropState::Free)
        })
        .collect()
}

/// Remove every prop from the world. Returns how many were removed.
pub fn despawn_props(world: &mut World) -> usize {
    let props: Vec<Entity> = world
        .query_filtered::<Entity, With<Prop>>()
        .iter(world)
        .collect();
    for &entity in &props {
        world.despawn(entity);
    }
    props.len()
}
