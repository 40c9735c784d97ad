use bevy_app::{App, Plugin};

use super::systems::{
    add_fear_systems, add_interaction_systems, add_reset_systems, add_scoring_systems,
    add_steering_systems,
};

/// Aggregate plugin installing fear, steering, interaction, scoring and reset.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        add_reset_systems(app);
        add_fear_systems(app);
        add_steering_systems(app);
        add_interaction_systems(app);
        add_scoring_systems(app);
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::schedule::ExecutorKind;

    use super::*;
    use crate::config::SimConfig;
    use crate::ecs::app::build_sim_app_with_executor;
    use crate::ecs::clock::SimClock;
    use crate::ecs::components::{Agent, Position, Prop, PropState};
    use crate::ecs::resources::{PendingReset, ThreatPosition};
    use crate::ecs::spawn::{scatter_props, spawn_agent, spawn_prop};
    use crate::ecs::test_helpers::{build_test_app, current_score, tick_n};
    use crate::model::Vec2;

    fn spawn_minimal_world(app: &mut App) {
        let world = app.world_mut();
        let config = world.resource::<SimConfig>().clone();
        spawn_agent(world, config.agent_start(), config.agent.clone());
        scatter_props(world);
    }

    fn greedy_config() -> SimConfig {
        let mut config = SimConfig::default();
        config.agent.steal_chance = 1.0;
        config
    }

    fn circle_threat(app: &mut App, tick: u32) {
        let t = tick as f64 * 0.05;
        app.world_mut().resource_mut::<ThreatPosition>().0 =
            Vec2::new(240.0 + t.cos() * 50.0, 160.0 + t.sin() * 40.0);
    }

    fn prop_positions(app: &mut App) -> Vec<(usize, Vec2)> {
        let world = app.world_mut();
        let mut props: Vec<(usize, Vec2)> = world
            .query::<(&Prop, &Position)>()
            .iter(world)
            .map(|(p, pos)| (p.index, pos.0))
            .collect();
        props.sort_by_key(|(i, _)| *i);
        props
    }

    #[test]
    fn sim_plugin_smoke_test() {
        let mut app = build_test_app(SimConfig::default());
        spawn_minimal_world(&mut app);
        tick_n(&mut app, 120);
        let clock = app.world().resource::<SimClock>();
        assert_eq!(clock.tick_count, 120);
    }

    #[test]
    fn steal_adds_to_score() {
        let mut app = build_test_app(greedy_config());
        let world = app.world_mut();
        spawn_agent(world, Vec2::new(240.0, 160.0), greedy_config().agent);
        spawn_prop(world, 0, 9.0, Vec2::new(245.0, 160.0), Vec2::ZERO, PropState::Free);
        world.resource_mut::<ThreatPosition>().0 = Vec2::new(-1000.0, -1000.0);

        tick_n(&mut app, 1);
        assert_eq!(current_score(&app), 1);
    }

    #[test]
    fn pending_reset_clears_score_at_tick_start() {
        let mut app = build_test_app(greedy_config());
        let world = app.world_mut();
        spawn_agent(world, Vec2::new(240.0, 160.0), greedy_config().agent);
        spawn_prop(world, 0, 9.0, Vec2::new(240.0, 160.0), Vec2::ZERO, PropState::Free);
        world.resource_mut::<ThreatPosition>().0 = Vec2::new(-1000.0, -1000.0);
        tick_n(&mut app, 1);
        assert_eq!(current_score(&app), 1);

        // Stop further steals so the post-reset score is exactly zero.
        app.world_mut().resource_mut::<PendingReset>().0 = true;
        let world = app.world_mut();
        for mut agent in world.query::<&mut Agent>().iter_mut(world) {
            agent.tuning.steal_chance = 0.0;
        }
        tick_n(&mut app, 1);
        assert!(!app.world().resource::<PendingReset>().0);
        assert_eq!(current_score(&app), 0);
        assert_eq!(prop_positions(&mut app).len(), 12);
    }

    #[test]
    fn deterministic_singlethreaded_produces_identical_worlds() {
        let run = || {
            let mut app = build_test_app(greedy_config());
            spawn_minimal_world(&mut app);
            for tick in 0..300 {
                circle_threat(&mut app, tick);
                tick_n(&mut app, 1);
            }
            (current_score(&app), prop_positions(&mut app))
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn both_executors_produce_identical_worlds() {
        let run = |executor| {
            let mut app = build_sim_app_with_executor(greedy_config(), executor);
            app.add_plugins(SimPlugin);
            spawn_minimal_world(&mut app);
            for tick in 0..300 {
                circle_threat(&mut app, tick);
                tick_n(&mut app, 1);
            }
            (current_score(&app), prop_positions(&mut app))
        };
        assert_eq!(
            run(ExecutorKind::MultiThreaded),
            run(ExecutorKind::SingleThreaded)
        );
    }
}
