use bevy_app::App;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::{SimClock, advance_clock};
use super::resources::{
    Fear, InteractionRng, NoiseSource, PendingReset, Score, SimRng, ThreatPosition, TickReport,
    begin_tick_report, distribute_rng,
};
use super::schedule::{SimPhase, configure_sim_schedule};
use crate::coherent::PerlinNoise;
use crate::config::SimConfig;

/// Build a headless Bevy app with clock, core resources and the tick schedule.
///
/// No entities are spawned and no domain systems are installed; add
/// [`SimPlugin`](super::plugin::SimPlugin) for those.
///
/// Manual tick control:
/// ```no_run
/// # use panic_sim::config::SimConfig;
/// # use panic_sim::ecs::{build_sim_app, SimPlugin, SimTick};
/// let mut app = build_sim_app(SimConfig::default());
/// app.add_plugins(SimPlugin);
/// for _ in 0..600 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(config: SimConfig) -> App {
    build_sim_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with the multi-threaded executor.
///
/// Every motion set is chained, so results match the single-threaded build.
pub fn build_sim_app_parallel(config: SimConfig) -> App {
    build_sim_app_with_executor(config, ExecutorKind::MultiThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_sim_app_with_executor(config: SimConfig, executor: ExecutorKind) -> App {
    let config = config.sanitized();
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new(config.time_step));
    app.insert_resource(SimRng::new(config.seed));
    app.insert_resource(NoiseSource::new(PerlinNoise::new(config.noise_seed)));
    app.insert_resource(ThreatPosition(config.agent_start()));
    app.init_resource::<InteractionRng>();
    app.init_resource::<Fear>();
    app.init_resource::<Score>();
    app.init_resource::<PendingReset>();
    app.init_resource::<TickReport>();
    app.insert_resource(config);

    // Clock first, then everything keyed off the new tick.
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(
        (advance_clock, distribute_rng, begin_tick_report)
            .chain()
            .in_set(SimPhase::PreUpdate),
    );
    app.add_schedule(schedule);
    app
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::ecs::schedule::SimTick;

    #[test]
    fn app_builds_without_panic() {
        let _app = build_sim_app(SimConfig::default());
    }

    #[test]
    fn clock_starts_at_zero() {
        let app = build_sim_app(SimConfig::default());
        let clock = app.world().resource::<SimClock>();
        assert_eq!(clock.tick_count, 0);
        assert_eq!(clock.time, 0.0);
    }

    #[test]
    fn single_tick_advances_one_step() {
        let mut app = build_sim_app(SimConfig::default());
        app.world_mut().run_schedule(SimTick);
        let clock = app.world().resource::<SimClock>();
        assert_eq!(clock.tick_count, 1);
        assert!((clock.time - 0.01).abs() < 1e-12);
    }

    #[test]
    fn report_tracks_tick() {
        let mut app = build_sim_app(SimConfig::default());
        for _ in 0..3 {
            app.world_mut().run_schedule(SimTick);
        }
        assert_eq!(app.world().resource::<TickReport>().tick, 3);
    }

    #[test]
    fn interaction_rng_reseeded_per_tick() {
        use rand::Rng;

        let draw = |ticks: usize| {
            let mut app = build_sim_app(SimConfig::default());
            for _ in 0..ticks {
                app.world_mut().run_schedule(SimTick);
            }
            app.world_mut()
                .resource_mut::<InteractionRng>()
                .0
                .random::<u64>()
        };
        assert_eq!(draw(4), draw(4));
        assert_ne!(draw(4), draw(5));
    }

    #[test]
    fn sanitizes_config_on_build() {
        let mut config = SimConfig::default();
        config.time_step = -1.0;
        let app = build_sim_app(config);
        assert_eq!(app.world().resource::<SimConfig>().time_step, 0.01);
    }

    #[test]
    fn phase_ordering_respected() {
        let log = Arc::new(Mutex::new(Vec::<&'static str>::new()));

        let log1 = log.clone();
        let log2 = log.clone();
        let log3 = log.clone();
        let log4 = log.clone();

        let mut app = build_sim_app(SimConfig::default());
        app.add_systems(
            SimTick,
            (move || {
                log1.lock().unwrap().push("pre_update");
            })
            .in_set(SimPhase::PreUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log2.lock().unwrap().push("update");
            })
            .in_set(SimPhase::Update),
        );
        app.add_systems(
            SimTick,
            (move || {
                log3.lock().unwrap().push("post_update");
            })
            .in_set(SimPhase::PostUpdate),
        );
        app.add_systems(
            SimTick,
            (move || {
                log4.lock().unwrap().push("last");
            })
            .in_set(SimPhase::Last),
        );

        app.world_mut().run_schedule(SimTick);

        let entries = log.lock().unwrap();
        let pre_idx = entries.iter().position(|&s| s == "pre_update").unwrap();
        let update_idx = entries.iter().position(|&s| s == "update").unwrap();
        let post_idx = entries.iter().position(|&s| s == "post_update").unwrap();
        let last_idx = entries.iter().position(|&s| s == "last").unwrap();
        assert!(pre_idx < update_idx);
        assert!(update_idx < post_idx);
        assert!(post_idx < last_idx);
    }
}
