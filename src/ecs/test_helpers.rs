use bevy_app::App;

use crate::config::SimConfig;
use crate::ecs::app::build_sim_app;
use crate::ecs::plugin::SimPlugin;
use crate::ecs::resources::Score;
use crate::ecs::schedule::SimTick;

/// Build an app with every simulation system installed but nothing spawned.
pub fn build_test_app(config: SimConfig) -> App {
    let mut app = build_sim_app(config);
    app.add_plugins(SimPlugin);
    app
}

/// Run `n` ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Return the current score.
pub fn current_score(app: &App) -> u64 {
    app.world().resource::<Score>().0
}
