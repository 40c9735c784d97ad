use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Res, ResMut};

use crate::ecs::resources::{Score, TickReport};
use crate::ecs::schedule::{SimPhase, SimTick};

pub fn add_scoring_systems(app: &mut App) {
    app.add_systems(SimTick, apply_score.in_set(SimPhase::PostUpdate));
    app.add_systems(SimTick, trace_tick.in_set(SimPhase::Last));
}

/// Fold this tick's steals into the running score. The only writer of [`Score`]
/// apart from reset.
fn apply_score(report: Res<TickReport>, mut score: ResMut<Score>) {
    score.0 += report.score_delta;
}

fn trace_tick(report: Res<TickReport>, score: Res<Score>) {
    tracing::trace!(
        tick = report.tick,
        fear = report.fear,
        score = score.0,
        stolen = report.stolen(),
        released = report.released(),
        "tick"
    );
}
