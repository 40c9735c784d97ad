//! Fear model: threat proximity → intensity in `[0, 1]`.

use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::components::{Agent, Position};
use crate::ecs::resources::{Fear, ThreatPosition, TickReport};
use crate::ecs::schedule::{MotionSet, SimTick};
use crate::model::Vec2;

/// Fear felt by an agent at `agent` from a threat at `threat`.
///
/// Linear falloff `1 - d / fear_radius` clamped to `[0, 1]`, then squared so
/// it stays near zero until the threat is close and rises sharply after.
/// Zero at or beyond `fear_radius`, one only when the threat sits exactly on
/// the agent.
pub fn fear(agent: Vec2, threat: Vec2, fear_radius: f64) -> f64 {
    let d = agent.distance(threat);
    if d.is_nan() || fear_radius.is_nan() || fear_radius <= 0.0 {
        return 0.0;
    }
    let linear = (1.0 - d / fear_radius).clamp(0.0, 1.0);
    linear * linear
}

pub fn add_fear_systems(app: &mut App) {
    app.add_systems(SimTick, compute_fear.in_set(MotionSet::Fear));
}

fn compute_fear(
    agents: Query<(&Position, &Agent)>,
    threat: Res<ThreatPosition>,
    mut current: ResMut<Fear>,
    mut report: ResMut<TickReport>,
) {
    let value = agents
        .single()
        .map(|(pos, agent)| fear(pos.0, threat.0, agent.tuning.fear_radius))
        .unwrap_or(0.0);
    current.0 = value;
    report.fear = value;
}
