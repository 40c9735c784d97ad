//! Agent steering and integration.
//!
//! Per tick, in order:
//! 1. damp velocity
//! 2. add the flee push away from the threat when afraid
//! 3. clamp speed to `max_speed`
//! 4. integrate position
//! 5. add the fear-scaled coherent shake
//! 6. bounce off the padded walls
//!
//! Without fear there is no drift: the agent just decays to rest.

use bevy_app::App;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res};

use crate::coherent::CoherentNoise;
use crate::config::{AgentTuning, SimConfig};
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Agent, Position, Velocity};
use crate::ecs::resources::{Fear, NoiseSource, ThreatPosition};
use crate::ecs::schedule::{MotionSet, SimTick};
use crate::model::{Bounds, Vec2, WallHit};

/// Fear at or below this adds no flee push.
pub const FEAR_EPSILON: f64 = 0.001;

/// Positional shake for this tick.
///
/// Each axis samples its own noise row at `time * jitter_time_scale`, centred
/// on zero and scaled by `jitter * fear`, so the shake vanishes without fear.
pub fn shake_offset(noise: &dyn CoherentNoise, time: f64, fear: f64, tuning: &AgentTuning) -> Vec2 {
    let t = time * tuning.jitter_time_scale;
    let amplitude = tuning.jitter * fear;
    Vec2::new(
        (noise.sample(tuning.jitter_seeds.0, t) - 0.5) * amplitude,
        (noise.sample(tuning.jitter_seeds.1, t) - 0.5) * amplitude,
    )
}

/// Advance the agent's velocity and position by one tick.
pub fn steer_agent(
    pos: &mut Vec2,
    vel: &mut Vec2,
    threat: Vec2,
    fear: f64,
    shake: Vec2,
    tuning: &AgentTuning,
    bounds: &Bounds,
) -> WallHit {
    *vel *= tuning.damping;

    if fear > FEAR_EPSILON {
        let away = pos.direction_from(threat);
        *vel += away * (tuning.accel * (1.0 + tuning.flee_intensity * fear));
    }

    *vel = vel.clamp_length(tuning.max_speed);

    *pos += *vel;
    *pos += shake;

    bounds.confine(pos, vel, tuning.wall_padding, tuning.wall_restitution)
}

pub fn add_steering_systems(app: &mut App) {
    app.add_systems(SimTick, steer.in_set(MotionSet::Steering));
}

fn steer(
    clock: Res<SimClock>,
    config: Res<SimConfig>,
    threat: Res<ThreatPosition>,
    fear: Res<Fear>,
    noise: Res<NoiseSource>,
    mut agents: Query<(&mut Position, &mut Velocity, &Agent)>,
) {
    let Ok((mut pos, mut vel, agent)) = agents.single_mut() else {
        return;
    };
    let shake = shake_offset(noise.0.as_ref(), clock.time, fear.0, &agent.tuning);
    let hit = steer_agent(
        &mut pos.0,
        &mut vel.0,
        threat.0,
        fear.0,
        shake,
        &agent.tuning,
        &config.bounds,
    );
    if hit.any() {
        tracing::trace!(tick = clock.tick_count, position = %pos.0, "agent bounced off wall");
    }
}
