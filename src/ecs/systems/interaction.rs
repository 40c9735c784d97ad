//! Interaction resolver: bumps, free-prop physics and the abduction state machine.
//!
//! ```text
//! Free ──overlap ∧ radius < steal_size ∧ roll(steal_chance)──▶ Held
//! Held ──remaining_life == 0──────────────────────────────────▶ Free
//! ```
//!
//! Props never interact with each other, so every prop is resolved on its own
//! against the agent's post-steering position and velocity.

use std::f64::consts::TAU;

use bevy_app::App;
use bevy_ecs::query::Without;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;

use crate::config::{AgentTuning, PropTuning, SimConfig};
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Agent, Position, Prop, PropState, Velocity};
use crate::ecs::resources::{InteractionRng, TickReport};
use crate::ecs::schedule::{MotionSet, SimTick};
use crate::model::{Bounds, PropEvent, PropEventKind, Vec2};
use crate::seed::{roll, sample_range, sample_ticks};

/// Agent state the resolver reads. Fixed for the whole pass.
#[derive(Debug, Clone, Copy)]
pub struct AgentFrame<'a> {
    pub position: Vec2,
    pub velocity: Vec2,
    pub tuning: &'a AgentTuning,
}

/// Lifecycle change produced by resolving one prop for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Stolen,
    Released,
}

/// Whether a free prop at `pos` with `radius` overlaps the agent.
///
/// The hit test deliberately uses only `hit_fraction` of the agent radius.
pub fn overlaps(pos: Vec2, radius: f64, agent: &AgentFrame, tuning: &PropTuning) -> bool {
    pos.distance(agent.position) < radius + agent.tuning.radius * tuning.hit_fraction
}

/// Push a prop away from the agent and hand it a share of the agent's velocity.
pub fn bump(pos: Vec2, vel: &mut Vec2, agent: &AgentFrame, tuning: &PropTuning) {
    let away = pos.direction_from(agent.position);
    *vel += away * tuning.bump_push + agent.velocity * tuning.momentum_transfer;
}

/// Integrate, apply friction, then bounce off the padded walls.
pub fn integrate_free(pos: &mut Vec2, vel: &mut Vec2, tuning: &PropTuning, bounds: &Bounds) {
    *pos += *vel;
    *vel *= tuning.friction;
    bounds.confine(pos, vel, tuning.wall_padding, tuning.wall_restitution);
}

/// Resolve one prop for one tick.
#[allow(clippy::too_many_arguments)]
pub fn resolve_prop<R: Rng + ?Sized>(
    prop: &Prop,
    state: &mut PropState,
    pos: &mut Vec2,
    vel: &mut Vec2,
    agent: &AgentFrame,
    tuning: &PropTuning,
    bounds: &Bounds,
    rng: &mut R,
) -> Transition {
    match *state {
        PropState::Held {
            orbit_angle,
            orbit_radius,
            remaining_life,
        } => {
            let orbit_angle = orbit_angle + tuning.orbit_step;
            let remaining_life = remaining_life.saturating_sub(1);
            *pos = agent.position.orbit(orbit_angle, orbit_radius);

            if remaining_life == 0 {
                *state = PropState::Free;
                *vel = Vec2::new(
                    sample_range(rng, tuning.release_speed_range),
                    sample_range(rng, tuning.release_speed_range),
                );
                // Released where the orbit left it; only pulled back in if
                // the orbit had swung past a wall.
                bounds.confine(pos, vel, tuning.wall_padding, tuning.wall_restitution);
                Transition::Released
            } else {
                *state = PropState::Held {
                    orbit_angle,
                    orbit_radius,
                    remaining_life,
                };
                Transition::None
            }
        }
        PropState::Free => {
            let mut stolen = false;
            if overlaps(*pos, prop.radius, agent, tuning) {
                bump(*pos, vel, agent, tuning);
                stolen = prop.radius < agent.tuning.steal_size
                    && roll(rng, agent.tuning.steal_chance);
            }

            // Bumped and even freshly stolen props still take this tick's free physics.
            integrate_free(pos, vel, tuning, bounds);

            if !stolen {
                return Transition::None;
            }
            let orbit_angle = sample_range(rng, (0.0, TAU));
            let orbit_radius = sample_range(rng, tuning.orbit_radius_range);
            let remaining_life = sample_ticks(rng, tuning.life_range);
            *state = PropState::Held {
                orbit_angle,
                orbit_radius,
                remaining_life,
            };
            *pos = agent.position.orbit(orbit_angle, orbit_radius);
            Transition::Stolen
        }
    }
}

pub fn add_interaction_systems(app: &mut App) {
    app.add_systems(SimTick, resolve_interactions.in_set(MotionSet::Interaction));
}

#[allow(clippy::type_complexity)]
fn resolve_interactions(
    clock: Res<SimClock>,
    config: Res<SimConfig>,
    mut rng: ResMut<InteractionRng>,
    mut report: ResMut<TickReport>,
    agents: Query<(&Position, &Velocity, &Agent), Without<Prop>>,
    mut props: Query<(&Prop, &mut PropState, &mut Position, &mut Velocity), Without<Agent>>,
) {
    let Ok((agent_pos, agent_vel, agent)) = agents.single() else {
        return;
    };
    let frame = AgentFrame {
        position: agent_pos.0,
        velocity: agent_vel.0,
        tuning: &agent.tuning,
    };
    let rng = &mut rng.0;

    for (prop, mut state, mut pos, mut vel) in props.iter_mut() {
        let transition = resolve_prop(
            prop,
            &mut state,
            &mut pos.0,
            &mut vel.0,
            &frame,
            &config.props,
            &config.bounds,
            rng,
        );
        let kind = match transition {
            Transition::None => continue,
            Transition::Stolen => PropEventKind::Stolen,
            Transition::Released => PropEventKind::Released,
        };
        tracing::debug!(
            tick = clock.tick_count,
            prop = prop.index,
            radius = prop.radius,
            position = %pos.0,
            "prop {:?}",
            kind
        );
        report.record(PropEvent {
            tick: clock.tick_count,
            kind,
            prop: prop.index,
            position: pos.0,
        });
    }
}
