//! Owned simulation handle: the surface an external frame driver talks to.
//!
//! The driver writes exactly two inputs between ticks (threat position and
//! reset trigger), calls [`Simulation::step`] once per frame and reads the
//! result back through the view accessors.

use bevy_app::App;
use bevy_ecs::query::With;
use bevy_ecs::schedule::ExecutorKind;
use serde::Serialize;

use crate::coherent::CoherentNoise;
use crate::config::{AgentTuning, SimConfig};
use crate::ecs::app::build_sim_app_with_executor;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Agent, Position, Prop, PropState, Velocity};
use crate::ecs::plugin::SimPlugin;
use crate::ecs::resources::{Fear, NoiseSource, PendingReset, Score, ThreatPosition, TickReport};
use crate::ecs::schedule::SimTick;
use crate::ecs::spawn::{scatter_props, spawn_agent, spawn_prop};
use crate::ecs::systems::reset_world;
use crate::model::{AgentView, PropEvent, PropEventKind, PropView, Vec2, WorldSnapshot};

/// What one call to [`Simulation::step`] did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub tick: u64,
    /// The single fear value used for this tick's motion.
    pub fear: f64,
    /// Score gained this tick.
    pub score_delta: u64,
    /// Score after this tick.
    pub score: u64,
    pub events: Vec<PropEvent>,
}

impl StepReport {
    pub fn stolen(&self) -> usize {
        self.count(PropEventKind::Stolen)
    }

    pub fn released(&self) -> usize {
        self.count(PropEventKind::Released)
    }

    fn count(&self, kind: PropEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

/// One agent, its props and the score, advanced one tick per [`step`](Self::step).
pub struct Simulation {
    app: App,
}

impl Simulation {
    /// Default tuning with `prop_count` props in a `width × height` area.
    pub fn initialize(prop_count: usize, width: f64, height: f64) -> Self {
        Self::with_config(SimConfig::with_bounds(prop_count, width, height))
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self::with_executor(config, ExecutorKind::SingleThreaded)
    }

    pub fn with_executor(config: SimConfig, executor: ExecutorKind) -> Self {
        let mut app = build_sim_app_with_executor(config, executor);
        app.add_plugins(SimPlugin);

        let world = app.world_mut();
        let config = world.resource::<SimConfig>().clone();
        spawn_agent(world, config.agent_start(), config.agent.clone());
        let props = scatter_props(world).len();
        tracing::info!(
            props,
            width = config.bounds.width,
            height = config.bounds.height,
            seed = config.seed,
            "simulation initialized"
        );

        Self { app }
    }

    /// Advance one tick against the threat at `threat`.
    ///
    /// `dt` is the frame's wall-clock duration. It is only recorded; motion
    /// advances by the configured fixed time step.
    pub fn step(&mut self, threat: Vec2, dt: f64) -> StepReport {
        let world = self.app.world_mut();
        world.resource_mut::<ThreatPosition>().0 = threat;
        if dt.is_finite() && dt > 0.0 {
            world.resource_mut::<SimClock>().elapsed_seconds += dt;
        }

        world.run_schedule(SimTick);

        let report = world.resource::<TickReport>();
        StepReport {
            tick: report.tick,
            fear: report.fear,
            score_delta: report.score_delta,
            score: world.resource::<Score>().0,
            events: report.events.clone(),
        }
    }

    /// Zero the score and regenerate the props now. The agent is untouched.
    pub fn reset(&mut self) {
        reset_world(self.app.world_mut());
    }

    /// Ask for a reset at the start of the next step. Repeated requests
    /// before that step collapse into one.
    pub fn request_reset(&mut self) {
        self.app.world_mut().resource_mut::<PendingReset>().0 = true;
    }

    pub fn reset_pending(&self) -> bool {
        self.app.world().resource::<PendingReset>().0
    }

    pub fn score(&self) -> u64 {
        self.app.world().resource::<Score>().0
    }

    /// Fear computed during the last tick.
    pub fn fear(&self) -> f64 {
        self.app.world().resource::<Fear>().0
    }

    pub fn threat(&self) -> Vec2 {
        self.app.world().resource::<ThreatPosition>().0
    }

    pub fn clock(&self) -> &SimClock {
        self.app.world().resource::<SimClock>()
    }

    pub fn config(&self) -> &SimConfig {
        self.app.world().resource::<SimConfig>()
    }

    pub fn agent(&mut self) -> AgentView {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Position, &Velocity, &Agent)>();
        query
            .iter(world)
            .next()
            .map(|(pos, vel, agent)| AgentView {
                position: pos.0,
                velocity: vel.0,
                radius: agent.tuning.radius,
            })
            .unwrap_or(AgentView {
                position: Vec2::ZERO,
                velocity: Vec2::ZERO,
                radius: 0.0,
            })
    }

    /// Every prop, in spawn order.
    pub fn props(&mut self) -> Vec<PropView> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Prop, &PropState, &Position, &Velocity)>();
        let mut props: Vec<(usize, PropView)> = query
            .iter(world)
            .map(|(prop, state, pos, vel)| {
                (
                    prop.index,
                    PropView {
                        position: pos.0,
                        velocity: vel.0,
                        radius: prop.radius,
                        state: state.tag(),
                        remaining_life: state.remaining_life(),
                    },
                )
            })
            .collect();
        props.sort_by_key(|(index, _)| *index);
        props.into_iter().map(|(_, view)| view).collect()
    }

    /// Full prop lifecycle state, in spawn order.
    pub fn prop_states(&mut self) -> Vec<PropState> {
        let world = self.app.world_mut();
        let mut states: Vec<(usize, PropState)> = world
            .query::<(&Prop, &PropState)>()
            .iter(world)
            .map(|(prop, state)| (prop.index, *state))
            .collect();
        states.sort_by_key(|(index, _)| *index);
        states.into_iter().map(|(_, state)| state).collect()
    }

    pub fn snapshot(&mut self) -> WorldSnapshot {
        let agent = self.agent();
        let props = self.props();
        let clock = self.clock();
        WorldSnapshot {
            tick: clock.tick_count,
            time: clock.time,
            fear: self.fear(),
            score: self.score(),
            threat: self.threat(),
            agent,
            props,
        }
    }

    /// Adjust the agent's tuning in place.
    pub fn tune_agent(&mut self, tune: impl FnOnce(&mut AgentTuning)) {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut Agent>();
        if let Some(mut agent) = query.iter_mut(world).next() {
            tune(&mut agent.tuning);
        }
    }

    /// Swap the coherent noise behind the agent's shake.
    pub fn set_noise(&mut self, noise: impl CoherentNoise + 'static) {
        self.app.world_mut().insert_resource(NoiseSource::new(noise));
    }

    /// Move the agent, replacing its velocity.
    pub fn place_agent(&mut self, position: Vec2, velocity: Vec2) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<(&mut Position, &mut Velocity), With<Agent>>();
        if let Some((mut pos, mut vel)) = query.iter_mut(world).next() {
            pos.0 = position;
            vel.0 = velocity;
        }
    }

    /// Add one prop and return its index.
    pub fn spawn_prop_at(
        &mut self,
        radius: f64,
        position: Vec2,
        velocity: Vec2,
        state: PropState,
    ) -> usize {
        let world = self.app.world_mut();
        let index = world
            .query::<&Prop>()
            .iter(world)
            .map(|p| p.index + 1)
            .max()
            .unwrap_or(0);
        spawn_prop(world, index, radius, position, velocity, state);
        index
    }

    /// Overwrite the lifecycle state of prop `index`. Returns `false` if no such prop.
    pub fn set_prop_state(&mut self, index: usize, state: PropState) -> bool {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Prop, &mut PropState)>();
        match query.iter_mut(world).find(|(prop, _)| prop.index == index) {
            Some((_, mut current)) => {
                *current = state;
                true
            }
            None => false,
        }
    }

    /// Remove every prop, e.g. to stage a scenario with hand-placed props.
    pub fn clear_props(&mut self) {
        crate::ecs::spawn::despawn_props(self.app.world_mut());
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::with_config(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coherent::ConstantNoise;

    #[test]
    fn initialize_spawns_agent_at_centre_and_props() {
        let mut sim = Simulation::initialize(12, 480.0, 320.0);
        assert_eq!(sim.agent().position, Vec2::new(240.0, 160.0));
        assert_eq!(sim.agent().velocity, Vec2::ZERO);
        assert_eq!(sim.props().len(), 12);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.clock().tick_count, 0);
    }

    #[test]
    fn step_records_dt_without_changing_time_step() {
        let mut sim = Simulation::default();
        sim.step(Vec2::new(0.0, 0.0), 0.5);
        sim.step(Vec2::new(0.0, 0.0), f64::NAN);
        let clock = sim.clock();
        assert_eq!(clock.tick_count, 2);
        assert!((clock.time - 0.02).abs() < 1e-12);
        assert!((clock.elapsed_seconds - 0.5).abs() < 1e-12);
    }

    #[test]
    fn step_report_carries_fear() {
        let mut sim = Simulation::default();
        sim.set_noise(ConstantNoise(0.5));
        let report = sim.step(Vec2::new(240.0, 160.0), 1.0 / 60.0);
        assert_eq!(report.tick, 1);
        assert_eq!(report.fear, 1.0);
        assert_eq!(sim.fear(), 1.0);
    }

    #[test]
    fn request_reset_applies_on_next_step() {
        let mut sim = Simulation::default();
        sim.request_reset();
        sim.request_reset();
        assert!(sim.reset_pending());
        sim.step(Vec2::ZERO, 0.0);
        assert!(!sim.reset_pending());
        assert_eq!(sim.props().len(), 12);
    }

    #[test]
    fn set_prop_state_unknown_index_is_false() {
        let mut sim = Simulation::default();
        assert!(!sim.set_prop_state(99, PropState::Free));
        assert!(sim.set_prop_state(0, PropState::Free));
    }

    #[test]
    fn spawn_prop_at_appends_index() {
        let mut sim = Simulation::default();
        let index = sim.spawn_prop_at(10.0, Vec2::new(50.0, 50.0), Vec2::ZERO, PropState::Free);
        assert_eq!(index, 12);
        assert_eq!(sim.props().len(), 13);
        assert_eq!(sim.props()[12].radius, 10.0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut sim = Simulation::default();
        sim.step(Vec2::new(100.0, 100.0), 0.016);
        let json = serde_json::to_string(&sim.snapshot()).unwrap();
        assert!(json.contains("\"tick\":1"));
        assert!(json.contains("\"state\":\"free\""));
    }
}
