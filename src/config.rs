use std::fs;
use std::io;
use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::model::{Bounds, Vec2};

/// Tuning for the fleeing agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTuning {
    /// Body radius. The prop hit test uses a fraction of it.
    pub radius: f64,
    /// Threat distance at which fear starts rising above zero.
    pub fear_radius: f64,
    /// Base flee acceleration per tick.
    pub accel: f64,
    /// Extra acceleration multiplier at full fear: `accel * (1 + flee_intensity * fear)`.
    pub flee_intensity: f64,
    pub max_speed: f64,
    /// Velocity multiplier applied at the start of every tick (0..1).
    pub damping: f64,
    /// Peak positional shake at full fear.
    pub jitter: f64,
    /// How fast the shake signal moves relative to the clock.
    pub jitter_time_scale: f64,
    /// Noise row sampled for the x and y shake.
    pub jitter_seeds: (f64, f64),
    pub wall_padding: f64,
    pub wall_restitution: f64,
    /// Props must be strictly smaller than this to be stolen.
    pub steal_size: f64,
    /// Probability of a steal per qualifying overlap per tick.
    pub steal_chance: f64,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            radius: 28.0,
            fear_radius: 140.0,
            accel: 0.28,
            flee_intensity: 2.1,
            max_speed: 5.0,
            damping: 0.92,
            jitter: 1.4,
            jitter_time_scale: 18.0,
            jitter_seeds: (300.0, 400.0),
            wall_padding: 18.0,
            wall_restitution: 0.85,
            steal_size: 14.0,
            steal_chance: 0.06,
        }
    }
}

/// Tuning for the props scattered around the agent.
///
/// Ranges are `(low, high)` with low inclusive and high exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropTuning {
    pub radius_range: (f64, f64),
    /// Distance from every edge inside which props are scattered.
    pub spawn_margin: f64,
    /// Per-axis initial velocity range.
    pub initial_speed_range: (f64, f64),
    pub friction: f64,
    pub wall_padding: f64,
    pub wall_restitution: f64,
    /// Fraction of the agent radius used in the overlap test.
    pub hit_fraction: f64,
    /// Speed of the push away from the agent on overlap.
    pub bump_push: f64,
    /// Share of the agent's velocity handed to a bumped prop.
    pub momentum_transfer: f64,
    /// Orbit angle advance per tick while held, in radians.
    pub orbit_step: f64,
    pub orbit_radius_range: (f64, f64),
    /// Held lifetime in ticks.
    pub life_range: (u32, u32),
    /// Per-axis velocity range given to a prop on release.
    pub release_speed_range: (f64, f64),
}

impl Default for PropTuning {
    fn default() -> Self {
        Self {
            radius_range: (8.0, 22.0),
            spawn_margin: 30.0,
            initial_speed_range: (-0.3, 0.3),
            friction: 0.95,
            wall_padding: 20.0,
            wall_restitution: 0.9,
            hit_fraction: 0.75,
            bump_push: 2.0,
            momentum_transfer: 0.3,
            orbit_step: 0.04,
            orbit_radius_range: (14.0, 24.0),
            life_range: (180, 300),
            release_speed_range: (-1.0, 1.0),
        }
    }
}

/// Simulation configuration: play area, population, seeds and tuning.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub bounds: Bounds,
    pub prop_count: usize,
    /// Seed for spawning and per-tick interaction rolls.
    pub seed: u64,
    /// Seed for the coherent noise behind the shake.
    pub noise_seed: u32,
    /// Clock advance per tick, independent of frame time.
    pub time_step: f64,
    /// Agent start position. Defaults to the centre of `bounds`.
    pub agent_start: Option<Vec2>,
    pub agent: AgentTuning,
    pub props: PropTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            prop_count: 12,
            seed: 42,
            noise_seed: 0,
            time_step: 0.01,
            agent_start: None,
            agent: AgentTuning::default(),
            props: PropTuning::default(),
        }
    }
}

impl SimConfig {
    /// Default tuning with a custom population and play area.
    pub fn with_bounds(prop_count: usize, width: f64, height: f64) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            prop_count,
            ..Self::default()
        }
    }

    pub fn agent_start(&self) -> Vec2 {
        self.agent_start.unwrap_or_else(|| self.bounds.center())
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> io::Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> io::Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Repair values that would otherwise produce NaN or panics.
    ///
    /// Non-finite or non-positive sizes fall back to their defaults,
    /// probabilities and factors are clamped into range and inverted
    /// ranges are swapped.
    pub fn sanitized(mut self) -> Self {
        let defaults = SimConfig::default();

        if !(self.bounds.width.is_finite() && self.bounds.width > 0.0) {
            self.bounds.width = defaults.bounds.width;
        }
        if !(self.bounds.height.is_finite() && self.bounds.height > 0.0) {
            self.bounds.height = defaults.bounds.height;
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            self.time_step = defaults.time_step;
        }
        if self.agent_start.is_some_and(|p| !p.is_finite()) {
            self.agent_start = None;
        }

        let agent = &mut self.agent;
        agent.radius = positive_or(agent.radius, defaults.agent.radius);
        agent.fear_radius = positive_or(agent.fear_radius, defaults.agent.fear_radius);
        agent.max_speed = positive_or(agent.max_speed, defaults.agent.max_speed);
        agent.damping = unit_or(agent.damping, defaults.agent.damping);
        agent.wall_restitution = unit_or(agent.wall_restitution, defaults.agent.wall_restitution);
        agent.steal_chance = unit_or(agent.steal_chance, defaults.agent.steal_chance);

        let props = &mut self.props;
        props.radius_range = ordered(props.radius_range);
        props.initial_speed_range = ordered(props.initial_speed_range);
        props.orbit_radius_range = ordered(props.orbit_radius_range);
        props.release_speed_range = ordered(props.release_speed_range);
        if props.life_range.0 > props.life_range.1 {
            props.life_range = (props.life_range.1, props.life_range.0);
        }
        props.friction = unit_or(props.friction, defaults.props.friction);
        props.wall_restitution = unit_or(props.wall_restitution, defaults.props.wall_restitution);

        self
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn unit_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

fn ordered((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}
