pub mod coherent;
pub mod config;
pub mod ecs;
pub mod flush;
pub mod model;
pub mod seed;
pub mod simulation;

pub use coherent::{CoherentNoise, ConstantNoise, PerlinNoise};
pub use config::{AgentTuning, PropTuning, SimConfig};
pub use model::{
    AgentView, Bounds, PropEvent, PropEventKind, PropStateTag, PropView, Vec2, WorldSnapshot,
};
pub use simulation::{Simulation, StepReport};
