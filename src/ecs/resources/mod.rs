pub mod sim_resources;
pub mod tick_report;

pub use sim_resources::{
    Fear, InteractionRng, NoiseSource, PendingReset, Score, SimRng, ThreatPosition, distribute_rng,
};
pub use tick_report::{TickReport, begin_tick_report};
