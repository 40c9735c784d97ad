pub mod app;
pub mod clock;
pub mod components;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

#[cfg(test)]
pub mod test_helpers;

pub use app::{build_sim_app, build_sim_app_parallel, build_sim_app_with_executor};
pub use clock::SimClock;
pub use components::{Agent, Position, Prop, PropState, Velocity};
pub use plugin::SimPlugin;
pub use resources::{
    Fear, InteractionRng, NoiseSource, PendingReset, Score, SimRng, ThreatPosition, TickReport,
};
pub use schedule::{MotionSet, SimPhase, SimTick, configure_sim_schedule};
