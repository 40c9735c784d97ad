pub mod fear;
pub mod interaction;
pub mod reset;
pub mod scoring;
pub mod steering;

pub use fear::{add_fear_systems, fear};
pub use interaction::{AgentFrame, Transition, add_interaction_systems, resolve_prop};
pub use reset::{add_reset_systems, apply_pending_reset, reset_world};
pub use scoring::add_scoring_systems;
pub use steering::{FEAR_EPSILON, add_steering_systems, shake_offset, steer_agent};
