use bevy_ecs::component::Component;

use crate::config::AgentTuning;

/// The single fleeing agent. Carries its own tuning so systems never reach
/// back into the configuration resource mid-tick.
#[derive(Component, Debug, Clone, Default)]
pub struct Agent {
    pub tuning: AgentTuning,
}
