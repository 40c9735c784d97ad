use bevy_ecs::component::Component;

use crate::model::PropStateTag;

/// A movable prop. The radius is fixed at creation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    /// Position in spawn order, stable across the prop's lifetime.
    pub index: usize,
    pub radius: f64,
}

/// Abduction lifecycle of a prop.
///
/// A held prop owns its orbit and countdown; a free prop carries nothing, so
/// a stale timer on a free prop cannot exist.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum PropState {
    /// Moves under its own velocity, friction and wall bounces.
    #[default]
    Free,
    /// Orbits the agent until `remaining_life` reaches zero.
    Held {
        orbit_angle: f64,
        orbit_radius: f64,
        remaining_life: u32,
    },
}

impl PropState {
    pub fn is_held(&self) -> bool {
        matches!(self, PropState::Held { .. })
    }

    pub fn tag(&self) -> PropStateTag {
        match self {
            PropState::Free => PropStateTag::Free,
            PropState::Held { .. } => PropStateTag::Held,
        }
    }

    pub fn remaining_life(&self) -> u32 {
        match self {
            PropState::Free => 0,
            PropState::Held { remaining_life, .. } => *remaining_life,
        }
    }
}
