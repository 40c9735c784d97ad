use bevy_ecs::component::Component;

use crate::model::Vec2;

/// World-space position in canvas units.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Displacement per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);
