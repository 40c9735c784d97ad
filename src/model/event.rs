use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// What happened to a prop during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropEventKind {
    /// Free → Held. Counts towards the score.
    Stolen,
    /// Held → Free after its life ran out.
    Released,
}

/// A prop lifecycle transition, recorded in tick order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropEvent {
    pub tick: u64,
    pub kind: PropEventKind,
    /// Index of the prop in spawn order.
    pub prop: usize,
    pub position: Vec2,
}
