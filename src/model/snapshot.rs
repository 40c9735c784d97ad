use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Lifecycle tag of a prop as seen by a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropStateTag {
    Free,
    Held,
}

/// Read-only view of the agent.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
}

/// Read-only view of one prop.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub state: PropStateTag,
    /// Ticks left before release. Zero for free props.
    pub remaining_life: u32,
}

impl PropView {
    pub fn is_held(&self) -> bool {
        self.state == PropStateTag::Held
    }
}

/// Everything an external renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub time: f64,
    pub fear: f64,
    pub score: u64,
    pub threat: Vec2,
    pub agent: AgentView,
    pub props: Vec<PropView>,
}

impl WorldSnapshot {
    pub fn held_count(&self) -> usize {
        self.props.iter().filter(|p| p.is_held()).count()
    }
}
