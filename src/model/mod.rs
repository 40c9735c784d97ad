pub mod bounds;
pub mod event;
pub mod snapshot;
pub mod vec2;

pub use bounds::{Bounds, WallHit};
pub use event::{PropEvent, PropEventKind};
pub use snapshot::{AgentView, PropStateTag, PropView, WorldSnapshot};
pub use vec2::{DISTANCE_FLOOR, Vec2};
