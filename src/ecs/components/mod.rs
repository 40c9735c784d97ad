pub mod agent;
pub mod common;
pub mod prop;

pub use agent::Agent;
pub use common::{Position, Velocity};
pub use prop::{Prop, PropState};
