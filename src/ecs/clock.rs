use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource.
///
/// `time` is the animation clock fed to the noise source. It advances by a
/// fixed `time_step` per tick regardless of frame duration, so motion does not
/// depend on frame rate. `elapsed_seconds` only records the wall-clock deltas
/// handed in by the driver.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimClock {
    pub time: f64,
    pub time_step: f64,
    pub tick_count: u64,
    pub elapsed_seconds: f64,
}

impl SimClock {
    pub fn new(time_step: f64) -> Self {
        Self {
            time: 0.0,
            time_step,
            tick_count: 0,
            elapsed_seconds: 0.0,
        }
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.time += self.time_step;
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by one tick.
/// Registered first in `SimPhase::PreUpdate` so every system of the tick sees
/// the advanced time.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
