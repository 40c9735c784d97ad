use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};
use serde::Serialize;

use crate::ecs::clock::SimClock;
use crate::model::{PropEvent, PropEventKind};

/// Outcome of one tick, rebuilt from scratch every tick.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub fear: f64,
    /// Score gained this tick. Equal to the number of steals.
    pub score_delta: u64,
    pub events: Vec<PropEvent>,
}

impl TickReport {
    pub fn record(&mut self, event: PropEvent) {
        if event.kind == PropEventKind::Stolen {
            self.score_delta += 1;
        }
        self.events.push(event);
    }

    pub fn stolen(&self) -> usize {
        self.count(PropEventKind::Stolen)
    }

    pub fn released(&self) -> usize {
        self.count(PropEventKind::Released)
    }

    fn count(&self, kind: PropEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

/// Clear last tick's report. Runs in `SimPhase::PreUpdate` after the clock advances.
pub fn begin_tick_report(clock: Res<SimClock>, mut report: ResMut<TickReport>) {
    report.tick = clock.tick_count;
    report.fear = 0.0;
    report.score_delta = 0;
    report.events.clear();
}
