use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one simulation step.
/// Run manually each frame via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    /// Pending reset, clock advance, RNG reseed, report reset.
    PreUpdate,
    Update,
    /// Score accounting.
    PostUpdate,
    Last,
}

/// Per-concern system sets within `SimPhase::Update`.
///
/// ```text
/// Fear → Steering → Interaction
/// ```
///
/// Fear is computed once from the pre-move agent position; steering and the
/// interaction pass both read that single value.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Fear,
    Steering,
    Interaction,
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Update,
            SimPhase::PostUpdate,
            SimPhase::Last,
        )
            .chain(),
    );
    schedule.configure_sets(
        (MotionSet::Fear, MotionSet::Steering, MotionSet::Interaction)
            .chain()
            .in_set(SimPhase::Update),
    );
    schedule
}
