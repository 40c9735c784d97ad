use panic_sim::ecs::components::PropState;
use panic_sim::*;

/// Far outside every test area: fear is always zero here.
pub const FAR: Vec2 = Vec2::new(-10_000.0, -10_000.0);

pub const CENTRE: Vec2 = Vec2::new(240.0, 160.0);

/// Default 480×320 world with centred shake noise (no jitter) and no props,
/// ready for hand-placed scenarios.
pub fn empty_sim(steal_chance: f64) -> Simulation {
    let mut config = SimConfig::default();
    config.agent.steal_chance = steal_chance;
    let mut sim = Simulation::with_config(config);
    sim.set_noise(ConstantNoise(0.5));
    sim.clear_props();
    sim
}

pub fn held(orbit_radius: f64, remaining_life: u32) -> PropState {
    PropState::Held {
        orbit_angle: 0.0,
        orbit_radius,
        remaining_life,
    }
}

/// Threat on a slow circle around the centre, passing close to the agent.
pub fn circling_threat(tick: u64) -> Vec2 {
    let t = tick as f64 * 0.05;
    CENTRE + Vec2::new(t.cos() * 60.0, t.sin() * 40.0)
}

pub fn run(sim: &mut Simulation, ticks: u64, threat: impl Fn(u64) -> Vec2) -> Vec<StepReport> {
    (0..ticks).map(|tick| sim.step(threat(tick), 1.0 / 60.0)).collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
