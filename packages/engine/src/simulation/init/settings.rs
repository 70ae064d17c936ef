use crate::systems::CollisionPolicy;

use super::perf_stats::PerfStats;
use super::SessionCore;

pub(super) fn enable_perf_metrics(session: &mut SessionCore, enabled: bool) {
    session.perf_enabled = enabled;
    if !enabled {
        session.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(session: &SessionCore) -> PerfStats {
    session.perf_stats.clone()
}

pub(super) fn set_collision_policy(session: &mut SessionCore, policy: CollisionPolicy) {
    log::info!("collision policy: {} -> {}", session.solver.policy(), policy);
    session.solver.set_policy(policy);
    session.settings.collision_policy = policy;
}

pub(super) fn set_spawn_probability(session: &mut SessionCore, probability: f64) {
    let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
    session.settings.spawn_probability = p;
}

pub(super) fn set_max_particles(session: &mut SessionCore, max: Option<usize>) {
    session.settings.max_particles = max;
}
