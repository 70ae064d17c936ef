use crate::core::Xorshift32;
use crate::domain::Settings;
use crate::systems::{CollisionSolver, Viewport};

use super::perf_stats::PerfStats;
use super::SessionCore;

pub(super) fn create_session_core(width: f64, height: f64, settings: Settings) -> SessionCore {
    let rng = match settings.seed {
        Some(seed) => Xorshift32::new(seed),
        None => Xorshift32::from_entropy(),
    };
    let alphabet: Vec<char> = settings.alphabet.chars().collect();
    let solver = CollisionSolver::new(settings.collision_policy);

    log::debug!(
        "session {}x{} policy={} spawn_probability={}",
        width,
        height,
        settings.collision_policy,
        settings.spawn_probability
    );

    SessionCore {
        viewport: Viewport::new(width, height),
        particles: Vec::with_capacity(settings.max_particles.map_or(64, |cap| cap.min(1024))),
        alphabet,
        solver,
        rng,
        settings,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
