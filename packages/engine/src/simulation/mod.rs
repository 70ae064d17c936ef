//! Session - one running glyph animation
//!
//! All mutable state of an animation (viewport, live glyphs, random source,
//! settings) lives in `SessionCore`; nothing is module-global, so a session can
//! be driven headless in tests exactly as it runs in the browser.
//!
//! - step/     - the per-frame tick
//! - commands/ - spawn, insert, clear, resize
//! - render/   - JSON snapshots
//! - frame/    - self-rescheduling loop over an injectable scheduler
//! - facade.rs - `#[wasm_bindgen]` wrapper for JS callers

use crate::core::Xorshift32;
use crate::domain::Settings;
use crate::systems::{CollisionPolicy, CollisionSolver, Particle, Viewport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/step_particle.rs"]
mod step_particle;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/snapshot.rs"]
mod snapshot;
#[path = "frame/scheduler.rs"]
mod scheduler;
#[path = "frame/frame_loop.rs"]
mod frame_loop;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::FallingGlyphs;
pub use frame_loop::{FrameLoop, LoopState};
pub use perf_stats::PerfStats;
pub use scheduler::{FrameCallback, FrameScheduler, ManualScheduler};
pub use snapshot::ParticleSnapshot;
pub use crate::systems::surface::{NullSurface, Surface};

use perf_timer::PerfTimer;

/// The animation session
pub struct SessionCore {
    settings: Settings,
    viewport: Viewport,
    /// Live glyphs in spawn order
    particles: Vec<Particle>,
    alphabet: Vec<char>,
    solver: CollisionSolver,
    rng: Xorshift32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SessionCore {
    /// Create a session with stock settings
    pub fn new(width: f64, height: f64) -> Self {
        init::create_session_core(width, height, Settings::default())
    }

    /// Create a session with custom settings. Settings are validated first.
    pub fn with_settings(width: f64, height: f64, settings: Settings) -> Result<Self, crate::core::EngineError> {
        settings.validate()?;
        Ok(init::create_session_core(width, height, settings))
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.solver.policy()
    }

    pub fn set_collision_policy(&mut self, policy: CollisionPolicy) {
        settings::set_collision_policy(self, policy);
    }

    /// Clamped to [0, 1]
    pub fn set_spawn_probability(&mut self, probability: f64) {
        settings::set_spawn_probability(self, probability);
    }

    /// `None` removes the cap. Lowering it takes effect on the next spawn.
    pub fn set_max_particles(&mut self, max: Option<usize>) {
        settings::set_max_particles(self, max);
    }

    /// New window dimensions
    pub fn resize(&mut self, width: f64, height: f64) {
        commands::resize(self, width, height);
    }

    /// Spawn one glyph picked uniformly from the alphabet, evicting the oldest
    /// glyphs when at the cap. Returns false only for a zero cap.
    pub fn spawn_random(&mut self) -> bool {
        commands::spawn_random(self)
    }

    /// Spawn a specific glyph with randomized physics
    pub fn spawn_glyph(&mut self, glyph: char) -> bool {
        commands::spawn_glyph(self, glyph)
    }

    /// Append a fully specified particle (bypasses the cap)
    pub fn insert(&mut self, particle: Particle) {
        commands::insert(self, particle);
    }

    /// Remove every live glyph
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Advance one frame: clear, maybe spawn, step + draw each glyph, cull.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        step::tick(self, surface);
    }

    /// Advance one frame without drawing anything
    pub fn step(&mut self) {
        step::tick(self, &mut NullSurface);
    }

    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        snapshot::snapshot(&self.particles)
    }

    pub fn particles_json(&self) -> String {
        snapshot::to_json(&self.particles)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
