use super::step_particle::step_particle;
use super::{PerfTimer, SessionCore, Surface};

pub(super) fn tick<S: Surface + ?Sized>(session: &mut SessionCore, surface: &mut S) {
    let perf_on = session.perf_enabled;
    if perf_on {
        session.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let viewport = session.viewport;
    surface.clear(viewport.width, viewport.height);

    // One roll per tick, whatever the outcome, so a seeded session replays identically.
    let roll = session.rng.next_f64();
    let mut spawned = 0u32;
    let mut removed = 0u32;
    let live_before = session.particles.len();
    if roll < session.settings.spawn_probability && session.spawn_random() {
        spawned = 1;
        // Glyphs evicted at the cap count as removed.
        removed = (live_before + 1 - session.particles.len()) as u32;
    }

    // Index-stable sweep: a removed glyph shifts its successor into slot `i`,
    // which is then processed without advancing.
    let mut processed = 0u32;
    let mut collisions = 0u32;
    let mut i = 0;
    while i < session.particles.len() {
        collisions += step_particle(session, i);
        processed += 1;

        let particle = &session.particles[i];
        particle.draw(&mut *surface, &session.settings.font_family);

        if particle.is_below(&viewport) {
            let gone = session.particles.remove(i);
            log::trace!("cull '{}' at y={:.1}", gone.glyph(), gone.pos.y);
            removed += 1;
            continue;
        }
        i += 1;
    }

    session.frame += 1;

    if let Some(t0) = step_start {
        let stats = &mut session.perf_stats;
        stats.step_ms = t0.elapsed_ms();
        stats.particles_processed = processed;
        stats.collisions_resolved = collisions;
        stats.particles_spawned = spawned;
        stats.particles_removed = removed;
        stats.particle_count = session.particles.len() as u32;
    }
}
