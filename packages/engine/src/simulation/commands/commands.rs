use crate::systems::Particle;

use super::SessionCore;

pub(super) fn resize(session: &mut SessionCore, width: f64, height: f64) {
    log::info!(
        "viewport {}x{} -> {}x{}",
        session.viewport.width,
        session.viewport.height,
        width,
        height
    );
    session.viewport.resize(width, height);
}

pub(super) fn spawn_random(session: &mut SessionCore) -> bool {
    if session.alphabet.is_empty() {
        return false;
    }
    let glyph = session.alphabet[session.rng.index(session.alphabet.len())];
    spawn_glyph(session, glyph)
}

pub(super) fn spawn_glyph(session: &mut SessionCore, glyph: char) -> bool {
    if let Some(cap) = session.settings.max_particles {
        if cap == 0 {
            return false;
        }
        // Oldest first.
        while session.particles.len() >= cap {
            let oldest = session.particles.remove(0);
            log::trace!("evict '{}' at y={:.1} (cap {})", oldest.glyph(), oldest.pos.y, cap);
        }
    }

    let particle = Particle::spawn(glyph, &session.viewport, &session.settings, &mut session.rng);
    log::trace!(
        "spawn '{}' at x={:.1} size={:.1} v=({:.2}, {:.2})",
        glyph,
        particle.pos.x,
        particle.size(),
        particle.velocity.x,
        particle.velocity.y
    );
    session.particles.push(particle);
    true
}

pub(super) fn insert(session: &mut SessionCore, particle: Particle) {
    session.particles.push(particle);
}

pub(super) fn clear(session: &mut SessionCore) {
    session.particles.clear();
}
