use super::SessionCore;

/// Step glyph `index`: free motion, then the brute-force peer scan.
/// Returns the number of contacts resolved.
pub(super) fn step_particle(session: &mut SessionCore, index: usize) -> u32 {
    let SessionCore { particles, settings, viewport, solver, .. } = session;

    particles[index].step(viewport, settings);
    solver.resolve_peers(particles, index)
}
