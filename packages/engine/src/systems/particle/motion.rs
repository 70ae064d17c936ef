use crate::domain::Settings;

use super::{Particle, Viewport};

impl Particle {
    /// Gravity, then move by one frame of velocity.
    #[inline]
    pub fn integrate(&mut self, gravity_per_frame: f64) {
        self.velocity.y += gravity_per_frame;
        self.pos.x += self.velocity.x;
        self.pos.y += self.velocity.y;
    }

    /// Clamp onto the ground and bounce. Returns true on contact.
    #[inline]
    pub fn bounce_ground(&mut self, height: f64, restitution: f64) -> bool {
        if self.pos.y + self.size() > height {
            self.pos.y = height - self.size();
            self.velocity.y *= -restitution;
            return true;
        }
        false
    }

    /// Reverse horizontal velocity past either wall. Position is not clamped.
    #[inline]
    pub fn bounce_walls(&mut self, width: f64, restitution: f64) -> bool {
        if self.pos.x < 0.0 || self.pos.x + self.size() > width {
            self.velocity.x *= -restitution;
            return true;
        }
        false
    }

    /// One frame of free motion: gravity, movement, ground, walls.
    /// Peer collisions are resolved separately by the caller.
    pub fn step(&mut self, viewport: &Viewport, settings: &Settings) {
        self.integrate(settings.gravity_per_frame());
        self.bounce_ground(viewport.height, settings.restitution);
        self.bounce_walls(viewport.width, settings.restitution);
    }
}
