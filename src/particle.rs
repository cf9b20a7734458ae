// particle.rs
// The Particle struct and its per-step behavior (boundary reflection,
// pointer fade, integration). Pairwise collision handling lives in
// simulation/collision.rs.

use ultraviolet::Vec2;

use crate::config::SimConfig;
use crate::math;

use std::sync::atomic::{AtomicU64, Ordering};
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant for the particle's lifetime, > 0
    pub radius: f32,
    /// Uniformly 1.0 in this build; the resolver stays mass-general
    pub mass: f32,
    /// Fill/stroke color, RGBA
    pub color: [u8; 4],
    /// Fade level in [0, opacity_ceiling], driven by pointer proximity
    pub opacity: f32,
    pub id: u64,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: [u8; 4]) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass: 1.0,
            color,
            opacity: 0.0,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// True when the two discs overlap. The same test drives runtime
    /// collision detection and initial rejection sampling.
    pub fn overlaps(&self, other: &Particle) -> bool {
        math::distance(self.pos.x, self.pos.y, other.pos.x, other.pos.y)
            - (self.radius + other.radius)
            < 0.0
    }

    /// Negate the velocity component pointing past a wall. Checked per axis
    /// every frame, so a particle sitting exactly on a wall keeps flipping
    /// sign each tick it is evaluated.
    pub fn reflect_at_bounds(&mut self, width: f32, height: f32) {
        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Fade in toward the ceiling while the pointer is near, decay to
    /// exactly zero otherwise.
    pub fn update_opacity(&mut self, pointer: Vec2, config: &SimConfig) {
        let near = math::distance(pointer.x, pointer.y, self.pos.x, self.pos.y)
            < config.proximity_radius;
        if near && self.opacity < config.opacity_ceiling {
            self.opacity = (self.opacity + config.opacity_gain).min(config.opacity_ceiling);
        } else if self.opacity > 0.0 {
            self.opacity = (self.opacity - config.opacity_decay).max(0.0);
        }
    }

    /// Explicit Euler, one tick per frame, no dt scaling.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}
