// simulation/simulation.rs
// The Simulation struct and main methods (placement, step, per-particle update)

use thiserror::Error;
use ultraviolet::Vec2;

use super::collision;
use crate::config;
use crate::particle::Particle;
use crate::utils;

/// Requested population cannot be placed without overlap at the given
/// radius inside the given bounds.
#[derive(Clone, Debug, Error)]
#[error(
    "cannot place {requested} non-overlapping particles of radius {radius} \
     in {width}x{height} bounds (placed {placed})"
)]
pub struct PlacementError {
    pub requested: usize,
    pub placed: usize,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
}

/// The full simulation context: particle population, bounding region and
/// pointer position, plus the tunables synced from the global config.
pub struct Simulation {
    pub frame: usize,
    pub bodies: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    /// Pointer position driving the proximity fade, updated between ticks
    pub pointer: Vec2,
    pub config: config::SimConfig,
    particle_radius: f32,
    palette: Vec<[u8; 4]>,
}

impl Simulation {
    /// Build a population of `count` non-overlapping particles with random
    /// per-axis velocities in [-1, 1]. The pointer starts at the domain
    /// center.
    pub fn new(
        count: usize,
        radius: f32,
        palette: &[[u8; 4]],
        width: f32,
        height: f32,
    ) -> Result<Self, PlacementError> {
        let bodies = place_population(count, radius, palette, width, height)?;
        Ok(Self {
            frame: 0,
            bodies,
            width,
            height,
            pointer: Vec2::new(width / 2.0, height / 2.0),
            config: config::SimConfig::default(),
            particle_radius: radius,
            palette: palette.to_vec(),
        })
    }

    /// Advance every particle by one tick, in stable index order. Each
    /// update scans the same mutable vector, so a particle sees already-
    /// updated lower indices and not-yet-updated higher ones within the
    /// tick. That mid-tick visibility is deliberate and kept.
    pub fn step(&mut self) {
        self.config = config::SIM_CONFIG.lock().clone();
        for i in 0..self.bodies.len() {
            self.update_particle(i);
        }
        self.frame += 1;
    }

    fn update_particle(&mut self, i: usize) {
        for j in 0..self.bodies.len() {
            if j == i {
                continue;
            }
            let (a, b) = pair_mut(&mut self.bodies, i, j);
            if a.overlaps(b) {
                collision::resolve(a, b);
            }
        }

        let pointer = self.pointer;
        let (width, height) = (self.width, self.height);
        let body = &mut self.bodies[i];
        body.reflect_at_bounds(width, height);
        body.update_opacity(pointer, &self.config);
        body.advance();
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Re-run placement with the current parameters, replacing the
    /// population. On failure the old population is kept untouched.
    pub fn reset(&mut self) -> Result<(), PlacementError> {
        let bodies = place_population(
            self.bodies.len(),
            self.particle_radius,
            &self.palette,
            self.width,
            self.height,
        )?;
        self.bodies = bodies;
        self.frame = 0;
        Ok(())
    }
}

/// Index of the first placed particle overlapping a disc at `pos`, if any.
fn overlaps_any(existing: &[Particle], pos: Vec2, radius: f32) -> Option<usize> {
    existing
        .iter()
        .position(|p| (p.pos - pos).mag() < (p.radius + radius))
}

/// Rejection-sample `count` non-overlapping positions, bounded attempts per
/// particle. Uses the same overlap test as runtime collision detection.
fn place_population(
    count: usize,
    radius: f32,
    palette: &[[u8; 4]],
    width: f32,
    height: f32,
) -> Result<Vec<Particle>, PlacementError> {
    let mut bodies: Vec<Particle> = Vec::with_capacity(count);
    while bodies.len() < count {
        let mut attempts = 0;
        let pos = loop {
            let candidate = Vec2::new(
                utils::random_in_range(radius, width - radius),
                utils::random_in_range(radius, height - radius),
            );
            if overlaps_any(&bodies, candidate, radius).is_none() {
                break candidate;
            }
            attempts += 1;
            if attempts >= config::PLACEMENT_ATTEMPTS {
                return Err(PlacementError {
                    requested: count,
                    placed: bodies.len(),
                    radius,
                    width,
                    height,
                });
            }
        };
        let vel = Vec2::new(
            utils::random_in_range(-1.0, 1.0),
            utils::random_in_range(-1.0, 1.0),
        );
        bodies.push(Particle::new(pos, vel, radius, utils::pick_color(palette)));
    }
    Ok(bodies)
}

/// Mutable references to two distinct particles of the same vector.
fn pair_mut(bodies: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
