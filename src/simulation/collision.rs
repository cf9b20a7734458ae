// simulation/collision.rs
// Elastic pairwise collision resolution via the rotate-resolve-rotate-back
// technique: align the x-axis with the line of centers, apply the 1D
// elastic formula on that axis, rotate back.

use ultraviolet::Vec2;

use crate::math::rotate;
use crate::particle::Particle;

/// Resolve an overlapping pair in place. Only the two velocities change.
/// The caller has already established geometric overlap.
pub fn resolve(a: &mut Particle, b: &mut Particle) {
    let dv = a.vel - b.vel;
    let dp = b.pos - a.pos;

    // Skip pairs that are already separating; lingering contact over several
    // frames must not be re-resolved.
    if dv.dot(dp) < 0.0 {
        return;
    }

    let angle = -dp.y.atan2(dp.x);
    let m1 = a.mass;
    let m2 = b.mass;

    // Velocities in the contact frame, x along the line of centers.
    let u1 = rotate(a.vel, angle);
    let u2 = rotate(b.vel, angle);

    // 1D elastic collision on the normal axis; tangential y is untouched.
    let v1 = Vec2::new((u1.x * (m1 - m2) + 2.0 * m2 * u2.x) / (m1 + m2), u1.y);
    let v2 = Vec2::new((u2.x * (m2 - m1) + 2.0 * m1 * u1.x) / (m1 + m2), u2.y);

    a.vel = rotate(v1, -angle);
    b.vel = rotate(v2, -angle);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(pos: (f32, f32), vel: (f32, f32), mass: f32) -> Particle {
        let mut p = Particle::new(
            Vec2::new(pos.0, pos.1),
            Vec2::new(vel.0, vel.1),
            30.0,
            [255, 255, 255, 255],
        );
        p.mass = mass;
        p
    }

    fn momentum(a: &Particle, b: &Particle) -> Vec2 {
        a.vel * a.mass + b.vel * b.mass
    }

    fn kinetic_energy(a: &Particle, b: &Particle) -> f32 {
        0.5 * a.mass * a.vel.mag_sq() + 0.5 * b.mass * b.vel.mag_sq()
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut a = particle((0.0, 0.0), (1.0, 0.0), 1.0);
        let mut b = particle((59.0, 0.0), (-1.0, 0.0), 1.0);
        resolve(&mut a, &mut b);
        assert!((a.vel.x - -1.0).abs() < 1e-6, "a.vel.x: {}", a.vel.x);
        assert!(a.vel.y.abs() < 1e-6);
        assert!((b.vel.x - 1.0).abs() < 1e-6, "b.vel.x: {}", b.vel.x);
        assert!(b.vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_separating_pair_is_left_alone() {
        // Overlapping but moving apart: the approach guard must skip it.
        let mut a = particle((0.0, 0.0), (-1.0, 0.2), 1.0);
        let mut b = particle((40.0, 0.0), (1.0, -0.3), 1.0);
        resolve(&mut a, &mut b);
        assert_eq!(a.vel, Vec2::new(-1.0, 0.2));
        assert_eq!(b.vel, Vec2::new(1.0, -0.3));
    }

    #[test]
    fn test_momentum_and_energy_conserved_for_unequal_masses() {
        let mut a = particle((0.0, 0.0), (2.0, 0.5), 1.0);
        let mut b = particle((3.0, 4.0), (-1.0, 0.3), 3.0);
        let p_before = momentum(&a, &b);
        let ke_before = kinetic_energy(&a, &b);

        resolve(&mut a, &mut b);

        let p_after = momentum(&a, &b);
        let ke_after = kinetic_energy(&a, &b);
        assert!(
            (p_after - p_before).mag() < 1e-4,
            "momentum drifted: {:?} -> {:?}",
            p_before,
            p_after
        );
        assert!(
            (ke_after - ke_before).abs() < 1e-3,
            "kinetic energy drifted: {} -> {}",
            ke_before,
            ke_after
        );
    }

    #[test]
    fn test_oblique_collision_keeps_tangential_component() {
        // Contact along x; the y components are tangential and must survive.
        let mut a = particle((0.0, 0.0), (1.0, 0.7), 1.0);
        let mut b = particle((50.0, 0.0), (-1.0, -0.4), 1.0);
        resolve(&mut a, &mut b);
        assert!((a.vel.y - 0.7).abs() < 1e-6);
        assert!((b.vel.y - -0.4).abs() < 1e-6);
        // Equal masses exchange the normal components.
        assert!((a.vel.x - -1.0).abs() < 1e-6);
        assert!((b.vel.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resolution_is_orientation_independent() {
        // The same head-on collision rotated 90 degrees: swap happens on y.
        let mut a = particle((0.0, 0.0), (0.0, 1.0), 1.0);
        let mut b = particle((0.0, 59.0), (0.0, -1.0), 1.0);
        resolve(&mut a, &mut b);
        assert!((a.vel.y - -1.0).abs() < 1e-6);
        assert!((b.vel.y - 1.0).abs() < 1e-6);
        assert!(a.vel.x.abs() < 1e-6);
        assert!(b.vel.x.abs() < 1e-6);
    }
}
