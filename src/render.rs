// render.rs
// Drawing boundary. The core never draws; a host renderer implements
// DrawSink and consumes either draw_particles or the BODIES snapshot.

use ultraviolet::Vec2;

use crate::particle::Particle;

/// Sink for one frame of circle draws.
pub trait DrawSink {
    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: [u8; 4], stroke: [u8; 4], opacity: f32);
}

/// Feed every particle through the sink: fill at the particle's fade
/// opacity, stroke at full alpha.
pub fn draw_particles(sink: &mut dyn DrawSink, bodies: &[Particle]) {
    for body in bodies {
        sink.draw_circle(body.pos, body.radius, body.color, body.color, body.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[derive(Default)]
    struct RecordingSink {
        circles: Vec<(Vec2, f32, [u8; 4], [u8; 4], f32)>,
    }

    impl DrawSink for RecordingSink {
        fn draw_circle(
            &mut self,
            center: Vec2,
            radius: f32,
            fill: [u8; 4],
            stroke: [u8; 4],
            opacity: f32,
        ) {
            self.circles.push((center, radius, fill, stroke, opacity));
        }
    }

    #[test]
    fn test_one_circle_per_particle_with_fade_on_fill() {
        let mut a = Particle::new(Vec2::new(10.0, 20.0), Vec2::zero(), 30.0, config::DEFAULT_PALETTE[0]);
        a.opacity = 0.15;
        let b = Particle::new(Vec2::new(70.0, 90.0), Vec2::zero(), 30.0, config::DEFAULT_PALETTE[1]);

        let mut sink = RecordingSink::default();
        draw_particles(&mut sink, &[a, b]);

        assert_eq!(sink.circles.len(), 2);
        let (center, radius, fill, stroke, opacity) = sink.circles[0];
        assert_eq!(center, Vec2::new(10.0, 20.0));
        assert_eq!(radius, 30.0);
        assert_eq!(fill, config::DEFAULT_PALETTE[0]);
        assert_eq!(stroke, fill);
        assert_eq!(opacity, 0.15);
        assert_eq!(sink.circles[1].4, 0.0);
    }
}
