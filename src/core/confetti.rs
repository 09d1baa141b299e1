/// Confetti particle layout for presenters that draw celebrations
/// themselves.
///
/// Particles launch from a random screen edge, mostly inward with a wide
/// spread, each with its own colour, start delay and flight time.
use rand::Rng;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub edge: Edge,
    /// Launch point as fractions of screen width and height.
    pub origin: (f32, f32),
    /// Total travel in pixels.
    pub travel: (f32, f32),
    pub hue: u16,
    pub delay_ms: u64,
    pub flight_ms: u64,
}

impl Particle {
    /// Pixel offset from the origin `elapsed_ms` after the burst started,
    /// or `None` before launch and after landing.
    pub fn offset_at(&self, elapsed_ms: u64) -> Option<(f32, f32)> {
        let airborne = elapsed_ms.checked_sub(self.delay_ms)?;
        if airborne > self.flight_ms || self.flight_ms == 0 {
            return None;
        }
        let t = airborne as f32 / self.flight_ms as f32;
        Some((self.travel.0 * t, self.travel.1 * t))
    }
}

/// Lay out `count` particles.
pub fn burst<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Vec<Particle> {
    (0..count).map(|_| particle(rng)).collect()
}

fn particle<R: Rng + ?Sized>(rng: &mut R) -> Particle {
    let edge = match rng.gen_range(0..4) {
        0 => Edge::Top,
        1 => Edge::Right,
        2 => Edge::Bottom,
        _ => Edge::Left,
    };
    let along: f32 = rng.gen_range(0.0..1.0);
    let (origin, heading): ((f32, f32), f32) = match edge {
        Edge::Top => ((along, 0.0), PI / 2.0),
        Edge::Right => ((1.0, along), PI),
        Edge::Bottom => ((along, 1.0), -PI / 2.0),
        Edge::Left => ((0.0, along), 0.0),
    };
    let jitter: f32 = rng.gen_range(0.0..1.0);
    let angle = heading + (jitter - 0.5) * (PI / 1.5);
    let distance: f32 = rng.gen_range(200.0..420.0);

    Particle {
        edge,
        origin,
        travel: (angle.cos() * distance, angle.sin() * distance),
        hue: rng.gen_range(0..360),
        delay_ms: rng.gen_range(0..400),
        flight_ms: rng.gen_range(1500..2400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_has_requested_count_and_is_seeded() {
        let a = burst(&mut StdRng::seed_from_u64(7), 80);
        let b = burst(&mut StdRng::seed_from_u64(7), 80);
        assert_eq!(a.len(), 80);
        assert_eq!(a, b);
    }

    #[test]
    fn particles_move_inward() {
        for p in burst(&mut StdRng::seed_from_u64(42), 200) {
            let (dx, dy) = p.travel;
            match p.edge {
                Edge::Top => assert!(dy > 0.0),
                Edge::Bottom => assert!(dy < 0.0),
                Edge::Left => assert!(dx > 0.0),
                Edge::Right => assert!(dx < 0.0),
            }
            assert!(p.hue < 360);
        }
    }

    #[test]
    fn offset_only_while_airborne() {
        let p = Particle {
            edge: Edge::Left,
            origin: (0.0, 0.5),
            travel: (300.0, 0.0),
            hue: 10,
            delay_ms: 100,
            flight_ms: 1000,
        };
        assert_eq!(p.offset_at(50), None);
        assert_eq!(p.offset_at(600), Some((150.0, 0.0)));
        assert_eq!(p.offset_at(1200), None);
    }
}
