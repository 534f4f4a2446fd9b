use glam::Mat4;
use rand::Rng;

use crate::animator::{Animator, FrameClock, Rotation};
use crate::config::ParticleConfig;

/// Static point cloud whose orientation spins a little every frame.
///
/// Positions are generated once and never touched again; only `rotation`
/// changes.
#[derive(Clone, Debug)]
pub struct ParticleField {
    /// `xyzxyz...`
    positions: Vec<f32>,
    pub rotation: Rotation,
    spin_x: f64,
    spin_y: f64,
}

impl ParticleField {
    pub fn generate<R: Rng>(config: &ParticleConfig, rng: &mut R) -> Self {
        let h = config.half_extent;
        let positions = (0..config.count * 3).map(|_| rng.gen_range(-h..=h)).collect();
        Self {
            positions,
            rotation: Rotation::default(),
            spin_x: config.spin_x,
            spin_y: config.spin_y,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.positions.chunks_exact(3)
    }

    /// Flattened positions for vertex upload.
    pub fn flat_positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }
}

impl Animator for ParticleField {
    fn advance(&mut self, _clock: &FrameClock) {
        self.rotation.x += self.spin_x;
        self.rotation.y += self.spin_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn every_coordinate_inside_cube() {
        let cfg = ParticleConfig::default();
        let field = ParticleField::generate(&cfg, &mut SmallRng::seed_from_u64(7));
        assert_eq!(field.len(), 500);
        assert_eq!(field.points().count(), 500);
        assert!(field
            .flat_positions()
            .iter()
            .all(|c| (-1000.0..=1000.0).contains(c)));
    }

    #[test]
    fn coordinates_actually_spread() {
        let field =
            ParticleField::generate(&ParticleConfig::default(), &mut SmallRng::seed_from_u64(1));
        let max = field.flat_positions().iter().cloned().fold(f32::MIN, f32::max);
        let min = field.flat_positions().iter().cloned().fold(f32::MAX, f32::min);
        assert!(max > 900.0 && min < -900.0, "min={min} max={max}");
    }

    #[test]
    fn advance_spins_but_never_moves_points() {
        let mut field =
            ParticleField::generate(&ParticleConfig::default(), &mut SmallRng::seed_from_u64(3));
        let before = field.flat_positions().to_vec();
        let mut clock = FrameClock::at(0.0);
        for i in 0..10 {
            field.advance(&clock);
            clock = clock.next(i as f64);
        }
        assert_eq!(field.flat_positions(), &before[..]);
        assert!((field.rotation.x - 0.01).abs() < 1e-12);
        assert!((field.rotation.y - 0.02).abs() < 1e-12);
        assert_eq!(field.rotation.z, 0.0);
    }
}
