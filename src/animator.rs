use glam::Mat4;
use std::f64::consts::TAU;

/// Per-frame timing handed to every animator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    /// Wall-clock seconds (epoch based in the browser).
    pub seconds: f64,
    /// Frames presented so far, starting at 0 for the first tick.
    pub frame: u64,
}

impl FrameClock {
    pub fn at(seconds: f64) -> Self {
        Self { seconds, frame: 0 }
    }

    /// Clock for the following frame at wall-clock `seconds`.
    pub fn next(self, seconds: f64) -> Self {
        Self {
            seconds,
            frame: self.frame + 1,
        }
    }
}

/// Mutates scene attributes for one displayed frame.
pub trait Animator {
    fn advance(&mut self, clock: &FrameClock);
}

/// Euler rotation accumulated in double precision, applied X then Y then Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    /// Model matrix `Rx * Ry * Rz`. Angles are wrapped to [0, 2π) before the
    /// cast so precision does not degrade however long the page stays open.
    pub fn matrix(&self) -> Mat4 {
        let wrap = |a: f64| a.rem_euclid(TAU) as f32;
        Mat4::from_rotation_x(wrap(self.x))
            * Mat4::from_rotation_y(wrap(self.y))
            * Mat4::from_rotation_z(wrap(self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn clock_counts_frames() {
        let c = FrameClock::at(1.0).next(1.016).next(1.033);
        assert_eq!(c.frame, 2);
        assert_eq!(c.seconds, 1.033);
    }

    #[test]
    fn wrapped_matrix_matches_unwrapped() {
        let r = Rotation { x: 0.3 + TAU * 40.0, y: -0.2, z: 1.0 };
        let plain = Mat4::from_rotation_x(0.3) * Mat4::from_rotation_y(-0.2) * Mat4::from_rotation_z(1.0);
        let p = Vec3::new(1.0, 2.0, 3.0);
        let a = r.matrix().transform_point3(p);
        let b = plain.transform_point3(p);
        assert!((a - b).length() < 1e-4, "{a:?} vs {b:?}");
    }
}
