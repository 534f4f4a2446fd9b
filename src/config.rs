//! Tunables for the two background scenes.
//!
//! Everything here is plain data with a `Default` matching the shipped page;
//! the scene hosts take these by value so tests can shrink grids or counts.

use glam::Vec3;
use std::f64::consts::PI;

/// Brand accent used by both scenes.
pub const ACCENT: u32 = 0x667eea;

/// Linear RGB colour in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Unpack a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    pub fn with_alpha(self, a: f32) -> [f32; 4] {
        [self.r, self.g, self.b, a]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl CameraConfig {
    fn at(position: Vec3) -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Coordinates are drawn uniformly from `[-half_extent, half_extent]`.
    pub half_extent: f32,
    pub color: Color,
    pub point_size: f32,
    pub opacity: f32,
    pub camera: CameraConfig,
    /// Radians added to the X / Y rotation every frame.
    pub spin_x: f64,
    pub spin_y: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 500,
            half_extent: 1000.0,
            color: Color::from_hex(ACCENT),
            point_size: 2.0,
            opacity: 0.6,
            camera: CameraConfig::at(Vec3::new(0.0, 0.0, 1000.0)),
            spin_x: 0.001,
            spin_y: 0.002,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub color: Color,
    pub opacity: f32,
    /// Initial rotation about X, radians.
    pub tilt: f64,
    pub camera: CameraConfig,
    pub frequency: f64,
    pub amplitude: f64,
    /// Radians added to the Z rotation every frame.
    pub spin_z: f64,
    /// Fraction of the viewport height the drawable surface occupies.
    pub surface_height_fraction: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            width_segments: 50,
            height_segments: 50,
            color: Color::from_hex(ACCENT),
            opacity: 0.3,
            tilt: -PI / 3.0,
            camera: CameraConfig::at(Vec3::new(0.0, 50.0, 100.0)),
            frequency: 0.1,
            amplitude: 5.0,
            spin_z: 0.005,
            surface_height_fraction: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_unpacks_to_unit_channels() {
        let c = Color::from_hex(ACCENT);
        assert!((c.r - 0x66 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0x7e as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xea as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.with_alpha(0.6)[3], 0.6);
    }

    #[test]
    fn defaults_match_page() {
        let p = ParticleConfig::default();
        assert_eq!(p.count, 500);
        assert_eq!(p.camera.fov_y_degrees, 75.0);
        assert_eq!(p.camera.position.z, 1000.0);

        let w = WaveConfig::default();
        assert_eq!((w.width_segments, w.height_segments), (50, 50));
        assert_eq!(w.camera.position, Vec3::new(0.0, 50.0, 100.0));
        assert!((w.tilt + std::f64::consts::FRAC_PI_3).abs() < 1e-12);
    }
}
