//! Target-independent half of a scene host: camera, surface sizing, resize
//! policy and the per-frame animator call. The browser layer wraps one of
//! these with a GL renderer and a frame loop.

use rand::Rng;

use crate::animator::{Animator, FrameClock};
use crate::camera::PerspectiveCamera;
use crate::config::{CameraConfig, ParticleConfig, WaveConfig};
use crate::particles::ParticleField;
use crate::viewport::{ResizePolicy, SurfaceFit, SurfaceSize, Viewport};
use crate::wave::WaveSurface;

#[derive(Debug)]
pub struct SceneHost<A> {
    pub camera: PerspectiveCamera,
    surface: SurfaceSize,
    fit: SurfaceFit,
    policy: ResizePolicy,
    animator: A,
    clock: Option<FrameClock>,
}

impl<A: Animator> SceneHost<A> {
    pub fn new(
        animator: A,
        camera: &CameraConfig,
        viewport: Viewport,
        fit: SurfaceFit,
        policy: ResizePolicy,
    ) -> Self {
        Self {
            camera: PerspectiveCamera::new(camera, viewport.aspect()),
            surface: fit.fit(viewport),
            fit,
            policy,
            animator,
            clock: None,
        }
    }

    /// Run the animator for one displayed frame at wall-clock `seconds`.
    pub fn tick(&mut self, seconds: f64) -> FrameClock {
        let clock = match self.clock {
            Some(prev) => prev.next(seconds),
            None => FrameClock::at(seconds),
        };
        self.animator.advance(&clock);
        self.clock = Some(clock);
        clock
    }

    /// Apply a viewport change. Returns `false` (and changes nothing) for a
    /// pinned scene.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        match self.policy {
            ResizePolicy::Pinned => false,
            ResizePolicy::Follow => {
                self.camera.set_aspect(viewport.aspect());
                self.surface = self.fit.fit(viewport);
                true
            }
        }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn frames(&self) -> u64 {
        self.clock.map_or(0, |c| c.frame + 1)
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}

/// Full-window rotating point cloud that tracks the viewport.
pub fn particle_host<R: Rng>(
    config: &ParticleConfig,
    viewport: Viewport,
    rng: &mut R,
) -> SceneHost<ParticleField> {
    SceneHost::new(
        ParticleField::generate(config, rng),
        &config.camera,
        viewport,
        SurfaceFit::FullViewport,
        ResizePolicy::Follow,
    )
}

/// Hero wave sized once at mount; resizes leave it untouched.
pub fn wave_host(config: &WaveConfig, viewport: Viewport) -> SceneHost<WaveSurface> {
    SceneHost::new(
        WaveSurface::new(config),
        &config.camera,
        viewport,
        SurfaceFit::HeightFraction(config.surface_height_fraction),
        ResizePolicy::Pinned,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn particle_host_follows_resize() {
        let mut host = particle_host(
            &ParticleConfig::default(),
            Viewport::new(1024.0, 768.0),
            &mut SmallRng::seed_from_u64(0),
        );
        assert!(host.resize(Viewport::new(1920.0, 1080.0)));
        assert!((host.camera.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(host.surface(), SurfaceSize { width: 1920, height: 1080 });
    }

    #[test]
    fn wave_host_is_pinned() {
        let mut host = wave_host(&WaveConfig::default(), Viewport::new(1000.0, 500.0));
        let surface = host.surface();
        assert_eq!(surface, SurfaceSize { width: 1000, height: 400 });
        assert!(!host.resize(Viewport::new(300.0, 900.0)));
        assert_eq!(host.surface(), surface);
        assert!((host.camera.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn tick_counts_frames() {
        let mut host = wave_host(&WaveConfig::default(), Viewport::new(10.0, 10.0));
        assert_eq!(host.frames(), 0);
        host.tick(1.0);
        let c = host.tick(1.5);
        assert_eq!(c.frame, 1);
        assert_eq!(host.frames(), 2);
    }
}
