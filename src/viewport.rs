/// Size of the browser viewport in CSS pixels.
///
/// Scene hosts receive this explicitly at mount and on every resize
/// notification; nothing below the wasm layer reads window globals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero-height viewport (minimised tab) yields 1.0
    /// so the projection stays finite.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }
}

/// Backing-store size of a canvas, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// How a scene's drawable surface is sized from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceFit {
    FullViewport,
    /// Full width, this fraction of the height.
    HeightFraction(f64),
}

impl SurfaceFit {
    pub fn fit(&self, viewport: Viewport) -> SurfaceSize {
        let height = match *self {
            SurfaceFit::FullViewport => viewport.height,
            SurfaceFit::HeightFraction(f) => viewport.height * f,
        };
        SurfaceSize {
            width: viewport.width.max(0.0) as u32,
            height: height.max(0.0) as u32,
        }
    }
}

/// Whether a scene follows viewport resizes after mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    Follow,
    Pinned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_full_and_fractional() {
        let vp = Viewport::new(1280.0, 720.0);
        assert_eq!(
            SurfaceFit::FullViewport.fit(vp),
            SurfaceSize { width: 1280, height: 720 }
        );
        assert_eq!(
            SurfaceFit::HeightFraction(0.8).fit(vp),
            SurfaceSize { width: 1280, height: 576 }
        );
    }

    #[test]
    fn degenerate_height_keeps_aspect_finite() {
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
    }
}
