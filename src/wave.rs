//! Wireframe "ocean" plane displaced by a travelling sine/cosine field.

use glam::Mat4;

use crate::animator::{Animator, FrameClock, Rotation};
use crate::config::WaveConfig;

/// Height of the surface at local `(x, y)` and time `t` seconds.
#[inline]
pub fn wave_height(x: f64, y: f64, t: f64, frequency: f64, amplitude: f64) -> f64 {
    (x * frequency + t).sin() * amplitude + (y * frequency + t).cos() * amplitude
}

/// Regular grid in the XY plane, centred on the origin.
///
/// Vertices are stored row by row starting at the top-left corner
/// (`-w/2, +h/2`), so row `iy` sits at `y = h/2 - iy * cell_h`.
#[derive(Clone, Debug)]
pub struct PlaneGrid {
    columns: u32,
    rows: u32,
    positions: Vec<f32>,
    edges: Vec<u32>,
}

impl PlaneGrid {
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(1);
        let hs = height_segments.max(1);
        let columns = ws + 1;
        let rows = hs + 1;
        let cell_w = width / ws as f32;
        let cell_h = height / hs as f32;

        let mut positions = Vec::with_capacity((columns * rows * 3) as usize);
        for iy in 0..rows {
            let y = height / 2.0 - iy as f32 * cell_h;
            for ix in 0..columns {
                let x = ix as f32 * cell_w - width / 2.0;
                positions.extend_from_slice(&[x, y, 0.0]);
            }
        }

        // Each triangle edge once: horizontals, verticals, and the b-d
        // diagonal of every cell's (a,b,d)/(b,c,d) split.
        let at = |ix: u32, iy: u32| ix + columns * iy;
        let mut edges = Vec::with_capacity(((ws * rows + hs * columns + ws * hs) * 2) as usize);
        for iy in 0..rows {
            for ix in 0..ws {
                edges.extend_from_slice(&[at(ix, iy), at(ix + 1, iy)]);
            }
        }
        for iy in 0..hs {
            for ix in 0..columns {
                edges.extend_from_slice(&[at(ix, iy), at(ix, iy + 1)]);
            }
        }
        for iy in 0..hs {
            for ix in 0..ws {
                edges.extend_from_slice(&[at(ix, iy + 1), at(ix + 1, iy)]);
            }
        }

        Self {
            columns,
            rows,
            positions,
            edges,
        }
    }

    pub fn vertex_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Flattened `xyz` positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Line-list indices, two per edge.
    pub fn edges(&self) -> &[u32] {
        &self.edges
    }
}

/// The hero-section wave: a tilted grid whose heights are recomputed from
/// scratch every frame and which slowly spins about its own Z axis.
#[derive(Clone, Debug)]
pub struct WaveSurface {
    grid: PlaneGrid,
    pub rotation: Rotation,
    frequency: f64,
    amplitude: f64,
    spin_z: f64,
    dirty: bool,
}

impl WaveSurface {
    pub fn new(config: &WaveConfig) -> Self {
        Self {
            grid: PlaneGrid::new(
                config.width,
                config.height,
                config.width_segments,
                config.height_segments,
            ),
            rotation: Rotation {
                x: config.tilt,
                ..Rotation::default()
            },
            frequency: config.frequency,
            amplitude: config.amplitude,
            spin_z: config.spin_z,
            dirty: true,
        }
    }

    pub fn grid(&self) -> &PlaneGrid {
        &self.grid
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }

    /// Overwrite every vertex height for time `t`.
    pub fn displace(&mut self, t: f64) {
        let (frequency, amplitude) = (self.frequency, self.amplitude);
        for v in self.grid.positions.chunks_exact_mut(3) {
            v[2] = wave_height(v[0] as f64, v[1] as f64, t, frequency, amplitude) as f32;
        }
        self.dirty = true;
    }

    /// Whether positions changed since the renderer last uploaded them.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Hand out the positions for upload and clear the dirty flag.
    pub fn take_dirty_positions(&mut self) -> Option<&[f32]> {
        if self.dirty {
            self.dirty = false;
            Some(self.grid.positions())
        } else {
            None
        }
    }
}

impl Animator for WaveSurface {
    fn advance(&mut self, clock: &FrameClock) {
        self.displace(clock.seconds);
        self.rotation.z += self.spin_z;
    }
}
