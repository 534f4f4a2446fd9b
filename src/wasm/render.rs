use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use super::gl;
use super::host::{Drawable, SceneHandle};
use crate::config::{ParticleConfig, WaveConfig};
use crate::error::SceneError;
use crate::particles::ParticleField;
use crate::scene::{self, SceneHost};
use crate::viewport::Viewport;
use crate::wave::WaveSurface;

const POSITION: u32 = 0;

// Points shrink with depth like a perspective-attenuated sprite:
// size * (half surface height / view depth).
const POINTS_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_model_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;
void main() {
    vec4 mv = u_model_view * vec4(a_position, 1.0);
    gl_PointSize = u_size * (u_scale / -mv.z);
    gl_Position = u_projection * mv;
}
"#;

const LINES_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_mvp;
void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
}
"#;

const FLAT_FS: &str = r#"#version 300 es
precision mediump float;
uniform vec4 u_color;
out vec4 out_color;
void main() {
    out_color = u_color;
}
"#;

pub struct PointsPass {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    count: i32,
    u_model_view: WebGlUniformLocation,
    u_projection: WebGlUniformLocation,
    u_size: WebGlUniformLocation,
    u_scale: WebGlUniformLocation,
    u_color: WebGlUniformLocation,
    color: [f32; 4],
    size: f32,
}

impl PointsPass {
    fn new(gl: &GL, field: &ParticleField, config: &ParticleConfig) -> Result<Self, SceneError> {
        let program = gl::program(gl, POINTS_VS, FLAT_FS)?;
        gl::enable_transparency(gl);
        let vao = gl::vertex_array(gl)?;
        gl.bind_vertex_array(Some(&vao));
        let buffer = gl::f32_buffer(gl, GL::ARRAY_BUFFER, field.flat_positions(), GL::STATIC_DRAW)?;
        gl::vec3_attribute(gl, &buffer, POSITION);
        gl.bind_vertex_array(None);

        Ok(Self {
            u_model_view: gl::uniform(gl, &program, "u_model_view")?,
            u_projection: gl::uniform(gl, &program, "u_projection")?,
            u_size: gl::uniform(gl, &program, "u_size")?,
            u_scale: gl::uniform(gl, &program, "u_scale")?,
            u_color: gl::uniform(gl, &program, "u_color")?,
            program,
            vao,
            buffer,
            count: field.len() as i32,
            color: config.color.with_alpha(config.opacity),
            size: config.point_size,
        })
    }
}

impl Drawable for PointsPass {
    type Animator = ParticleField;

    fn draw(&mut self, gl: &GL, host: &mut SceneHost<ParticleField>) {
        let model_view = host.camera.view_matrix() * host.animator().model_matrix();
        let scale = host.surface().height as f32 * 0.5;

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_model_view),
            false,
            &model_view.to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_projection),
            false,
            &host.camera.projection_matrix().to_cols_array(),
        );
        gl.uniform1f(Some(&self.u_size), self.size);
        gl.uniform1f(Some(&self.u_scale), scale);
        gl.uniform4fv_with_f32_array(Some(&self.u_color), &self.color);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.count);
        gl.bind_vertex_array(None);
    }

    fn release(&mut self, gl: &GL) {
        gl.delete_vertex_array(Some(&self.vao));
        gl.delete_buffer(Some(&self.buffer));
        gl.delete_program(Some(&self.program));
    }
}

pub struct WireframePass {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    positions: WebGlBuffer,
    indices: WebGlBuffer,
    index_count: i32,
    u_mvp: WebGlUniformLocation,
    u_color: WebGlUniformLocation,
    color: [f32; 4],
}

impl WireframePass {
    fn new(gl: &GL, wave: &WaveSurface, config: &WaveConfig) -> Result<Self, SceneError> {
        let program = gl::program(gl, LINES_VS, FLAT_FS)?;
        gl::enable_transparency(gl);
        let vao = gl::vertex_array(gl)?;
        gl.bind_vertex_array(Some(&vao));
        let grid = wave.grid();
        let positions = gl::f32_buffer(gl, GL::ARRAY_BUFFER, grid.positions(), GL::DYNAMIC_DRAW)?;
        gl::vec3_attribute(gl, &positions, POSITION);
        // element buffer binding is captured by the VAO
        let indices = gl::u32_buffer(gl, GL::ELEMENT_ARRAY_BUFFER, grid.edges(), GL::STATIC_DRAW)?;
        gl.bind_vertex_array(None);

        Ok(Self {
            u_mvp: gl::uniform(gl, &program, "u_mvp")?,
            u_color: gl::uniform(gl, &program, "u_color")?,
            program,
            vao,
            positions,
            indices,
            index_count: grid.edges().len() as i32,
            color: config.color.with_alpha(config.opacity),
        })
    }
}

impl Drawable for WireframePass {
    type Animator = WaveSurface;

    fn draw(&mut self, gl: &GL, host: &mut SceneHost<WaveSurface>) {
        if let Some(positions) = host.animator_mut().take_dirty_positions() {
            gl::rewrite_f32(gl, &self.positions, positions);
        }
        let mvp = host.camera.projection_matrix()
            * host.camera.view_matrix()
            * host.animator().model_matrix();

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(Some(&self.u_mvp), false, &mvp.to_cols_array());
        gl.uniform4fv_with_f32_array(Some(&self.u_color), &self.color);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::LINES, self.index_count, GL::UNSIGNED_INT, 0);
        gl.bind_vertex_array(None);
    }

    fn release(&mut self, gl: &GL) {
        gl.delete_vertex_array(Some(&self.vao));
        gl.delete_buffer(Some(&self.positions));
        gl.delete_buffer(Some(&self.indices));
        gl.delete_program(Some(&self.program));
    }
}

/// Mount the full-window particle background on `canvas`.
pub fn particles(
    window: &Window,
    canvas: HtmlCanvasElement,
    viewport: Viewport,
    config: &ParticleConfig,
) -> Result<SceneHandle, SceneError> {
    let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
    let host = scene::particle_host(config, viewport, &mut rng);
    let gl = gl::context(&canvas)?;
    let pass = PointsPass::new(&gl, host.animator(), config)?;
    log::info!(
        "particles: {} points, surface {:?}",
        host.animator().len(),
        host.surface()
    );
    SceneHandle::start("particles", window, canvas, gl, host, pass)
}

/// Mount the hero-section wave on `canvas`.
pub fn wave(
    window: &Window,
    canvas: HtmlCanvasElement,
    viewport: Viewport,
    config: &WaveConfig,
) -> Result<SceneHandle, SceneError> {
    let host = scene::wave_host(config, viewport);
    let gl = gl::context(&canvas)?;
    let pass = WireframePass::new(&gl, host.animator(), config)?;
    log::info!(
        "wave: {} vertices, surface {:?}",
        host.animator().grid().vertex_count(),
        host.surface()
    );
    SceneHandle::start("wave", window, canvas, gl, host, pass)
}
