use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::SceneError;

/// WebGL2 context on a transparent canvas so the page shows through.
pub fn context(canvas: &HtmlCanvasElement) -> Result<GL, SceneError> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::FALSE)?;
    canvas
        .get_context_with_context_options("webgl2", &options)?
        .ok_or(SceneError::NoWebGl2)?
        .dyn_into::<GL>()
        .map_err(|_| SceneError::NoWebGl2)
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(SceneError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SceneError::ShaderCompile(info))
    }
}

pub fn program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, SceneError> {
    let vs = compile_shader(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fragment)?;
    let program = gl
        .create_program()
        .ok_or(SceneError::Allocation("program"))?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    // shaders are no longer needed once linked (or once linking failed)
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SceneError::ProgramLink(info))
    }
}

pub fn uniform(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, SceneError> {
    gl.get_uniform_location(program, name)
        .ok_or(SceneError::MissingUniform(name))
}

pub fn vertex_array(gl: &GL) -> Result<WebGlVertexArrayObject, SceneError> {
    gl.create_vertex_array()
        .ok_or(SceneError::Allocation("vertex array"))
}

/// Create a buffer on `target` and fill it with `data`.
pub fn f32_buffer(gl: &GL, target: u32, data: &[f32], usage: u32) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl.create_buffer().ok_or(SceneError::Allocation("buffer"))?;
    gl.bind_buffer(target, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(target, &js_sys::Float32Array::from(data), usage);
    Ok(buffer)
}

pub fn u32_buffer(gl: &GL, target: u32, data: &[u32], usage: u32) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl.create_buffer().ok_or(SceneError::Allocation("buffer"))?;
    gl.bind_buffer(target, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(target, &js_sys::Uint32Array::from(data), usage);
    Ok(buffer)
}

/// Overwrite the start of an existing array buffer.
pub fn rewrite_f32(gl: &GL, buffer: &WebGlBuffer, data: &[f32]) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.buffer_sub_data_with_i32_and_array_buffer_view(
        GL::ARRAY_BUFFER,
        0,
        &js_sys::Float32Array::from(data),
    );
}

/// Bind `buffer` as a tightly packed vec3 float attribute at `location`.
pub fn vec3_attribute(gl: &GL, buffer: &WebGlBuffer, location: u32) {
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
}

/// Straight-alpha "transparent" blending.
pub fn enable_transparency(gl: &GL) {
    gl.enable(GL::BLEND);
    gl.blend_func_separate(
        GL::SRC_ALPHA,
        GL::ONE_MINUS_SRC_ALPHA,
        GL::ONE,
        GL::ONE_MINUS_SRC_ALPHA,
    );
}
