//! Frame loop and resize subscription for one mounted scene.
//!
//! Everything a scene registers with the window is owned by its
//! `SceneHandle`; dropping the handle cancels the pending frame, removes the
//! resize listener and frees GL objects.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, Window};

use crate::animator::Animator;
use crate::error::SceneError;
use crate::scene::SceneHost;
use crate::viewport::{ResizePolicy, SurfaceSize, Viewport};

/// GL side of a scene: draws whatever the animator left in the host.
pub trait Drawable {
    type Animator: Animator;

    fn draw(&mut self, gl: &GL, host: &mut SceneHost<Self::Animator>);

    fn release(&mut self, gl: &GL);
}

/// Current window size. The one place the wasm layer reads it.
pub fn viewport(window: &Window) -> Result<Viewport, SceneError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

fn apply_surface(canvas: &HtmlCanvasElement, size: SurfaceSize) -> Result<(), JsValue> {
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    let style = canvas.style();
    style.set_property("width", &format!("{}px", size.width))?;
    style.set_property("height", &format!("{}px", size.height))?;
    Ok(())
}

struct Mounted<D: Drawable> {
    gl: GL,
    canvas: HtmlCanvasElement,
    host: SceneHost<D::Animator>,
    pass: D,
}

impl<D: Drawable> Mounted<D> {
    fn frame(&mut self, seconds: f64) {
        self.host.tick(seconds);
        let size = self.host.surface();
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        self.pass.draw(&self.gl, &mut self.host);
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        if self.host.resize(viewport) {
            apply_surface(&self.canvas, self.host.surface())?;
        }
        Ok(())
    }
}

/// Number of frames a scene has drawn. Clones share the count and stay
/// readable after the scene's handle is gone.
#[derive(Clone, Debug, Default)]
pub struct FrameCount(Rc<Cell<u64>>);

impl FrameCount {
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Pending request id plus the self-rescheduling callback.
#[derive(Default)]
struct FrameLoop {
    id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    drawn: FrameCount,
}

impl FrameLoop {
    fn schedule(&self, window: &Window) -> Result<(), JsValue> {
        if let Some(cb) = self.callback.borrow().as_ref() {
            let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            self.id.set(Some(id));
        }
        Ok(())
    }
}

pub struct SceneHandle {
    name: &'static str,
    window: Window,
    frames: Rc<FrameLoop>,
    resize: Option<Closure<dyn FnMut()>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl SceneHandle {
    /// Size the canvas, start the frame loop and, for scenes that follow the
    /// viewport, subscribe to window resizes.
    pub fn start<D: Drawable + 'static>(
        name: &'static str,
        window: &Window,
        canvas: HtmlCanvasElement,
        gl: GL,
        host: SceneHost<D::Animator>,
        pass: D,
    ) -> Result<Self, SceneError>
    where
        D::Animator: 'static,
    {
        apply_surface(&canvas, host.surface())?;
        let policy = host.policy();
        let mounted = Rc::new(RefCell::new(Mounted {
            gl,
            canvas,
            host,
            pass,
        }));

        let frames = Rc::new(FrameLoop::default());
        let tick = {
            let mounted = mounted.clone();
            let frames = frames.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                frames.id.set(None);
                mounted.borrow_mut().frame(js_sys::Date::now() * 0.001);
                frames.drawn.bump();
                if let Err(e) = frames.schedule(&window) {
                    log::error!("{name}: could not schedule next frame: {e:?}");
                }
            }) as Box<dyn FnMut()>)
        };
        *frames.callback.borrow_mut() = Some(tick);

        let resize = match policy {
            ResizePolicy::Pinned => None,
            ResizePolicy::Follow => {
                let mounted = mounted.clone();
                let win = window.clone();
                let cb = Closure::wrap(Box::new(move || {
                    let result = viewport(&win)
                        .map_err(JsValue::from)
                        .and_then(|vp| mounted.borrow_mut().resize(vp));
                    match result {
                        Ok(()) => log::debug!("{name}: resized"),
                        Err(e) => log::warn!("{name}: resize failed: {e:?}"),
                    }
                }) as Box<dyn FnMut()>);
                window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
                Some(cb)
            }
        };

        let release: Box<dyn FnOnce()> = Box::new(move || {
            let mut m = mounted.borrow_mut();
            let Mounted { gl, pass, .. } = &mut *m;
            pass.release(gl);
        });

        let handle = Self {
            name,
            window: window.clone(),
            frames,
            resize,
            release: Some(release),
        };
        handle.frames.schedule(window)?;
        log::info!("{name}: mounted");
        Ok(handle)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a frame callback is currently queued.
    pub fn is_running(&self) -> bool {
        self.frames.id.get().is_some()
    }

    pub fn frame_count(&self) -> FrameCount {
        self.frames.drawn.clone()
    }

    /// Explicit teardown; the same as dropping the handle.
    pub fn dispose(self) {}
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        if let Some(id) = self.frames.id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("{}: cancel frame failed: {e:?}", self.name);
            }
        }
        // drops the tick closure and with it the Rc cycle through `frames`
        self.frames.callback.borrow_mut().take();

        if let Some(cb) = self.resize.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            {
                log::warn!("{}: removing resize listener failed: {e:?}", self.name);
            }
        }
        if let Some(release) = self.release.take() {
            release();
        }
        log::info!("{}: disposed", self.name);
    }
}
