use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use crate::config::{ParticleConfig, WaveConfig};
use crate::error::SceneError;

mod gl;
pub mod host;
pub mod page;
mod render;

pub use host::{FrameCount, SceneHandle};
pub use page::ModalController;

pub const PARTICLE_CANVAS: &str = "particle-canvas";
pub const HERO_CANVAS: &str = "hero-canvas";

thread_local! {
    static PAGE: RefCell<Option<LandingPage>> = const { RefCell::new(None) };
}

/// Everything the page holds on to while mounted. Dropping it tears the
/// scenes and listeners down.
pub struct LandingPage {
    pub particles: Option<SceneHandle>,
    pub wave: Option<SceneHandle>,
    pub modals: ModalController,
}

/// `None` when the page has no element with `id`; a scene without a surface
/// is simply not mounted.
fn canvas(document: &Document, id: &str) -> Result<Option<HtmlCanvasElement>, SceneError> {
    match document.get_element_by_id(id) {
        None => {
            log::debug!("no #{id}, scene skipped");
            Ok(None)
        }
        Some(el) => el
            .dyn_into::<HtmlCanvasElement>()
            .map(Some)
            .map_err(|_| SceneError::WrongElement(id.to_owned(), "canvas")),
    }
}

impl LandingPage {
    pub fn mount() -> Result<Self, SceneError> {
        let window = web_sys::window().ok_or(SceneError::NoWindow)?;
        let document = window.document().ok_or(SceneError::NoDocument)?;

        page::render_content(&document)?;
        let modals = ModalController::attach(&document)?;

        let viewport = host::viewport(&window)?;
        let particles = canvas(&document, PARTICLE_CANVAS)?
            .map(|c| render::particles(&window, c, viewport, &ParticleConfig::default()))
            .transpose()?;
        let wave = canvas(&document, HERO_CANVAS)?
            .map(|c| render::wave(&window, c, viewport, &WaveConfig::default()))
            .transpose()?;

        Ok(Self {
            particles,
            wave,
            modals,
        })
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    mount()
}

/// Mount (or remount) the page's scenes and dialogs.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();
    let page = LandingPage::mount()?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Stop both render loops and detach every listener.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        log::info!("landing page unmounted");
    }
}
