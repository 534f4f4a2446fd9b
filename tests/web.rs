#![cfg(target_arch = "wasm32")]

use sports_landing::modal::ModalKind;
use sports_landing::wasm::{self, LandingPage, HERO_CANVAS, PARTICLE_CANVAS};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add(tag: &str, id: &str) {
    let doc = document();
    if doc.get_element_by_id(id).is_none() {
        let el = doc.create_element(tag).unwrap();
        el.set_id(id);
        doc.body().unwrap().append_child(&el).unwrap();
    }
}

fn fixture() {
    add("canvas", PARTICLE_CANVAS);
    add("canvas", HERO_CANVAS);
    add("div", "modals");
    add("div", "partners");
    let doc = document();
    if doc.query_selector("[data-modal-open=login]").unwrap().is_none() {
        let open = doc.create_element("button").unwrap();
        open.set_attribute("data-modal-open", "login").unwrap();
        open.set_id("open-login");
        doc.body().unwrap().append_child(&open).unwrap();
    }
}

#[wasm_bindgen_test]
fn mounts_both_scenes_and_sizes_canvases() {
    fixture();
    let page = LandingPage::mount().unwrap();
    assert!(page.particles.as_ref().unwrap().is_running());
    assert!(page.wave.as_ref().unwrap().is_running());

    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let canvas = document()
        .get_element_by_id(PARTICLE_CANVAS)
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert_eq!(canvas.width(), w);
}

/// Resolve after `ms` milliseconds so queued animation frames get a chance to run.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn canvas(id: &str) -> web_sys::HtmlCanvasElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap()
}

fn fire_resize() {
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
async fn dropping_a_scene_stops_its_frames() {
    fixture();
    let mut page = LandingPage::mount().unwrap();
    let wave = page.wave.take().unwrap();
    assert_eq!(wave.name(), "wave");
    let drawn = wave.frame_count();

    sleep(200).await;
    assert!(drawn.get() > 0, "wave never drew a frame");

    wave.dispose();
    let at_dispose = drawn.get();
    sleep(200).await;
    assert_eq!(drawn.get(), at_dispose);
    drop(page);
}

#[wasm_bindgen_test]
fn particle_resize_listener_lives_and_dies_with_its_handle() {
    fixture();
    let mut page = LandingPage::mount().unwrap();
    let particles = canvas(PARTICLE_CANVAS);
    let hero = canvas(HERO_CANVAS);
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;

    particles.set_width(7);
    hero.set_width(7);
    fire_resize();
    assert_eq!(particles.width(), width);
    // the wave never follows resizes
    assert_eq!(hero.width(), 7);

    drop(page.particles.take());
    particles.set_width(7);
    fire_resize();
    assert_eq!(particles.width(), 7);
    drop(page);
}

#[wasm_bindgen_test]
fn blending_is_set_up_at_mount() {
    fixture();
    let _page = LandingPage::mount().unwrap();
    let gl = canvas(PARTICLE_CANVAS)
        .get_context("webgl2")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .unwrap();
    assert!(gl.is_enabled(web_sys::WebGl2RenderingContext::BLEND));
    let src = gl
        .get_parameter(web_sys::WebGl2RenderingContext::BLEND_SRC_RGB)
        .unwrap()
        .as_f64()
        .unwrap() as u32;
    assert_eq!(src, web_sys::WebGl2RenderingContext::SRC_ALPHA);
}

#[wasm_bindgen_test]
fn content_is_rendered_once_per_mount() {
    fixture();
    wasm::mount().unwrap();
    wasm::mount().unwrap();
    let partners = document().get_element_by_id("partners").unwrap();
    assert_eq!(partners.child_element_count(), 8);
    assert_eq!(document().query_selector_all(".modal-overlay").unwrap().length(), 4);
    wasm::unmount();
}

#[wasm_bindgen_test]
fn modal_classes_follow_show_and_hide() {
    fixture();
    let page = LandingPage::mount().unwrap();
    let overlay = document().get_element_by_id("signup-modal").unwrap();
    assert!(overlay.class_list().contains("hidden"));

    page.modals.show(ModalKind::Signup).unwrap();
    assert!(page.modals.is_visible(ModalKind::Signup));
    assert!(overlay.class_list().contains("flex"));
    assert!(!overlay.class_list().contains("hidden"));
    let login = document().get_element_by_id("login-modal").unwrap();
    assert!(login.class_list().contains("hidden"));

    page.modals.hide(ModalKind::Signup).unwrap();
    assert!(overlay.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn clicking_an_open_button_shows_its_modal() {
    fixture();
    let page = LandingPage::mount().unwrap();
    document()
        .get_element_by_id("open-login")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
    assert!(page.modals.is_visible(ModalKind::Login));
    let overlay = document().get_element_by_id("login-modal").unwrap();
    assert!(overlay.class_list().contains("flex"));
}

#[wasm_bindgen_test]
fn unknown_modal_button_is_inert() {
    fixture();
    let doc = document();
    let stray = doc.create_element("button").unwrap();
    stray.set_attribute("data-modal-open", "pricing").unwrap();
    doc.body().unwrap().append_child(&stray).unwrap();

    let page = LandingPage::mount();
    assert!(page.is_ok());
    stray.dyn_ref::<web_sys::HtmlElement>().unwrap().click();

    for kind in ModalKind::ALL {
        let overlay = doc.get_element_by_id(&kind.element_id()).unwrap();
        assert!(overlay.class_list().contains("hidden"), "{kind} became visible");
    }
    stray.remove();
}

#[wasm_bindgen_test]
fn dialog_submit_is_suppressed() {
    fixture();
    let _page = LandingPage::mount().unwrap();
    for kind in ModalKind::ALL {
        let form = document()
            .query_selector(&format!("#{} form", kind.element_id()))
            .unwrap()
            .unwrap();
        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        let submit = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
        form.dispatch_event(&submit).unwrap();
        assert!(submit.default_prevented(), "{kind} form submitted");
    }
}
