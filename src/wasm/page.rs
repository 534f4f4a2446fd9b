//! DOM side of the page: literal content and the modal dialogs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

use crate::content::{
    FeaturedSession, Highlight, OptionList, COMMUNITY_FEATURES, FEATURED_SESSIONS,
    ORGANIZER_BENEFITS, PARTNERS,
};
use crate::modal::{FormField, ModalDeck, ModalKind, Visibility};

fn element(
    document: &Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

fn icon(document: &Document, classes: &str) -> Result<Element, JsValue> {
    element(document, "i", classes, None)
}

/// Replace the children of the element with `id`, if present, with
/// `build(item)` for every item.
fn fill<T>(
    document: &Document,
    id: &str,
    items: &[T],
    build: impl Fn(&Document, &T) -> Result<Element, JsValue>,
) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(id) else {
        log::debug!("#{id} not in page, skipping");
        return Ok(());
    };
    container.set_text_content(None);
    for item in items {
        container.append_child(&build(document, item)?)?;
    }
    Ok(())
}

fn session_card(document: &Document, s: &FeaturedSession) -> Result<Element, JsValue> {
    let card = element(document, "div", "session-card", None)?;

    let header = element(document, "div", "session-header", None)?;
    let badge = element(document, "div", "icon-badge", None)?;
    badge.append_child(&icon(document, s.icon)?)?;
    header.append_child(&badge)?;
    let heading = element(document, "div", "", None)?;
    heading.append_child(&element(document, "h3", "", Some(s.title))?)?;
    heading.append_child(&element(document, "p", "muted", Some(s.sport))?)?;
    header.append_child(&heading)?;
    header.append_child(&element(document, "span", "price", Some(s.price))?)?;
    card.append_child(&header)?;

    let participants = format!("{} participants", s.participants);
    let rows = [
        ("fas fa-user-tie", s.instructor),
        ("fas fa-map-marker-alt", s.location),
        ("fas fa-clock", s.time),
        ("fas fa-users", participants.as_str()),
    ];
    let details = element(document, "div", "session-details", None)?;
    for (class, text) in rows {
        let row = element(document, "div", "muted", None)?;
        row.append_child(&icon(document, class)?)?;
        row.append_child(&element(document, "span", "", Some(text))?)?;
        details.append_child(&row)?;
    }
    card.append_child(&details)?;

    let join = element(document, "button", "primary wide", Some("Join Session"))?;
    join.set_attribute("type", "button")?;
    card.append_child(&join)?;
    Ok(card)
}

fn highlight(document: &Document, h: &Highlight) -> Result<Element, JsValue> {
    let item = element(document, "div", "highlight", None)?;
    let badge = element(document, "div", "icon-badge", None)?;
    badge.append_child(&icon(document, h.icon)?)?;
    item.append_child(&badge)?;
    item.append_child(&element(document, "h3", "", Some(h.title))?)?;
    item.append_child(&element(document, "p", "muted", Some(h.description))?)?;
    Ok(item)
}

fn partner(document: &Document, name: &&str) -> Result<Element, JsValue> {
    let tile = element(document, "div", "partner", None)?;
    let badge = element(document, "div", "icon-badge", None)?;
    badge.append_child(&icon(document, "fas fa-handshake")?)?;
    tile.append_child(&badge)?;
    tile.append_child(&element(document, "h3", "", Some(*name))?)?;
    Ok(tile)
}

fn select(document: &Document, list: OptionList) -> Result<Element, JsValue> {
    let el = element(document, "select", "", None)?;
    el.set_attribute("data-options", list.key())?;
    populate(document, &el, list)?;
    Ok(el)
}

fn populate(document: &Document, select: &Element, list: OptionList) -> Result<(), JsValue> {
    for option in list.options() {
        select.append_child(&element(document, "option", "", Some(*option))?)?;
    }
    Ok(())
}

/// Fill every `select[data-options]` already in the markup.
fn fill_selects(document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all("select[data-options]")?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let key = el.get_attribute("data-options").unwrap_or_default();
        match key.parse::<OptionList>() {
            Ok(list) if el.child_element_count() == 0 => populate(document, &el, list)?,
            Ok(_) => {}
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(())
}

fn modal(document: &Document, kind: ModalKind) -> Result<Element, JsValue> {
    let overlay = element(document, "div", "modal-overlay hidden", None)?;
    overlay.set_id(&kind.element_id());

    let card = element(document, "div", "modal-card", None)?;
    let header = element(document, "div", "modal-header", None)?;
    header.append_child(&element(document, "h3", "gradient-text", Some(kind.title()))?)?;
    let close = element(document, "button", "modal-close", None)?;
    close.set_attribute("type", "button")?;
    close.set_attribute("data-modal-close", kind.as_str())?;
    close.append_child(&icon(document, "fas fa-times")?)?;
    header.append_child(&close)?;
    card.append_child(&header)?;

    let form = element(document, "form", "modal-form", None)?;
    for &field in kind.fields() {
        let row = element(document, "div", "", None)?;
        row.append_child(&element(document, "label", "", Some(field.label()))?)?;
        let input = match field {
            FormField::PrimarySport => select(document, OptionList::Sports)?,
            _ => {
                let input = element(document, "input", "", None)?;
                if let Some(ty) = field.input_type() {
                    input.set_attribute("type", ty)?;
                }
                if let Some(p) = field.placeholder() {
                    input.set_attribute("placeholder", p)?;
                }
                input
            }
        };
        row.append_child(&input)?;
        form.append_child(&row)?;
    }
    let submit = element(document, "button", "primary wide", Some(kind.submit_label()))?;
    submit.set_attribute("type", "submit")?;
    form.append_child(&submit)?;
    card.append_child(&form)?;

    overlay.append_child(&card)?;
    Ok(overlay)
}

/// Render all literal content and the dialogs into their containers.
pub fn render_content(document: &Document) -> Result<(), JsValue> {
    fill(document, "featured-sessions", &FEATURED_SESSIONS, session_card)?;
    fill(document, "community-features", &COMMUNITY_FEATURES, highlight)?;
    fill(document, "organizer-benefits", &ORGANIZER_BENEFITS, highlight)?;
    fill(document, "partners", &PARTNERS, partner)?;
    fill(document, "modals", &ModalKind::ALL, |d, k| modal(d, *k))?;
    fill_selects(document)
}

/// Mirror `state` onto the overlay's classes. Missing overlay is a no-op.
fn apply(document: &Document, kind: ModalKind, state: Visibility) -> Result<(), JsValue> {
    let Some(el) = document.get_element_by_id(&kind.element_id()) else {
        log::debug!("#{} not in page", kind.element_id());
        return Ok(());
    };
    let (add, remove) = state.classes();
    let classes = el.class_list();
    classes.remove_1(remove)?;
    classes.add_1(add)
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Click wiring for the dialogs. Listeners are removed on drop.
pub struct ModalController {
    deck: Rc<RefCell<ModalDeck>>,
    document: Document,
    listeners: Vec<Listener>,
}

impl ModalController {
    /// Hook up every `[data-modal-open]` / `[data-modal-close]` element and
    /// make every dialog form inert.
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let mut controller = Self {
            deck: Rc::new(RefCell::new(ModalDeck::new())),
            document: document.clone(),
            listeners: Vec::new(),
        };
        controller.bind("[data-modal-open]", "data-modal-open", Visibility::Shown)?;
        controller.bind("[data-modal-close]", "data-modal-close", Visibility::Hidden)?;

        for kind in ModalKind::ALL {
            let selector = format!("#{} form", kind.element_id());
            if let Some(form) = document.query_selector(&selector)? {
                let callback = Closure::wrap(Box::new(move |e: Event| {
                    e.prevent_default();
                    log::info!("{kind}: submission ignored");
                }) as Box<dyn FnMut(Event)>);
                controller.listen(form.into(), "submit", callback)?;
            }
        }
        Ok(controller)
    }

    fn bind(&mut self, selector: &str, attribute: &str, state: Visibility) -> Result<(), JsValue> {
        let nodes = self.document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let value = el.get_attribute(attribute).unwrap_or_default();
            let kind = match value.parse::<ModalKind>() {
                Ok(kind) => kind,
                Err(e) => {
                    log::warn!("{e}; no listener attached");
                    continue;
                }
            };
            let deck = self.deck.clone();
            let document = self.document.clone();
            let callback = Closure::wrap(Box::new(move |_: Event| {
                deck.borrow_mut().set(kind, state);
                match apply(&document, kind, state) {
                    Ok(()) => log::debug!("{kind}: {state:?}"),
                    Err(e) => log::warn!("{kind}: {e:?}"),
                }
            }) as Box<dyn FnMut(Event)>);
            self.listen(el.into(), "click", callback)?;
        }
        Ok(())
    }

    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            event,
            callback,
        });
        Ok(())
    }

    pub fn show(&self, kind: ModalKind) -> Result<(), JsValue> {
        self.deck.borrow_mut().show(kind);
        apply(&self.document, kind, Visibility::Shown)
    }

    pub fn hide(&self, kind: ModalKind) -> Result<(), JsValue> {
        self.deck.borrow_mut().hide(kind);
        apply(&self.document, kind, Visibility::Hidden)
    }

    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.deck.borrow().is_visible(kind)
    }
}

impl Drop for ModalController {
    fn drop(&mut self) {
        for l in self.listeners.drain(..) {
            if let Err(e) = l
                .target
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref())
            {
                log::warn!("removing {} listener failed: {e:?}", l.event);
            }
        }
    }
}
