use std::rc::Rc;

use galeria_core::{with_sort_param, PageSelectors};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlSelectElement};

use crate::http::js_err;

pub type Navigate = Rc<dyn Fn(String)>;

/// Hooks the sort dropdown so that picking a key reloads the page with
/// `?sort=<key>`. Returns `None` when the page has no dropdown.
pub fn install(
    document: &Document,
    selectors: &PageSelectors,
    navigate: Navigate,
) -> Option<EventListener> {
    let select = document
        .get_element_by_id(&selectors.sort_select_id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()?;
    let select_for_change = select.clone();
    let listener = EventListener::new_with_options(
        &select,
        "change",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_event: &Event| {
            let sort_key = select_for_change.value();
            let Some(href) = current_href() else {
                gloo::console::error!("sort: current address unavailable");
                return;
            };
            match with_sort_param(&href, &sort_key) {
                Ok(next) => navigate(next),
                Err(err) => gloo::console::error!("sort:", err.to_string()),
            }
        },
    );
    Some(listener)
}

pub fn navigate_to(href: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(&href) {
        gloo::console::error!("sort: navigation failed", js_err(err));
    }
}

fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
