use std::rc::Rc;

use galeria_core::{
    ArtworkId, ClassTarget, LikeError, LikeRequest, LikeResponse, LikeUpdate, PageSelectors,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DomTokenList, Element, Event};

use crate::csrf::CsrfSource;
use crate::http::{js_err, LikeTransport};

#[derive(Clone)]
pub struct LikeHooks {
    pub csrf: Rc<dyn CsrfSource>,
    pub transport: LikeTransport,
}

/// Attaches a click listener to every like control currently in the document.
///
/// Controls inserted later are not picked up. Overlapping clicks on one
/// control each send a request and the last response to arrive wins.
pub fn install(document: &Document, selectors: &PageSelectors, hooks: LikeHooks) -> Vec<EventListener> {
    let controls = match document.query_selector_all(&selectors.like_button) {
        Ok(controls) => controls,
        Err(err) => {
            gloo::console::error!("like: bad control selector", js_err(err));
            return Vec::new();
        }
    };
    let selectors = Rc::new(selectors.clone());
    let mut listeners = Vec::with_capacity(controls.length() as usize);
    for index in 0..controls.length() {
        let Some(control) = controls
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let selectors = selectors.clone();
        let hooks = hooks.clone();
        let control_for_click = control.clone();
        let listener = EventListener::new_with_options(
            &control,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                if let Err(err) = begin_toggle(&control_for_click, &selectors, &hooks) {
                    gloo::console::error!("like:", err.to_string());
                }
            },
        );
        listeners.push(listener);
    }
    listeners
}

fn begin_toggle(
    control: &Element,
    selectors: &Rc<PageSelectors>,
    hooks: &LikeHooks,
) -> Result<(), LikeError> {
    let artwork_id = control
        .get_attribute(&selectors.artwork_id_attr)
        .and_then(|raw| ArtworkId::parse(&raw).ok())
        .ok_or(LikeError::MissingArtworkId)?;
    let token = hooks.csrf.csrf_token()?;
    let pending = (hooks.transport)(LikeRequest::toggle(&artwork_id, &token));
    let control = control.clone();
    let selectors = selectors.clone();
    spawn_local(async move {
        let result = pending
            .await
            .and_then(LikeResponse::into_update)
            .and_then(|update| apply_update(&control, &selectors, &update));
        if let Err(err) = result {
            gloo::console::error!("like:", artwork_id.to_string(), err.to_string());
        }
    });
    Ok(())
}

/// Mirrors an accepted toggle onto the control's icon and counter.
pub fn apply_update(
    control: &Element,
    selectors: &PageSelectors,
    update: &LikeUpdate,
) -> Result<(), LikeError> {
    let icon = control
        .query_selector(&selectors.like_icon)
        .ok()
        .flatten()
        .ok_or(LikeError::MissingElement("icon"))?;
    let counter = control
        .query_selector(&selectors.likes_count)
        .ok()
        .flatten()
        .ok_or(LikeError::MissingElement("likes count"))?;
    update.icon_edit().apply(&mut IconClasses(icon.class_list()));
    counter.set_text_content(Some(&update.count_text));
    Ok(())
}

struct IconClasses(DomTokenList);

impl ClassTarget for IconClasses {
    fn remove_class(&mut self, class: &str) {
        let _ = self.0.remove_1(class);
    }

    fn add_class(&mut self, class: &str) {
        let _ = self.0.add_1(class);
    }
}
