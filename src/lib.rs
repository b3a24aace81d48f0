pub mod boot;
pub mod config;
pub mod csrf;
pub mod http;
pub mod like_buttons;
pub mod sort_select;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::EnhanceConfig;
use crate::csrf::MetaCsrfToken;
use crate::like_buttons::LikeHooks;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::on_dom_ready(|| {
        let config = config::load_config();
        enhance_page(&config);
    });
}

/// Wires the sort dropdown and like controls present in the document.
///
/// Listeners live for the rest of the page.
pub fn enhance_page(config: &EnhanceConfig) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::warn!("enhance: no document");
        return;
    };
    let selectors = &config.selectors;

    match sort_select::install(&document, selectors, Rc::new(sort_select::navigate_to)) {
        Some(listener) => {
            listener.forget();
            if config.verbose {
                gloo::console::log!("enhance: sort select wired");
            }
        }
        None => {
            if config.verbose {
                gloo::console::log!("enhance: no sort select");
            }
        }
    }

    let hooks = LikeHooks {
        csrf: Rc::new(MetaCsrfToken::new(&selectors.csrf_meta)),
        transport: http::fetch_transport(),
    };
    let listeners = like_buttons::install(&document, selectors, hooks);
    if config.verbose {
        gloo::console::log!("enhance: like controls wired", listeners.len() as u32);
    }
    for listener in listeners {
        listener.forget();
    }
}
