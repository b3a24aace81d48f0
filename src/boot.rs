use std::cell::Cell;

use gloo::events::EventListener;

thread_local! {
    static WIRED: Cell<bool> = Cell::new(false);
}

/// Runs `init` once the document is parsed. Only the first call ever runs.
pub fn on_dom_ready<F>(init: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        run_once(init);
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| run_once(init)).forget();
}

fn run_once<F: FnOnce()>(init: F) {
    let already_wired = WIRED.with(|flag| flag.replace(true));
    if already_wired {
        return;
    }
    init();
}
