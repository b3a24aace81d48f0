#![cfg(target_arch = "wasm32")]

use galeria::config::EnhanceConfig;
use galeria::enhance_page;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn enhance_wires_controls_present_in_markup() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let root = document.create_element("div").expect("create fixture");
    root.set_inner_html(
        r#"<meta name="csrf-token" content="page-token">
        <a href="" class="like-btn" data-artwork-id="11">
            <i class="far fa-heart"></i><span class="likes-count">3</span>
        </a>"#,
    );
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("attach fixture");

    enhance_page(&EnhanceConfig::default());

    let control = root
        .query_selector(".like-btn")
        .expect("query")
        .expect("like control");
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).expect("click event");
    control.dispatch_event(&event).expect("dispatch click");
    assert!(event.default_prevented());
    root.remove();
}

#[wasm_bindgen_test]
fn enhance_tolerates_bare_page() {
    enhance_page(&EnhanceConfig::default());
}
