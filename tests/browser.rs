//! Browser tests against a real DOM. Run with
//! `wasm-pack test --headless --firefox -- --features hydrate`.
#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use folio_site::config::{CarouselConfig, ThemeConfig};
use folio_site::{carousel, theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn page(body: &str) -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let doc = window.document().unwrap();
    doc.body().unwrap().set_inner_html(body);
    (window, doc)
}

fn click(doc: &Document, selector: &str) {
    doc.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn checked(doc: &Document, id: &str) -> bool {
    doc.get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .checked()
}

#[wasm_bindgen_test]
fn theme_fresh_load_then_toggle() {
    let (window, doc) = page(
        r#"<button id="darkModeToggle"><img class="toggle-icon-light"></button>
           <img class="logo-image"><img class="logo-image">"#,
    );
    let storage = window.local_storage().unwrap().unwrap();
    storage.remove_item("darkMode").unwrap();

    theme::init(&window, &doc, &ThemeConfig::default()).unwrap();

    let root = doc.document_element().unwrap();
    let logos = doc.query_selector_all(".logo-image").unwrap();
    let logo = |i| logos.item(i).unwrap().dyn_into::<web_sys::Element>().unwrap();
    let icon = doc.query_selector(".toggle-icon-light").unwrap().unwrap();
    assert!(!root.class_list().contains("dark-mode"));
    assert!(!logo(0).class_list().contains("dark-hidden"));
    assert!(logo(1).class_list().contains("dark-hidden"));
    assert!(icon.get_attribute("src").unwrap().ends_with("light_icon.png"));

    click(&doc, "#darkModeToggle");

    assert!(root.class_list().contains("dark-mode"));
    assert_eq!(storage.get_item("darkMode").unwrap().as_deref(), Some("true"));
    assert!(logo(0).class_list().contains("dark-hidden"));
    assert!(!logo(1).class_list().contains("dark-hidden"));
    assert!(icon.get_attribute("src").unwrap().ends_with("dark_icon.png"));

    root.class_list().remove_1("dark-mode").unwrap();
    storage.remove_item("darkMode").unwrap();
}

#[wasm_bindgen_test]
fn design_dot_click_checks_slide_once() {
    let (_window, doc) = page(
        r#"<div class="design-carousel-wrapper">
             <input type="radio" id="a1" name="design-carousel-1" checked>
             <input type="radio" id="a2" name="design-carousel-1">
             <input type="radio" id="a3" name="design-carousel-1">
             <span class="design-control-dot"></span>
             <span class="design-control-dot"></span>
             <span class="design-control-dot" id="dot3"></span>
           </div>
           <div class="design-carousel-wrapper">
             <input type="radio" id="b1" name="design-carousel-2" checked>
             <input type="radio" id="b2" name="design-carousel-2">
           </div>"#,
    );
    carousel::init_design(&doc, &CarouselConfig::default()).unwrap();

    click(&doc, "#dot3");
    assert!(checked(&doc, "a3"));
    assert!(checked(&doc, "b1"));
}
