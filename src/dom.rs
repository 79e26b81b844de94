//! Thin helpers over `web-sys` shared by the theme and carousel bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Element, EventTarget, HtmlInputElement, NodeList};

use crate::error::SiteError;

/// Collect the elements of a `NodeList`, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Collect the `<input>` elements of a `NodeList`.
pub fn inputs(list: &NodeList) -> Vec<HtmlInputElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<HtmlInputElement>().cloned())
        .collect()
}

/// Add or remove `class` so that its presence matches `present`.
///
/// # Errors
///
/// Returns an error if the class list rejects the token.
pub fn set_class(el: &Element, class: &str, present: bool) -> Result<(), SiteError> {
    let list = el.class_list();
    if present {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns an error if the browser refuses the listener.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
