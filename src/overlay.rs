use crate::util;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOADING_ID: &str = "loading";
const LOADING_MESSAGE_ID: &str = "loading-message";
const LOADING_RETRY_ID: &str = "loading-retry";

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = cl.remove_1("error");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
    set_message(document, "Loading\u{2026}");
    set_retry_visible(document, false);
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Turn the loading indicator into an error panel. `on_retry` runs when the
/// retry button is pressed; it replaces any previous handler.
pub fn show_load_error(document: &web::Document, message: &str, on_retry: impl FnOnce() + 'static) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1("error");
    }
    set_message(document, &format!("Could not load the scene: {message}"));
    if let Some(btn) = document
        .get_element_by_id(LOADING_RETRY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let target = btn.clone();
        let mut retry = util::once(on_retry);
        let cb = Closure::wrap(Box::new(move || {
            // detach first so a quick second click finds no handler
            target.set_onclick(None);
            if !retry() {
                log::debug!("[scene] retry already running");
            }
        }) as Box<dyn FnMut()>);
        btn.set_onclick(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
    }
    set_retry_visible(document, true);
}

fn set_message(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_MESSAGE_ID) {
        el.set_text_content(Some(text));
    }
}

fn set_retry_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(LOADING_RETRY_ID) {
        _ = el.set_attribute("style", if visible { "" } else { "display:none" });
        if !visible {
            if let Some(btn) = el.dyn_ref::<web::HtmlElement>() {
                btn.set_onclick(None);
            }
        }
    }
}
