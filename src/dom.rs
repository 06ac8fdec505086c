use crate::evasive::{self, Rect, Viewport};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(
            Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

/// Resolve after `delay_ms`.
pub async fn sleep_ms(delay_ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as f32;
    let height = w.inner_height().ok()?.as_f64()? as f32;
    Some(Viewport { width, height })
}

/// Untransformed layout box of `el` in viewport coordinates.
pub fn layout_rect(el: &web::HtmlElement) -> Rect {
    let origin = match el.offset_parent() {
        // body-relative offsets start at the document origin
        Some(p) if !p.tag_name().eq_ignore_ascii_case("body") => {
            let r = p.get_bounding_client_rect();
            Vec2::new(
                (r.left() + p.client_left() as f64) as f32,
                (r.top() + p.client_top() as f64) as f32,
            )
        }
        _ => web::window()
            .map(|w| {
                Vec2::new(
                    -w.scroll_x().unwrap_or(0.0) as f32,
                    -w.scroll_y().unwrap_or(0.0) as f32,
                )
            })
            .unwrap_or(Vec2::ZERO),
    };
    evasive::layout_rect(
        origin,
        Vec2::new(el.offset_left() as f32, el.offset_top() as f32),
        Vec2::new(el.offset_width() as f32, el.offset_height() as f32),
    )
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    set_style(el, "display", "none");
}

#[inline]
pub fn add_class(document: &web::Document, element_id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(class);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
