use crate::dom;
use crate::evasive::{translate_css, EvasiveControl};
use crate::phase::InteractionPhase;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EvasiveWiring {
    pub document: web::Document,
    pub button: web::HtmlElement,
    pub control: Rc<RefCell<EvasiveControl>>,
    pub phase: Rc<Cell<InteractionPhase>>,
}

/// Mouse movement, touches and clicks all feed the same escape reaction.
pub fn wire_evasive_handlers(w: EvasiveWiring) {
    wire_mousemove(&w);
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_click(&w);
}

fn escape(w: &EvasiveWiring, x: f32, y: f32) {
    let Some(viewport) = dom::viewport() else {
        return;
    };
    let mut control = w.control.borrow_mut();
    let natural = dom::layout_rect(&w.button);
    if let Some(offset) = control.react(w.phase.get(), Vec2::new(x, y), natural, viewport) {
        dom::set_style(&w.button, "transform", &translate_css(offset));
        log::debug!("[evasive] offset=({:.1},{:.1})", offset.x, offset.y);
    }
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    ev.touches()
        .get(0)
        .map(|t| (t.client_x() as f32, t.client_y() as f32))
}

fn wire_mousemove(w: &EvasiveWiring) {
    let w_move = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        escape(&w_move, ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchstart(w: &EvasiveWiring) {
    let w_touch = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some((x, y)) = first_touch(&ev) {
            escape(&w_touch, x, y);
        }
    }) as Box<dyn FnMut(_)>);
    // must be non-passive so prevent_default suppresses the synthetic click
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .button
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

fn wire_touchmove(w: &EvasiveWiring) {
    let w_touch = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            escape(&w_touch, x, y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &EvasiveWiring) {
    let w_click = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        escape(&w_click, ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .button
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
