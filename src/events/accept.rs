use crate::accept::{confirm, AcceptEffect, RevealTarget, SceneVariant};
use crate::dom;
use crate::particles;
use crate::phase::InteractionPhase;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub const BTN_YES_ID: &str = "btn-yes";
pub const BTN_NO_ID: &str = "btn-no";
const YAY_TEXT_ID: &str = "yay-text";
const MEDIA_ID: &str = "gif-container";

pub struct AcceptWiring {
    pub document: web::Document,
    pub phase: Rc<Cell<InteractionPhase>>,
    pub variant: SceneVariant,
}

pub fn wire_accept_button(w: AcceptWiring) {
    let AcceptWiring {
        document,
        phase,
        variant,
    } = w;
    let doc = document.clone();
    dom::add_click_listener(&document, BTN_YES_ID, move |_ev| {
        match confirm(&phase, variant) {
            Some(effects) => {
                log::info!("[accept] accepted ({:?})", phase.get());
                apply_effects(&doc, &effects);
            }
            None => log::debug!("[accept] already accepted, ignoring"),
        }
    });
}

fn apply_effects(document: &web::Document, effects: &[AcceptEffect]) {
    for effect in effects {
        match *effect {
            AcceptEffect::HideControls => {
                for id in [BTN_YES_ID, BTN_NO_ID] {
                    if let Some(el) = dom::html_element(document, id) {
                        dom::hide(&el);
                    }
                }
            }
            AcceptEffect::Reveal { target, delay_ms } => {
                let id = match target {
                    RevealTarget::Text => YAY_TEXT_ID,
                    RevealTarget::Media => MEDIA_ID,
                };
                let doc = document.clone();
                dom::set_timeout(delay_ms as i32, move || dom::add_class(&doc, id, "visible"));
            }
            AcceptEffect::CelebrationBurst => {
                if let Some(container) = document.get_element_by_id(particles::HEARTS_CONTAINER_ID)
                {
                    particles::celebrate(&container);
                }
            }
        }
    }
}
