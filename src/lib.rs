#![cfg(target_arch = "wasm32")]
use crate::accept::SceneVariant;
use crate::constants::MODEL_COLORS;
use crate::evasive::EvasiveControl;
use crate::motion::SceneAnimator;
use crate::phase::InteractionPhase;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod accept;
mod camera;
mod constants;
mod dom;
mod evasive;
mod events;
mod frame;
mod hearts;
mod loader;
mod mesh;
mod motion;
mod overlay;
mod particles;
mod phase;
mod render;
mod util;

const SCENE_CANVAS_ID: &str = "scene-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let phase = Rc::new(Cell::new(InteractionPhase::Idle));
    let scene_canvas = document
        .get_element_by_id(SCENE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let variant = SceneVariant::from_scene_present(scene_canvas.is_some());
    log::info!("[init] variant={:?}", variant);

    match document.get_element_by_id(particles::HEARTS_CONTAINER_ID) {
        Some(container) => particles::start_ambient(container),
        None => log::warn!("[init] missing #{}", particles::HEARTS_CONTAINER_ID),
    }

    let button = dom::html_element(&document, events::accept::BTN_NO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", events::accept::BTN_NO_ID))?;
    events::wire_evasive_handlers(events::EvasiveWiring {
        document: document.clone(),
        button,
        control: Rc::new(RefCell::new(EvasiveControl::new())),
        phase: phase.clone(),
    });

    events::wire_accept_button(events::AcceptWiring {
        document: document.clone(),
        phase: phase.clone(),
        variant,
    });

    if let Some(canvas) = scene_canvas {
        dom::wire_canvas_resize(&canvas);
        spawn_scene(document, canvas, phase);
    }
    Ok(())
}

/// Load both models, then start the render loop. On failure the loading
/// panel offers a retry that calls back into this function.
fn spawn_scene(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    phase: Rc<Cell<InteractionPhase>>,
) {
    spawn_local(async move {
        overlay::show_loading(&document);
        match start_scene(&canvas, &phase).await {
            Ok(()) => overlay::hide_loading(&document),
            Err(e) => {
                log::error!("[scene] {:#}", e);
                let doc = document.clone();
                overlay::show_load_error(&document, &format!("{e:#}"), move || {
                    log::info!("[scene] retrying");
                    spawn_scene(doc, canvas, phase);
                });
            }
        }
    });
}

async fn start_scene(
    canvas: &web::HtmlCanvasElement,
    phase: &Rc<Cell<InteractionPhase>>,
) -> anyhow::Result<()> {
    let urls = loader::model_urls(canvas);
    let meshes = loader::load_models(&urls).await?;

    let mut gpu = render::GpuState::new(canvas).await?;
    for (mesh, color) in meshes.iter().zip(MODEL_COLORS) {
        gpu.add_model(mesh, color);
    }
    log::info!("[scene] models ready, starting loop");

    let ctx = frame::FrameContext {
        animator: SceneAnimator::new(),
        phase: phase.clone(),
        gpu,
        canvas: canvas.clone(),
        started: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
