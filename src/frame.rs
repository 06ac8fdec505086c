use crate::motion::SceneAnimator;
use crate::phase::InteractionPhase;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: SceneAnimator,
    pub phase: Rc<Cell<InteractionPhase>>,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.animator.observe(self.phase.get());
        self.animator.step(t);
        let groups = *self.animator.groups();
        let transforms = groups.map(|g| g.model_matrix());

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&transforms) {
            log::error!("render error: {:?}", e);
        }
    }
}

type RafClosure = Closure<dyn FnMut()>;

fn request_frame(tick: &Rc<RefCell<Option<RafClosure>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
