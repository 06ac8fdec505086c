use crate::dom;
use crate::hearts::{celebration_burst, is_stale, HeartStream, ParticleSpec};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub const HEARTS_CONTAINER_ID: &str = "hearts-container";

/// Start the endless ambient hearts. Each timer pulls exactly one event from
/// the stream and arms the next, so the schedule is consumed lazily.
pub fn start_ambient(container: web::Element) {
    let stream = HeartStream::new(StdRng::from_entropy());
    log::info!("[hearts] ambient stream started");
    schedule_next(stream, container, Instant::now());
}

fn schedule_next(mut stream: HeartStream<StdRng>, container: web::Element, started: Instant) {
    // throttled background timers come back late; resume rather than replay
    let now_ms = elapsed_ms(started);
    let skipped = stream.skip_stale(now_ms);
    if skipped > 0 {
        log::debug!("[hearts] skipped {} stale spawns", skipped);
    }
    let Some(ev) = stream.next() else {
        return;
    };
    let delay = ev.at_ms.saturating_sub(now_ms).min(i32::MAX as u32) as i32;
    dom::set_timeout(delay, move || {
        if !is_stale(ev.at_ms, elapsed_ms(started)) {
            spawn(&container, &ev.spec);
        }
        schedule_next(stream, container, started);
    });
}

#[inline]
fn elapsed_ms(started: Instant) -> u32 {
    started.elapsed().as_millis().min(u32::MAX as u128) as u32
}

/// Fire the finite celebration burst.
pub fn celebrate(container: &web::Element) {
    let burst = celebration_burst(&mut rand::thread_rng());
    log::info!("[hearts] celebration burst of {}", burst.len());
    for ev in burst {
        let container = container.clone();
        dom::set_timeout(ev.at_ms as i32, move || spawn(&container, &ev.spec));
    }
}

fn spawn(container: &web::Element, spec: &ParticleSpec) {
    let Some(document) = container.owner_document() else {
        return;
    };
    let Ok(heart) = document.create_element("span") else {
        return;
    };
    heart.set_class_name("heart");
    heart.set_text_content(Some(spec.glyph));
    _ = heart.set_attribute(
        "style",
        &format!(
            "left:{:.2}vw;font-size:{:.1}px;animation-duration:{:.2}s",
            spec.left_vw, spec.size_px, spec.duration_s
        ),
    );
    if container.append_child(&heart).is_err() {
        return;
    }
    dom::set_timeout(spec.lifetime_ms as i32, move || heart.remove());
}
