// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn evasive_constants_are_consistent() {
    // a single step must not carry the control out of its own detection zone
    assert!(ESCAPE_STEP_PX > 0.0 && ESCAPE_STEP_PX < DETECTION_RADIUS_PX);
    assert!(VIEWPORT_MARGIN_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_bands_are_positive_and_celebration_is_bigger_and_shorter() {
    assert!(AMBIENT_SIZE_MIN_PX > 0.0 && AMBIENT_SIZE_SPAN_PX > 0.0);
    assert!(CELEBRATION_SIZE_MIN_PX >= AMBIENT_SIZE_MIN_PX);
    assert!(CELEBRATION_LIFETIME_MS < AMBIENT_LIFETIME_MS);
    assert!(CELEBRATION_DURATION_MIN_SEC + CELEBRATION_DURATION_SPAN_SEC
        <= CELEBRATION_LIFETIME_MS as f32 / 1000.0);
    assert!(AMBIENT_DURATION_MIN_SEC + AMBIENT_DURATION_SPAN_SEC
        <= AMBIENT_LIFETIME_MS as f32 / 1000.0);
    assert!(INITIAL_BURST_WINDOW_MS > 0 && SPAWN_INTERVAL_MS > 0);
    assert_eq!(HEART_GLYPHS.len(), 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_order_and_scene_tuning() {
    assert!(REVEAL_TEXT_DELAY_MS < REVEAL_MEDIA_DELAY_MS);
    assert!(MERGE_SMOOTHING > 0.0 && MERGE_SMOOTHING < 1.0);
    assert!(MERGE_HALF_GAP < GROUP_BASE_X);
    assert_ne!(FLOAT_FREQS[0], FLOAT_FREQS[1]);
    assert!(MODEL_TARGET_SIZE > 0.0);
    assert!(CAMERA_Z > MODEL_TARGET_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_limits_are_sane() {
    assert!(LOAD_MAX_ATTEMPTS >= 1);
    assert!(LOAD_TIMEOUT_MS > 0 && LOAD_RETRY_BACKOFF_MS >= 0);
    for url in DEFAULT_MODEL_URLS {
        assert!(url.ends_with(".stl"));
    }
}
