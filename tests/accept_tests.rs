// Host-side tests for the accept flow and the interaction phase.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod phase {
    include!("../src/phase.rs");
}
mod accept {
    include!("../src/accept.rs");
}
mod evasive {
    include!("../src/evasive.rs");
}
mod hearts {
    include!("../src/hearts.rs");
}

use accept::*;
use constants::*;
use glam::Vec2;
use phase::InteractionPhase;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;

#[test]
fn phase_only_moves_forward() {
    let mut p = InteractionPhase::default();
    assert_eq!(p, InteractionPhase::Idle);
    assert!(!p.accepted() && !p.merging());

    assert!(p.advance(InteractionPhase::Accepted));
    assert!(p.accepted() && !p.merging());
    assert!(!p.advance(InteractionPhase::Idle));
    assert!(!p.advance(InteractionPhase::Accepted));
    assert_eq!(p, InteractionPhase::Accepted);

    assert!(p.advance(InteractionPhase::Merging));
    assert!(p.accepted() && p.merging());
    assert!(!p.advance(InteractionPhase::Accepted));
    assert_eq!(p, InteractionPhase::Merging);
}

#[test]
fn first_confirm_emits_effects_in_order() {
    let phase = Cell::new(InteractionPhase::Idle);
    let effects = confirm(&phase, SceneVariant::Classic).expect("first confirm");
    assert_eq!(
        effects,
        vec![
            AcceptEffect::HideControls,
            AcceptEffect::Reveal {
                target: RevealTarget::Text,
                delay_ms: REVEAL_TEXT_DELAY_MS,
            },
            AcceptEffect::Reveal {
                target: RevealTarget::Media,
                delay_ms: REVEAL_MEDIA_DELAY_MS,
            },
            AcceptEffect::CelebrationBurst,
        ]
    );
    assert_eq!(phase.get(), InteractionPhase::Accepted);
}

#[test]
fn scene_variant_enters_merging() {
    let phase = Cell::new(InteractionPhase::Idle);
    assert!(confirm(&phase, SceneVariant::WithScene).is_some());
    assert_eq!(phase.get(), InteractionPhase::Merging);
    assert!(phase.get().accepted());
}

#[test]
fn second_confirm_is_ignored() {
    for variant in [SceneVariant::Classic, SceneVariant::WithScene] {
        let phase = Cell::new(InteractionPhase::Idle);
        assert!(confirm(&phase, variant).is_some());
        let after_first = phase.get();
        assert!(confirm(&phase, variant).is_none());
        assert!(confirm(&phase, SceneVariant::WithScene).is_none());
        assert_eq!(phase.get(), after_first);
    }
}

#[test]
fn variant_detection() {
    assert_eq!(SceneVariant::from_scene_present(true), SceneVariant::WithScene);
    assert_eq!(SceneVariant::from_scene_present(false), SceneVariant::Classic);
}

#[test]
fn accepting_once_freezes_control_and_schedules_one_burst() {
    let phase = Cell::new(InteractionPhase::Idle);
    let natural = evasive::Rect::new(500.0, 400.0, 100.0, 40.0);
    let viewport = evasive::Viewport {
        width: 1200.0,
        height: 900.0,
    };
    let mut control = evasive::EvasiveControl::new();
    let pointer = natural.center() - Vec2::new(20.0, 0.0);
    let before = control
        .react(phase.get(), pointer, natural, viewport)
        .expect("idle control escapes");

    let effects = confirm(&phase, SceneVariant::Classic).expect("accepted");
    let bursts = effects
        .iter()
        .filter(|e| **e == AcceptEffect::CelebrationBurst)
        .count();
    assert_eq!(bursts, 1);
    let scheduled = hearts::celebration_burst(&mut StdRng::seed_from_u64(3));
    assert_eq!(scheduled.len(), 20);
    assert!(phase.get().accepted());

    for i in 0..100 {
        let center = natural.center() + control.offset();
        let p = center + Vec2::new((i as f32).cos(), (i as f32).sin()) * 30.0;
        assert!(control.react(phase.get(), p, natural, viewport).is_none());
    }
    assert_eq!(control.offset(), before);
}
