use crate::constants::{REVEAL_MEDIA_DELAY_MS, REVEAL_TEXT_DELAY_MS};
use crate::phase::InteractionPhase;
use std::cell::Cell;

/// Which page layout is running. The 3D scene is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneVariant {
    Classic,
    WithScene,
}

impl SceneVariant {
    #[inline]
    pub fn from_scene_present(present: bool) -> Self {
        if present {
            SceneVariant::WithScene
        } else {
            SceneVariant::Classic
        }
    }

    fn accepted_phase(self) -> InteractionPhase {
        match self {
            SceneVariant::Classic => InteractionPhase::Accepted,
            SceneVariant::WithScene => InteractionPhase::Merging,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    Text,
    Media,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptEffect {
    HideControls,
    Reveal { target: RevealTarget, delay_ms: u32 },
    CelebrationBurst,
}

/// Handle the confirm action. Only the first call changes the phase and
/// returns effects; later calls return `None`.
pub fn confirm(phase: &Cell<InteractionPhase>, variant: SceneVariant) -> Option<Vec<AcceptEffect>> {
    let mut p = phase.get();
    if p.accepted() || !p.advance(variant.accepted_phase()) {
        return None;
    }
    phase.set(p);
    Some(vec![
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
    ])
}
