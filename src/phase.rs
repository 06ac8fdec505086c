/// Page-wide interaction phase. Replaces the loose `accepted` / `merging`
/// flags with one value that only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Accepted,
    Merging,
}

impl InteractionPhase {
    #[inline]
    pub fn accepted(self) -> bool {
        self != InteractionPhase::Idle
    }

    #[inline]
    pub fn merging(self) -> bool {
        self == InteractionPhase::Merging
    }

    /// Move to `next` if it lies ahead of the current phase.
    /// Returns whether the phase changed.
    pub fn advance(&mut self, next: InteractionPhase) -> bool {
        if next > *self {
            *self = next;
            true
        } else {
            false
        }
    }
}
