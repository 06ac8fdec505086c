use crate::constants::{DETECTION_RADIUS_PX, ESCAPE_STEP_PX, VIEWPORT_MARGIN_PX};
use crate::phase::InteractionPhase;
use glam::Vec2;

/// Axis-aligned box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }
}

/// Layout box from offset metrics. `origin` is the viewport position that the
/// element's `offsetLeft`/`offsetTop` are measured from. Transforms on the
/// element do not show up here, unlike in its bounding client rect.
#[inline]
pub fn layout_rect(origin: Vec2, offset_pos: Vec2, size: Vec2) -> Rect {
    Rect::new(origin.x, origin.y, size.x, size.y).translated(offset_pos)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Offset state of the decline button. Starts at zero and is only ever
/// pushed and clamped, never reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvasiveControl {
    offset: Vec2,
}

impl EvasiveControl {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// React to an interaction at `pointer`.
    ///
    /// `natural` is the control's layout box without the current offset. Returns
    /// the new offset when the control moved, `None` when the event is ignored.
    pub fn react(
        &mut self,
        phase: InteractionPhase,
        pointer: Vec2,
        natural: Rect,
        viewport: Viewport,
    ) -> Option<Vec2> {
        if phase.accepted() {
            return None;
        }
        let center = natural.center() + self.offset;
        if pointer.distance(center) > DETECTION_RADIUS_PX {
            return None;
        }
        // atan2(0, 0) == 0: a hit dead-centre pushes along +x
        let angle = (center.y - pointer.y).atan2(center.x - pointer.x);
        let pushed = self.offset + Vec2::new(angle.cos(), angle.sin()) * ESCAPE_STEP_PX;
        self.offset = clamp_offset(pushed, natural, viewport);
        Some(self.offset)
    }
}

/// Clamp `offset` so `natural` translated by it keeps the margin to every
/// viewport edge. Each axis is clamped on its own; if the viewport is too
/// small to satisfy both edges the left/top bound wins.
pub fn clamp_offset(offset: Vec2, natural: Rect, viewport: Viewport) -> Vec2 {
    let min_x = VIEWPORT_MARGIN_PX - natural.left;
    let max_x = viewport.width - natural.right() - VIEWPORT_MARGIN_PX;
    let min_y = VIEWPORT_MARGIN_PX - natural.top;
    let max_y = viewport.height - natural.bottom() - VIEWPORT_MARGIN_PX;
    Vec2::new(offset.x.min(max_x).max(min_x), offset.y.min(max_y).max(min_y))
}

#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
