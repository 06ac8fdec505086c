use crate::constants::*;
use crate::phase::InteractionPhase;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Idle,
    Merging,
}

/// Transform node for one loaded model.
#[derive(Clone, Copy, Debug)]
pub struct ModelGroup {
    pub position: Vec3,
    pub rotation_y: f32,
    base: Vec3,
    float_freq: [f32; 2],
    spin: f32,
    merge_target: Vec3,
}

impl ModelGroup {
    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.rotation_y)
    }

    #[inline]
    pub fn merge_target(&self) -> Vec3 {
        self.merge_target
    }
}

/// Two floating models that drift independently until the phase reaches
/// `Merging`, then ease together and bob in unison.
pub struct SceneAnimator {
    groups: [ModelGroup; 2],
    state: SceneState,
}

impl Default for SceneAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneAnimator {
    pub fn new() -> Self {
        let make = |i: usize| {
            let side = if i == 0 { -1.0 } else { 1.0 };
            let base = SCENE_CENTER + Vec3::new(side * GROUP_BASE_X, 0.0, 0.0);
            ModelGroup {
                position: base,
                rotation_y: 0.0,
                base,
                float_freq: FLOAT_FREQS[i],
                spin: side * SPIN_PER_FRAME,
                merge_target: SCENE_CENTER + Vec3::new(side * MERGE_HALF_GAP, 0.0, 0.0),
            }
        };
        Self {
            groups: [make(0), make(1)],
            state: SceneState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SceneState {
        self.state
    }

    #[inline]
    pub fn groups(&self) -> &[ModelGroup; 2] {
        &self.groups
    }

    /// Enter `Merging` once the phase says so. There is no way back.
    pub fn observe(&mut self, phase: InteractionPhase) {
        if phase.merging() && self.state == SceneState::Idle {
            log::info!("[scene] merging");
            self.state = SceneState::Merging;
        }
    }

    /// Advance one frame. `t` is seconds since the loop started.
    pub fn step(&mut self, t: f32) {
        match self.state {
            SceneState::Idle => {
                for g in &mut self.groups {
                    g.position = g.base
                        + Vec3::new(
                            (t * g.float_freq[0]).sin() * FLOAT_AMPLITUDE_X,
                            (t * g.float_freq[1]).cos() * FLOAT_AMPLITUDE_Y,
                            0.0,
                        );
                    g.rotation_y += g.spin;
                }
            }
            SceneState::Merging => {
                let bob = (t * BOB_FREQ).sin() * BOB_AMPLITUDE;
                for g in &mut self.groups {
                    let target = g.merge_target + Vec3::new(0.0, bob, 0.0);
                    g.position += (target - g.position) * MERGE_SMOOTHING;
                    g.rotation_y += g.spin;
                }
            }
        }
    }
}
