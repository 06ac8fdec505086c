// Interaction and animation tuning constants.
//
// Distances are CSS pixels, times are milliseconds unless the name says
// otherwise. Scene values are world units.
use glam::Vec3;

// Evasive control
pub const DETECTION_RADIUS_PX: f32 = 100.0; // pointer closer than this triggers a jump
pub const ESCAPE_STEP_PX: f32 = 80.0; // distance moved per trigger
pub const VIEWPORT_MARGIN_PX: f32 = 30.0; // minimum gap kept to every viewport edge

// Heart particles
pub const HEART_GLYPHS: [&str; 5] = ["\u{2764}", "\u{1F495}", "\u{1F497}", "\u{1F496}", "\u{1F498}"];
pub const INITIAL_BURST_COUNT: usize = 10;
pub const INITIAL_BURST_WINDOW_MS: u32 = 2000;
pub const SPAWN_INTERVAL_MS: u32 = 1000;
pub const AMBIENT_SIZE_MIN_PX: f32 = 12.0;
pub const AMBIENT_DURATION_MIN_SEC: f32 = 5.0;
pub const AMBIENT_DURATION_SPAN_SEC: f32 = 5.0;
pub const AMBIENT_LIFETIME_MS: u32 = 10_000;
pub const AMBIENT_SIZE_SPAN_PX: f32 = 10.0;

pub const CELEBRATION_COUNT: usize = 20;
pub const CELEBRATION_SPACING_MS: u32 = 80;
pub const CELEBRATION_SIZE_MIN_PX: f32 = 20.0;
pub const CELEBRATION_SIZE_SPAN_PX: f32 = 15.0;
pub const CELEBRATION_DURATION_MIN_SEC: f32 = 3.0;
pub const CELEBRATION_DURATION_SPAN_SEC: f32 = 3.0;
pub const CELEBRATION_LIFETIME_MS: u32 = 6_000;

// Accept reveal timing
pub const REVEAL_TEXT_DELAY_MS: u32 = 300;
pub const REVEAL_MEDIA_DELAY_MS: u32 = 600;

// Scene layout
pub const SCENE_CENTER: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const GROUP_BASE_X: f32 = 1.5; // idle groups sit at -x / +x
pub const MERGE_HALF_GAP: f32 = 1.0; // merged groups sit at center -/+ this
pub const MODEL_TARGET_SIZE: f32 = 2.0; // largest extent after normalisation

// Scene motion
pub const FLOAT_AMPLITUDE_X: f32 = 0.3;
pub const FLOAT_AMPLITUDE_Y: f32 = 0.2;
pub const FLOAT_FREQS: [[f32; 2]; 2] = [
    [0.8, 1.1], // left group (x, y)
    [0.9, 1.3], // right group
];
pub const SPIN_PER_FRAME: f32 = 0.01; // radians, sign flips per group
pub const MERGE_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const BOB_FREQ: f32 = 2.0;
pub const BOB_AMPLITUDE: f32 = 0.1;

// Model palette
pub const MODEL_COLORS: [[f32; 3]; 2] = [
    [1.0, 0.42, 0.62], // pink
    [0.9, 0.16, 0.3],  // red
];

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;

// Asset loading
pub const DEFAULT_MODEL_URLS: [&str; 2] = ["assets/model_a.stl", "assets/model_b.stl"];
pub const LOAD_TIMEOUT_MS: i32 = 10_000;
pub const LOAD_MAX_ATTEMPTS: u32 = 3;
pub const LOAD_RETRY_BACKOFF_MS: i32 = 500;
