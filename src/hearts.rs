use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartStyle {
    Ambient,
    Celebration,
}

impl HeartStyle {
    fn size_band(self) -> (f32, f32) {
        match self {
            HeartStyle::Ambient => (AMBIENT_SIZE_MIN_PX, AMBIENT_SIZE_SPAN_PX),
            HeartStyle::Celebration => (CELEBRATION_SIZE_MIN_PX, CELEBRATION_SIZE_SPAN_PX),
        }
    }

    fn duration_band(self) -> (f32, f32) {
        match self {
            HeartStyle::Ambient => (AMBIENT_DURATION_MIN_SEC, AMBIENT_DURATION_SPAN_SEC),
            HeartStyle::Celebration => {
                (CELEBRATION_DURATION_MIN_SEC, CELEBRATION_DURATION_SPAN_SEC)
            }
        }
    }

    pub fn lifetime_ms(self) -> u32 {
        match self {
            HeartStyle::Ambient => AMBIENT_LIFETIME_MS,
            HeartStyle::Celebration => CELEBRATION_LIFETIME_MS,
        }
    }
}

/// Everything needed to put one heart on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub glyph: &'static str,
    /// Horizontal position as a percentage of viewport width.
    pub left_vw: f32,
    pub size_px: f32,
    pub duration_s: f32,
    pub lifetime_ms: u32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, style: HeartStyle) -> Self {
        let (size_min, size_span) = style.size_band();
        let (dur_min, dur_span) = style.duration_band();
        Self {
            glyph: HEART_GLYPHS[rng.gen_range(0..HEART_GLYPHS.len())],
            left_vw: rng.gen::<f32>() * 100.0,
            size_px: size_min + rng.gen::<f32>() * size_span,
            duration_s: dur_min + rng.gen::<f32>() * dur_span,
            lifetime_ms: style.lifetime_ms(),
        }
    }
}

/// A heart to spawn `at_ms` after its schedule started.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnEvent {
    pub at_ms: u32,
    pub spec: ParticleSpec,
}

/// Endless ambient heart schedule: a random initial burst merged in time
/// order with one heart per interval. Consumed by value; there is no reset.
pub struct HeartStream<R: Rng> {
    rng: R,
    // sorted descending so `pop` yields the earliest pending burst time
    burst: SmallVec<[u32; INITIAL_BURST_COUNT]>,
    next_tick_ms: u32,
}

impl<R: Rng> HeartStream<R> {
    pub fn new(mut rng: R) -> Self {
        let mut burst: SmallVec<[u32; INITIAL_BURST_COUNT]> = (0..INITIAL_BURST_COUNT)
            .map(|_| rng.gen_range(0..INITIAL_BURST_WINDOW_MS))
            .collect();
        burst.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            rng,
            burst,
            next_tick_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl<R: Rng> HeartStream<R> {
    /// Drop every pending event that is stale at `now_ms` so a late timer
    /// resumes the schedule instead of replaying it. Returns how many were
    /// dropped.
    pub fn skip_stale(&mut self, now_ms: u32) -> usize {
        let mut skipped = 0;
        while let Some(&t) = self.burst.last() {
            if !is_stale(t, now_ms) {
                break;
            }
            self.burst.pop();
            skipped += 1;
        }
        if is_stale(self.next_tick_ms, now_ms) {
            // first tick that is still fresh: next_tick + k * interval >= now - interval
            let behind = now_ms - SPAWN_INTERVAL_MS - self.next_tick_ms;
            let ticks = behind.div_ceil(SPAWN_INTERVAL_MS);
            self.next_tick_ms = self
                .next_tick_ms
                .saturating_add(ticks.saturating_mul(SPAWN_INTERVAL_MS));
            skipped += ticks as usize;
        }
        skipped
    }
}

/// An event is stale once a whole spawn interval has passed since it was due.
#[inline]
pub fn is_stale(at_ms: u32, now_ms: u32) -> bool {
    at_ms.saturating_add(SPAWN_INTERVAL_MS) < now_ms
}

impl<R: Rng> Iterator for HeartStream<R> {
    type Item = SpawnEvent;

    fn next(&mut self) -> Option<SpawnEvent> {
        let at_ms = match self.burst.last() {
            Some(&t) if t <= self.next_tick_ms => {
                self.burst.pop();
                t
            }
            _ => {
                let t = self.next_tick_ms;
                self.next_tick_ms = self.next_tick_ms.saturating_add(SPAWN_INTERVAL_MS);
                t
            }
        };
        Some(SpawnEvent {
            at_ms,
            spec: ParticleSpec::random(&mut self.rng, HeartStyle::Ambient),
        })
    }
}

/// The one-off burst fired on accept.
pub fn celebration_burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<SpawnEvent> {
    (0..CELEBRATION_COUNT)
        .map(|i| SpawnEvent {
            at_ms: i as u32 * CELEBRATION_SPACING_MS,
            spec: ParticleSpec::random(rng, HeartStyle::Celebration),
        })
        .collect()
}

/// Number of hearts from `events` still on screen at `t_ms`.
pub fn live_at(events: &[SpawnEvent], t_ms: u32) -> usize {
    events
        .iter()
        .filter(|e| e.at_ms <= t_ms && t_ms < e.at_ms + e.spec.lifetime_ms)
        .count()
}
