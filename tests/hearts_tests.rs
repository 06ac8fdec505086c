// Host-side tests for the heart particle schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod hearts {
    include!("../src/hearts.rs");
}

use constants::*;
use hearts::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn stream(seed: u64) -> HeartStream<StdRng> {
    HeartStream::new(StdRng::seed_from_u64(seed))
}

fn events_until(seed: u64, end_ms: u32) -> Vec<SpawnEvent> {
    stream(seed).take_while(|e| e.at_ms <= end_ms).collect()
}

#[test]
fn stream_is_time_ordered() {
    let events: Vec<_> = stream(1).take(200).collect();
    for pair in events.windows(2) {
        assert!(pair[0].at_ms <= pair[1].at_ms, "{:?}", (pair[0].at_ms, pair[1].at_ms));
    }
}

#[test]
fn initial_burst_lands_inside_window() {
    for seed in 0..20 {
        let early = events_until(seed, INITIAL_BURST_WINDOW_MS - 1);
        // ten burst hearts plus the first periodic one at 1s
        assert_eq!(early.len(), INITIAL_BURST_COUNT + 1, "seed {seed}");
        let ticks = early
            .iter()
            .filter(|e| e.at_ms == SPAWN_INTERVAL_MS)
            .count();
        assert!(ticks >= 1);
    }
}

#[test]
fn one_heart_per_interval_after_burst() {
    let late: Vec<u32> = stream(3)
        .take(60)
        .map(|e| e.at_ms)
        .filter(|&t| t >= INITIAL_BURST_WINDOW_MS)
        .collect();
    assert!(late.len() > 10);
    for (i, t) in late.iter().enumerate() {
        assert_eq!(*t, INITIAL_BURST_WINDOW_MS + i as u32 * SPAWN_INTERVAL_MS);
    }
}

#[test]
fn ambient_particles_stay_in_bands() {
    for ev in stream(9).take(300) {
        let s = &ev.spec;
        assert!(HEART_GLYPHS.contains(&s.glyph));
        assert!((0.0..100.0).contains(&s.left_vw));
        assert!(s.size_px >= AMBIENT_SIZE_MIN_PX);
        assert!(s.size_px <= AMBIENT_SIZE_MIN_PX + AMBIENT_SIZE_SPAN_PX);
        assert!(s.duration_s >= AMBIENT_DURATION_MIN_SEC);
        assert!(s.duration_s <= AMBIENT_DURATION_MIN_SEC + AMBIENT_DURATION_SPAN_SEC);
        assert_eq!(s.lifetime_ms, AMBIENT_LIFETIME_MS);
    }
}

#[test]
fn every_glyph_shows_up() {
    let seen: std::collections::HashSet<&str> = stream(5).take(500).map(|e| e.spec.glyph).collect();
    assert_eq!(seen.len(), HEART_GLYPHS.len());
}

#[test]
fn live_particle_count_is_bounded_and_settles() {
    let horizon = 60_000;
    let bound = (AMBIENT_LIFETIME_MS / SPAWN_INTERVAL_MS) as usize + INITIAL_BURST_COUNT;
    let steady = (AMBIENT_LIFETIME_MS / SPAWN_INTERVAL_MS) as usize;
    for seed in 0..5 {
        let events = events_until(seed, horizon);
        let mut t = 0;
        while t <= horizon {
            let live = live_at(&events, t);
            assert!(live <= bound, "seed {seed} t={t} live={live}");
            if t >= INITIAL_BURST_WINDOW_MS + AMBIENT_LIFETIME_MS {
                assert_eq!(live, steady, "seed {seed} t={t}");
            }
            t += 50;
        }
    }
}

#[test]
fn same_seed_gives_same_stream() {
    let a: Vec<_> = stream(42).take(40).collect();
    let b: Vec<_> = stream(42).take(40).collect();
    assert_eq!(a, b);
}

#[test]
fn celebration_burst_schedules_twenty_bigger_shorter_hearts() {
    let mut rng = StdRng::seed_from_u64(11);
    let burst = celebration_burst(&mut rng);
    assert_eq!(burst.len(), CELEBRATION_COUNT);
    for (i, ev) in burst.iter().enumerate() {
        assert_eq!(ev.at_ms, i as u32 * CELEBRATION_SPACING_MS);
        let s = &ev.spec;
        assert!(s.size_px >= CELEBRATION_SIZE_MIN_PX);
        assert!(s.size_px <= CELEBRATION_SIZE_MIN_PX + CELEBRATION_SIZE_SPAN_PX);
        assert!(s.duration_s >= CELEBRATION_DURATION_MIN_SEC);
        assert!(s.duration_s <= CELEBRATION_DURATION_MIN_SEC + CELEBRATION_DURATION_SPAN_SEC);
        assert_eq!(s.lifetime_ms, CELEBRATION_LIFETIME_MS);
    }
    // all gone once the last one expires
    let last = burst.last().map(|e| e.at_ms).unwrap_or(0);
    assert_eq!(live_at(&burst, last + CELEBRATION_LIFETIME_MS), 0);
}

#[test]
fn live_at_uses_half_open_lifetime() {
    let spec = ParticleSpec {
        glyph: HEART_GLYPHS[0],
        left_vw: 50.0,
        size_px: 14.0,
        duration_s: 6.0,
        lifetime_ms: 1000,
    };
    let events = vec![SpawnEvent { at_ms: 100, spec }];
    assert_eq!(live_at(&events, 99), 0);
    assert_eq!(live_at(&events, 100), 1);
    assert_eq!(live_at(&events, 1099), 1);
    assert_eq!(live_at(&events, 1100), 0);
}

#[test]
fn stale_rule_allows_one_interval_of_lateness() {
    assert!(!is_stale(1000, 1000));
    assert!(!is_stale(1000, 2000));
    assert!(is_stale(1000, 2001));
    assert!(!is_stale(u32::MAX, 0));
}

#[test]
fn skip_stale_resumes_schedule_after_long_gap() {
    let mut s = stream(4);
    let early: Vec<_> = s.by_ref().take_while(|e| e.at_ms < 5_000).collect();
    assert!(!early.is_empty());

    let skipped = s.skip_stale(605_000);
    assert!(skipped >= 590, "skipped {skipped}");
    let next: Vec<u32> = s.take(5).map(|e| e.at_ms).collect();
    assert_eq!(next, vec![604_000, 605_000, 606_000, 607_000, 608_000]);
}

#[test]
fn skip_stale_is_a_no_op_when_on_time() {
    let mut a = stream(8);
    let mut b = stream(8);
    assert_eq!(a.skip_stale(0), 0);
    assert_eq!(a.skip_stale(SPAWN_INTERVAL_MS), 0);
    let xs: Vec<_> = a.take(30).collect();
    let ys: Vec<_> = b.by_ref().take(30).collect();
    assert_eq!(xs, ys);
}

#[test]
fn skip_stale_keeps_fresh_burst_entries() {
    let now = 2_500;
    let before: Vec<u32> = stream(12)
        .take_while(|e| e.at_ms < INITIAL_BURST_WINDOW_MS)
        .map(|e| e.at_ms)
        .collect();
    let mut s = stream(12);
    let skipped = s.skip_stale(now);
    let kept: Vec<u32> = s
        .take_while(|e| e.at_ms < INITIAL_BURST_WINDOW_MS)
        .map(|e| e.at_ms)
        .collect();
    let expected: Vec<u32> = before.iter().copied().filter(|&t| !is_stale(t, now)).collect();
    assert_eq!(kept, expected);
    assert_eq!(skipped, before.len() - expected.len());
}

// Replays the browser loop: each timer fires no earlier than due, and while
// the tab is hidden only on the next throttle boundary.
fn throttled_spawns(seed: u64, hidden: std::ops::Range<u32>, wake_every: u32, horizon: u32) -> Vec<SpawnEvent> {
    let mut s = stream(seed);
    let mut now = 0u32;
    let mut out = Vec::new();
    while now <= horizon {
        s.skip_stale(now);
        let ev = s.next().expect("endless");
        let mut fire = ev.at_ms.max(now);
        if hidden.contains(&fire) {
            fire = (fire.div_ceil(wake_every) * wake_every).min(hidden.end);
        }
        now = fire;
        if !is_stale(ev.at_ms, now) {
            out.push(SpawnEvent {
                at_ms: now,
                spec: ev.spec,
            });
        }
    }
    out
}

#[test]
fn throttled_background_tab_keeps_live_count_bounded() {
    let bound = (AMBIENT_LIFETIME_MS / SPAWN_INTERVAL_MS) as usize + INITIAL_BURST_COUNT;
    let steady = (AMBIENT_LIFETIME_MS / SPAWN_INTERVAL_MS) as usize;
    let resume = 605_000;
    let horizon = resume + 60_000;
    for seed in 0..4 {
        let spawns = throttled_spawns(seed, 5_000..resume, 60_000, horizon);
        let mut t = 0;
        while t <= horizon {
            let live = live_at(&spawns, t);
            assert!(live <= bound, "seed {seed} t={t} live={live}");
            t += 250;
        }
        let during_hide = spawns
            .iter()
            .filter(|e| (5_000 + SPAWN_INTERVAL_MS..resume).contains(&e.at_ms))
            .count();
        // at most the due heart and its neighbour per throttled wake
        let wakes = (resume - 5_000) / 60_000 + 1;
        assert!(
            during_hide <= 2 * wakes as usize,
            "seed {seed} spawned {during_hide} while hidden"
        );
        let settled = resume + AMBIENT_LIFETIME_MS + SPAWN_INTERVAL_MS;
        assert_eq!(live_at(&spawns, settled), steady, "seed {seed}");
    }
}
