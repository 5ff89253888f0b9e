// Host-side tests for tuning constants and static content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/model/content.rs");
}

use constants::*;
use content::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICKER_CAPACITY > 0 && TICKER_CAPACITY <= 16);
    assert!(CARD_STAGGER_SEC > 0.0);
    assert!(SKILL_BAR_TRANSITION_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_colour_is_valid_rgba() {
    for c in &GLOW_RGBA[..3] {
        assert!((0.0..=255.0).contains(c));
    }
    assert!(GLOW_RGBA[3] > 0.0 && GLOW_RGBA[3] <= 1.0);
    assert!(GLOW_FADE_STOP_PCT <= 100);
    assert!(GLOW_RADIUS_PX > 0);
}

#[test]
fn skill_levels_are_percentages() {
    assert_eq!(SKILLS.len(), 6);
    for s in SKILLS {
        assert!(s.level <= SKILL_LEVEL_MAX, "{} level {}", s.name, s.level);
    }
}

#[test]
fn snippet_pool_is_non_empty_and_distinct() {
    assert!(!CODE_SNIPPETS.is_empty());
    for (i, a) in CODE_SNIPPETS.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &CODE_SNIPPETS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        ROOT_ID,
        GLOW_ID,
        TICKER_ID,
        HERO_IMAGE_ID,
        PROJECTS_ID,
        CONTACT_ID,
        CTA_PROJECTS_ID,
        CTA_CONTACT_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
