// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_constants_are_within_reasonable_bounds() {
    assert!(TIMELINE_HALF_WIDTH > 0.0 && TIMELINE_HALF_WIDTH < 0.5);
    assert!(TIMELINE_OFFSET_PX > 0.0);
    assert!(TIMELINE_SCALE_EDGE > 0.0 && TIMELINE_SCALE_EDGE < 1.0);
    assert!(TIMELINE_OPACITY_SHOULDER > 0.0 && TIMELINE_OPACITY_SHOULDER < 1.0);
    assert!(TIMELINE_IMAGE_SCALE_EDGE > 1.0);
    assert!(TIMELINE_TOP_SPAN_PERCENT > 0.0 && TIMELINE_TOP_SPAN_PERCENT <= 100.0);
}

#[test]
fn default_spring_is_critically_damped() {
    let critical = 2.0 * (SPRING_STIFFNESS * SPRING_MASS).sqrt();
    assert!((SPRING_DAMPING - critical).abs() < 1e-6);
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_SIZE_MIN_PX < PARTICLE_SIZE_MAX_PX);
    assert!(PARTICLE_SPEED_MIN < PARTICLE_SPEED_MAX);
    assert!(PARTICLE_MAX_AGE_MIN < PARTICLE_MAX_AGE_MAX);
    assert!(PARTICLE_HUE_RANGE.0 < PARTICLE_HUE_RANGE.1);
    assert!(PARTICLE_SATURATION_RANGE.0 < PARTICLE_SATURATION_RANGE.1);
    assert!(PARTICLE_LIGHTNESS_RANGE.0 < PARTICLE_LIGHTNESS_RANGE.1);
    assert!(PARTICLE_ALPHA_RANGE.0 < PARTICLE_ALPHA_RANGE.1 && PARTICLE_ALPHA_RANGE.1 <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_always_decay() {
    assert!(PARTICLE_SHRINK > 0.0 && PARTICLE_SHRINK < 1.0);
    assert!(PARTICLE_FRICTION > 0.0 && PARTICLE_FRICTION < 1.0);
    assert!(PARTICLE_VISIBILITY_FLOOR_PX < PARTICLE_SIZE_MIN_PX);
    // Max spawn rate times max lifetime fits in the arena.
    let per_sec = 1000.0 / PARTICLE_SPAWN_MIN_INTERVAL_MS;
    let worst = per_sec * PARTICLE_MAX_PER_SPAWN as f64 * PARTICLE_MAX_AGE_MAX as f64 / 60.0;
    assert!(worst <= PARTICLE_CAPACITY as f64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(THEME_TOGGLE_DELAY_MS > 0.0);
    assert!(EASTER_EGG_DURATION_MS > THEME_TOGGLE_DELAY_MS);
    assert!(TOAST_DURATION_MS > 0);
    assert!(VIEW_ALL_SCROLL_DELAY_MS > 0);
    assert!(COUNTER_DURATION_MS > 0.0);
    assert!(COUNTER_VISIBLE_FRACTION > 0.0 && COUNTER_VISIBLE_FRACTION <= 1.0);
    assert!(BACK_SPEED_MS < TYPE_SPEED_MS);
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        TIMELINE_CONTAINER_ID,
        TIMELINE_ITEMS_ID,
        TIMELINE_PROGRESS_BAR_ID,
        TIMELINE_LINE_ID,
        TIMELINE_START_MARKER_ID,
        TIMELINE_END_MARKER_ID,
        CURSOR_CANVAS_ID,
        CURSOR_RING_ID,
        CURSOR_DOT_ID,
        CURSOR_GLOW_ID,
        TOAST_ID,
        TOAST_TITLE_ID,
        TOAST_DESCRIPTION_ID,
        EASTER_EGG_ID,
        MODAL_ID,
        MODAL_BODY_ID,
        MODAL_CLOSE_ID,
        NAVBAR_ID,
        MENU_BUTTON_ID,
        MOBILE_MENU_ID,
        THEME_BUTTON_ID,
        PULL_STRING_ID,
        HERO_TYPED_ID,
        PROJECTS_GRID_ID,
        PROJECT_FILTERS_ID,
        VIEW_ALL_BUTTON_ID,
        STATS_ID,
        SKILLS_ID,
        EXPERIENCE_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn scrolled_navbar_gets_a_shadow() {
    assert_eq!(NAVBAR_SCROLLED_CLASS, "shadow-md");
}

#[test]
fn relay_endpoint_is_https() {
    assert!(RELAY_ENDPOINT.starts_with("https://"));
}
