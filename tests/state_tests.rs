// Host-side tests for page state: theme persistence, filters, the modal,
// the key-sequence easter egg and the hero text animations.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod combo {
        include!("../src/core/combo.rs");
    }
    pub mod typewriter {
        include!("../src/core/typewriter.rs");
    }
}

use crate::core::combo::*;
use crate::core::content::*;
use crate::core::state::*;
use crate::core::typewriter::*;

// ---------------- theme ----------------

#[test]
fn stored_theme_wins_over_system_preference() {
    let mut store = MemoryStore::default();
    store.save(THEME_KEY, "light");
    assert_eq!(AppState::load(&store, true).theme(), Theme::Light);
}

#[test]
fn invalid_or_missing_theme_falls_back_to_system_preference() {
    let store = MemoryStore::default();
    assert_eq!(AppState::load(&store, true).theme(), Theme::Dark);
    assert_eq!(AppState::load(&store, false).theme(), Theme::Light);

    let mut store = MemoryStore::default();
    store.save(THEME_KEY, "sepia");
    assert_eq!(AppState::load(&store, true).theme(), Theme::Dark);
}

#[test]
fn toggling_twice_restores_and_persists() {
    let mut store = MemoryStore::default();
    let mut state = AppState::load(&store, false);
    assert_eq!(state.toggle_theme(&mut store), Theme::Dark);
    assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(state.toggle_theme(&mut store), Theme::Light);
    assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn theme_toggle_waits_for_the_pull_animation() {
    let mut store = MemoryStore::default();
    let mut state = AppState::load(&store, false);

    assert!(state.request_theme_toggle(1000.0));
    // Repeated clicks during the animation are ignored.
    assert!(!state.request_theme_toggle(1050.0));
    assert!(state.theme_toggle_pending());

    assert_eq!(state.poll_theme_toggle(1199.0, &mut store), None);
    assert_eq!(state.poll_theme_toggle(1200.0, &mut store), Some(Theme::Dark));
    assert!(!state.theme_toggle_pending());
    assert_eq!(state.poll_theme_toggle(2000.0, &mut store), None);
    assert_eq!(state.theme(), Theme::Dark);
}

// ---------------- navigation ----------------

#[test]
fn navbar_shadow_and_scroll_spy_report_changes() {
    let mut state = AppState::default();
    assert!(!state.set_scroll_y(5.0));
    assert!(state.set_scroll_y(11.0));
    assert!(state.scrolled());
    assert!(!state.set_scroll_y(400.0));

    assert!(state.set_active_section(Some("about")));
    assert!(!state.set_active_section(Some("about")));
    assert_eq!(state.active_section(), Some("about"));
    assert!(state.set_active_section(None));
}

#[test]
fn menu_toggles_and_closes() {
    let mut state = AppState::default();
    assert!(state.toggle_menu());
    assert!(state.menu_open());
    state.close_menu();
    assert!(!state.menu_open());
}

#[test]
fn nav_links_point_at_sections() {
    let ids: Vec<&str> = NAV_LINKS.iter().map(|l| l.section_id()).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "experience", "contact"]);
}

// ---------------- projects ----------------

#[test]
fn grid_is_collapsed_until_view_all() {
    let state = AppState::default();
    assert_eq!(visible_projects(PROJECTS, state.filter(), false).len(), 3);
    assert_eq!(visible_projects(PROJECTS, state.filter(), true).len(), PROJECTS.len());
}

#[test]
fn category_filter_selects_matching_projects() {
    let cloud = ProjectFilter::from_label("Cloud");
    let titles: Vec<u32> = visible_projects(PROJECTS, &cloud, true)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(titles, vec![4, 5]);
    assert_eq!(matching_count(PROJECTS, &ProjectFilter::from_label("ML")), 1);
    assert_eq!(ProjectFilter::from_label("all"), ProjectFilter::All);
    assert_eq!(cloud.label(), "Cloud");
}

#[test]
fn changing_filter_collapses_the_grid() {
    let mut state = AppState::default();
    assert!(state.toggle_view_all());
    state.set_filter(ProjectFilter::from_label("GenAI"));
    assert!(!state.view_all());
}

#[test]
fn every_filter_label_matches_some_project() {
    for label in PROJECT_FILTERS {
        let f = ProjectFilter::from_label(label);
        assert!(matching_count(PROJECTS, &f) > 0, "{label}");
    }
}

#[test]
fn project_modal_opens_and_closes_once() {
    let mut state = AppState::default();
    state.open_project(2);
    assert_eq!(state.selected_project(), Some(2));
    assert!(state.close_project());
    assert!(!state.close_project());
}

// ---------------- easter egg ----------------

fn feed(m: &mut SequenceMatcher, keys: &[&str]) -> bool {
    keys.iter().fold(false, |hit, k| m.push(k) || hit)
}

#[test]
fn konami_sequence_matches() {
    let mut m = SequenceMatcher::konami();
    assert_eq!(m.len(), 10);
    assert!(feed(&mut m, KONAMI));
    assert_eq!(m.progress(), 0);
}

#[test]
fn konami_matches_after_an_extra_leading_up() {
    let mut m = SequenceMatcher::konami();
    let mut keys = vec!["ArrowUp"];
    keys.extend_from_slice(KONAMI);
    assert!(feed(&mut m, &keys));
}

#[test]
fn wrong_key_resets_progress() {
    let mut m = SequenceMatcher::konami();
    assert!(!feed(&mut m, &["ArrowUp", "ArrowUp", "ArrowDown", "x"]));
    assert_eq!(m.progress(), 0);
    assert!(!feed(&mut m, &KONAMI[..9]));
    assert_eq!(m.progress(), 9);
    assert!(!m.push("B"));
    assert_eq!(m.progress(), 0);
}

#[test]
fn egg_stays_active_for_its_duration() {
    let mut egg = EasterEgg::default();
    let mut activated = false;
    for k in KONAMI {
        activated = egg.on_key(k, 500.0);
    }
    assert!(activated);
    assert!(egg.is_active());
    assert!(!egg.poll(10_499.0));
    assert!(egg.poll(10_500.0));
    assert!(!egg.is_active());
    assert!(!egg.poll(20_000.0));
}

// ---------------- typewriter and counters ----------------

fn fast_config(looping: bool) -> TypewriterConfig {
    TypewriterConfig {
        type_ms: 100.0,
        back_ms: 50.0,
        start_delay_ms: 300.0,
        back_delay_ms: 1500.0,
        looping,
    }
}

#[test]
fn typewriter_types_after_start_delay() {
    let mut tw = Typewriter::new(&["ab"], fast_config(false));
    assert!(!tw.update(0.0));
    assert_eq!(tw.text(), "");
    assert!(!tw.update(299.0));
    assert!(tw.update(300.0));
    assert_eq!(tw.text(), "a");
    assert!(tw.update(400.0));
    assert_eq!(tw.text(), "ab");
    assert_eq!(tw.phase(), TypePhase::Done);
    assert!(!tw.update(10_000.0));
}

#[test]
fn typewriter_deletes_and_moves_to_next_string() {
    let mut tw = Typewriter::new(&["ab", "c"], fast_config(true));
    tw.update(0.0);
    tw.update(400.0);
    assert_eq!(tw.text(), "ab");
    assert_eq!(tw.phase(), TypePhase::Deleting);
    tw.update(1900.0);
    assert_eq!(tw.text(), "a");
    tw.update(1950.0);
    assert_eq!(tw.text(), "");
    tw.update(2050.0);
    assert_eq!(tw.text(), "c");
}

#[test]
fn typewriter_with_no_strings_is_done() {
    let mut tw = Typewriter::new(&[], fast_config(true));
    assert_eq!(tw.phase(), TypePhase::Done);
    tw.update(0.0);
    assert!(!tw.update(1000.0));
    assert_eq!(tw.text(), "");
}

#[test]
fn counter_counts_up_once_started() {
    let mut c = CountUp::with_duration(10, 2000.0);
    assert_eq!(c.value_at(500.0), 0);
    c.start(1000.0);
    assert_eq!(c.value_at(1000.0), 0);
    assert_eq!(c.value_at(2000.0), 5);
    assert_eq!(c.value_at(2999.0), 9);
    assert_eq!(c.value_at(3000.0), 10);
    assert!(c.is_finished(3000.0));

    // Starting again does not restart.
    c.start(5000.0);
    assert_eq!(c.value_at(5000.0), 10);
}

#[test]
fn stats_counters_end_on_their_values() {
    for s in STATS {
        let mut c = CountUp::new(s.value);
        c.start(0.0);
        assert_eq!(c.value_at(60_000.0), s.value);
    }
}
