// Host-side tests for the cursor particle system and the pointer followers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::core::cursor::*;
use crate::core::particles::*;
use glam::Vec2;

fn particle(size: f32, max_age: u32) -> Particle {
    Particle {
        position: Vec2::new(100.0, 100.0),
        velocity: Vec2::new(2.0, -1.0),
        size,
        color: Hsla {
            hue: 240,
            saturation: 80,
            lightness: 60,
            alpha: 0.5,
        },
        age: 0,
        max_age,
        phase: ParticlePhase::Spawned,
    }
}

// ---------------- particle lifecycle ----------------

#[test]
fn particle_expires_exactly_at_max_age() {
    let cfg = ParticleConfig::default();
    let mut p = particle(10.0, 5);
    for _ in 0..4 {
        assert_eq!(p.advance(&cfg), ParticlePhase::Aging);
    }
    assert_eq!(p.advance(&cfg), ParticlePhase::Expired);
    assert_eq!(p.age, 5);
}

#[test]
fn particle_expires_once_too_small() {
    let cfg = ParticleConfig::default();
    let mut p = particle(0.52, 100);
    assert_eq!(p.advance(&cfg), ParticlePhase::Expired);
}

#[test]
fn particle_size_never_grows_and_opacity_fades() {
    let cfg = ParticleConfig::default();
    let mut p = particle(8.0, 30);
    let mut size = p.size;
    let mut opacity = p.opacity();
    assert_eq!(opacity, 1.0);
    while p.advance(&cfg) != ParticlePhase::Expired {
        assert!(p.size <= size);
        assert!(p.opacity() <= opacity);
        size = p.size;
        opacity = p.opacity();
    }
}

#[test]
fn particle_motion_applies_friction_and_gravity() {
    let cfg = ParticleConfig::default();
    let mut p = particle(8.0, 30);
    p.advance(&cfg);
    assert_eq!(p.position, Vec2::new(102.0, 99.0));
    assert!((p.velocity.x - 2.0 * 0.97).abs() < 1e-6);
    assert!((p.velocity.y - (-0.97 + 0.1)).abs() < 1e-6);
}

#[test]
fn hsla_formats_for_canvas() {
    let c = Hsla {
        hue: 230,
        saturation: 75,
        lightness: 55,
        alpha: 0.25,
    };
    assert_eq!(c.to_css(), "hsla(230, 75%, 55%, 0.25)");
}

// ---------------- spawn gate ----------------

#[test]
fn spawn_gate_requires_distance_and_interval() {
    let cfg = ParticleConfig::default();
    let mut gate = SpawnGate::default();

    // First event has nothing to measure from.
    let s = gate.observe(Vec2::new(0.0, 0.0), 0.0, &cfg);
    assert_eq!((s.moving, s.spawn_count), (false, 0));

    // 5 px is not enough movement.
    let s = gate.observe(Vec2::new(5.0, 0.0), 100.0, &cfg);
    assert!(!s.moving);
    assert_eq!(s.spawn_count, 0);

    // 30 px spawns min(30 / 10, 3) = 3.
    let s = gate.observe(Vec2::new(35.0, 0.0), 200.0, &cfg);
    assert!(s.moving);
    assert_eq!(s.spawn_count, 3);

    // Exactly 50 ms later is still too soon.
    let s = gate.observe(Vec2::new(60.0, 0.0), 250.0, &cfg);
    assert!(s.moving);
    assert_eq!(s.spawn_count, 0);

    // 7 px after the interval spawns floor(0.7) = 0.
    let s = gate.observe(Vec2::new(67.0, 0.0), 400.0, &cfg);
    assert!(s.moving);
    assert_eq!(s.spawn_count, 0);

    // Long strokes are capped.
    let s = gate.observe(Vec2::new(267.0, 0.0), 500.0, &cfg);
    assert_eq!(s.spawn_count, 3);
}

#[test]
fn spawn_count_scales_with_distance() {
    let cfg = ParticleConfig::default();
    let mut gate = SpawnGate::default();
    gate.observe(Vec2::ZERO, 0.0, &cfg);
    let s = gate.observe(Vec2::new(0.0, 12.0), 100.0, &cfg);
    assert_eq!(s.spawn_count, 1);
    let s = gate.observe(Vec2::new(0.0, 36.0), 200.0, &cfg);
    assert_eq!(s.spawn_count, 2);
}

// ---------------- arena ----------------

#[test]
fn arena_rejects_inserts_past_capacity() {
    let mut arena = ParticleArena::with_capacity(2);
    assert_eq!(arena.insert(particle(5.0, 10)), Some(0));
    assert_eq!(arena.insert(particle(5.0, 10)), Some(1));
    assert_eq!(arena.insert(particle(5.0, 10)), None);
    assert_eq!(arena.len(), 2);
}

#[test]
fn arena_recycles_expired_slots() {
    let cfg = ParticleConfig::default();
    let mut arena = ParticleArena::with_capacity(4);
    arena.insert(particle(5.0, 1));
    arena.insert(particle(5.0, 10));
    assert_eq!(arena.tick(&cfg), 1);
    assert_eq!(arena.len(), 1);
    assert!(arena.get(0).is_none());

    assert_eq!(arena.insert(particle(5.0, 10)), Some(0));
    assert_eq!(arena.allocated(), 2);
    assert_eq!(arena.len(), 2);

    arena.clear();
    assert!(arena.is_empty());
    assert_eq!(arena.iter().count(), 0);
}

// ---------------- system ----------------

#[test]
fn system_spawns_at_pointer_and_drains() {
    let mut sys = ParticleSystem::new(ParticleConfig::default(), 7);
    sys.on_pointer_move(Vec2::new(10.0, 10.0), 0.0);
    sys.on_pointer_move(Vec2::new(40.0, 10.0), 100.0);
    assert_eq!(sys.len(), 3);
    for p in sys.particles() {
        assert_eq!(p.position, Vec2::new(40.0, 10.0));
        assert!(p.size >= 2.0 && p.size < 10.0);
        assert!((10..=30).contains(&p.max_age));
        assert!((220..260).contains(&p.color.hue));
    }

    for _ in 0..30 {
        sys.tick();
    }
    assert!(sys.is_empty());
}

#[test]
fn system_is_deterministic_for_a_seed() {
    let run = |seed| {
        let mut sys = ParticleSystem::new(ParticleConfig::default(), seed);
        sys.on_pointer_move(Vec2::ZERO, 0.0);
        sys.on_pointer_move(Vec2::new(30.0, 0.0), 100.0);
        sys.particles().map(|p| p.size).collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn system_never_exceeds_capacity() {
    let cfg = ParticleConfig {
        capacity: 8,
        ..ParticleConfig::default()
    };
    let mut sys = ParticleSystem::new(cfg, 1);
    let mut x = 0.0;
    for i in 0..20 {
        x += 40.0;
        sys.on_pointer_move(Vec2::new(x, 0.0), i as f64 * 100.0);
    }
    assert_eq!(sys.len(), 8);
}

// ---------------- cursor ----------------

#[test]
fn cursor_hidden_on_narrow_viewports() {
    assert!(!cursor_enabled(767.0));
    assert!(cursor_enabled(768.0));
}

#[test]
fn cursor_variants_resize_ring_and_dot() {
    let mut c = CursorFollower::new();
    c.set_pointer(Vec2::new(200.0, 100.0), false);
    let f = c.update(1.0 / 60.0);
    assert_eq!(f.ring_size, RING_SIZE_DEFAULT);
    assert_eq!((f.dot_scale, f.dot_opacity), (1.0, 1.0));
    // First frame lands centred on the pointer.
    assert_eq!(f.ring_position, Vec2::new(185.0, 85.0));
    assert_eq!(f.ring_center(), Vec2::new(200.0, 100.0));

    c.set_pointer(Vec2::new(220.0, 100.0), true);
    assert_eq!(c.update(1.0 / 60.0).dot_scale, DOT_SCALE_MOVING);

    c.set_variant(CursorVariant::Hover);
    let f = c.update(1.0 / 60.0);
    assert_eq!(f.ring_size, RING_SIZE_HOVER);
    assert_eq!(f.dot_scale, DOT_SCALE_HOVER);
    assert_eq!(f.dot_opacity, DOT_OPACITY_HOVER);
}

#[test]
fn cursor_ring_trails_the_pointer() {
    let mut c = CursorFollower::new();
    c.set_pointer(Vec2::ZERO, false);
    c.update(1.0 / 60.0);
    c.set_pointer(Vec2::new(300.0, 0.0), true);
    let f = c.update(1.0 / 60.0);
    let ring_center = f.ring_position.x + f.ring_size * 0.5;
    assert!(ring_center > 0.0 && ring_center < 300.0);
    for _ in 0..600 {
        c.update(1.0 / 60.0);
    }
    let f = c.update(1.0 / 60.0);
    assert!((f.ring_position.x + f.ring_size * 0.5 - 300.0).abs() < 0.01);
}

#[test]
fn cursor_layers_translate_once_to_centre_on_pointer() {
    let mut c = CursorFollower::new();
    c.set_pointer(Vec2::new(200.0, 100.0), false);
    let f = c.update(1.0 / 60.0);
    assert_eq!(f.ring_transform(), "translate3d(185.00px, 85.00px, 0)");
    assert_eq!(f.dot_transform(), "translate3d(197.50px, 97.50px, 0) scale(1.000)");
    assert_eq!(f.glow_transform(), "translate3d(150.00px, 50.00px, 0)");

    c.set_variant(CursorVariant::Hover);
    for _ in 0..600 {
        c.update(1.0 / 60.0);
    }
    let f = c.update(1.0 / 60.0);
    assert_eq!(f.ring_size, RING_SIZE_HOVER);
    assert!((f.ring_center() - Vec2::new(200.0, 100.0)).length() < 0.01);
    assert_eq!(f.ring_transform(), "translate3d(175.00px, 75.00px, 0)");
}

#[test]
fn particle_size_is_a_diameter() {
    let p = particle(8.0, 20);
    assert_eq!(p.radius(), 4.0);
    assert_eq!(particle(-1.0, 20).radius(), 0.0);
}
