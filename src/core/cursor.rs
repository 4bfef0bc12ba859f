use super::spring::{Spring2, SpringConfig};
use glam::Vec2;

// Ring/dot/glow geometry in CSS px.
pub const RING_SIZE_DEFAULT: f32 = 30.0;
pub const RING_SIZE_HOVER: f32 = 50.0;
pub const DOT_SIZE: f32 = 5.0;
pub const GLOW_SIZE: f32 = 100.0;
pub const DOT_SCALE_MOVING: f32 = 0.6;
pub const DOT_SCALE_HOVER: f32 = 1.5;
pub const DOT_OPACITY_HOVER: f32 = 0.7;
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 768.0;

// Framer-style defaults when only the mass is given.
const POINTER_SPRING_STIFFNESS: f32 = 100.0;
const POINTER_SPRING_DAMPING: f32 = 10.0;
const RING_MASS: f32 = 0.6;
const DOT_MASS: f32 = 0.1;

/// Whether the custom cursor is shown at all (desktop widths only).
pub fn cursor_enabled(viewport_width: f64) -> bool {
    viewport_width >= CURSOR_MIN_VIEWPORT_WIDTH
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
}

/// Resolved cursor layers for one frame. Positions are top-left corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub ring_position: Vec2,
    pub ring_size: f32,
    pub dot_position: Vec2,
    pub dot_scale: f32,
    pub dot_opacity: f32,
    pub glow_position: Vec2,
}

impl CursorFrame {
    /// Centre of the ring; equals the pointer once the spring is at rest.
    pub fn ring_center(&self) -> Vec2 {
        self.ring_position + Vec2::splat(self.ring_size * 0.5)
    }

    pub fn ring_transform(&self) -> String {
        translate(self.ring_position)
    }

    pub fn dot_transform(&self) -> String {
        format!("{} scale({:.3})", translate(self.dot_position), self.dot_scale)
    }

    pub fn glow_transform(&self) -> String {
        translate(self.glow_position)
    }
}

fn translate(p: Vec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", p.x, p.y)
}

/// Outer ring, inner dot and glow chasing the pointer on their own springs.
pub struct CursorFollower {
    ring: Spring2,
    dot: Spring2,
    glow: Spring2,
    pointer: Vec2,
    moving: bool,
    variant: CursorVariant,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            ring: Spring2::new(SpringConfig::new(
                POINTER_SPRING_STIFFNESS,
                POINTER_SPRING_DAMPING,
                RING_MASS,
            )),
            dot: Spring2::new(SpringConfig::new(
                POINTER_SPRING_STIFFNESS,
                POINTER_SPRING_DAMPING,
                DOT_MASS,
            )),
            glow: Spring2::new(SpringConfig::default()),
            pointer: Vec2::ZERO,
            moving: false,
            variant: CursorVariant::Default,
        }
    }

    pub fn set_pointer(&mut self, position: Vec2, moving: bool) {
        self.pointer = position;
        self.moving = moving;
    }

    pub fn set_variant(&mut self, variant: CursorVariant) {
        self.variant = variant;
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn update(&mut self, dt_sec: f32) -> CursorFrame {
        let ring_size = match self.variant {
            CursorVariant::Default => RING_SIZE_DEFAULT,
            CursorVariant::Hover => RING_SIZE_HOVER,
        };
        let (dot_scale, dot_opacity) = match self.variant {
            CursorVariant::Hover => (DOT_SCALE_HOVER, DOT_OPACITY_HOVER),
            CursorVariant::Default if self.moving => (DOT_SCALE_MOVING, 1.0),
            CursorVariant::Default => (1.0, 1.0),
        };
        let half = |s: f32| Vec2::splat(s * 0.5);
        CursorFrame {
            ring_position: self.ring.follow(self.pointer - half(ring_size), dt_sec),
            ring_size,
            dot_position: self.dot.follow(self.pointer - half(DOT_SIZE), dt_sec),
            dot_scale,
            dot_opacity,
            glow_position: self.glow.follow(self.pointer - half(GLOW_SIZE), dt_sec),
        }
    }
}
