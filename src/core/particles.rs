use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Particle colour in CSS `hsla()` terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl Hsla {
    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {:.2})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Lifecycle of a particle: `Spawned` until its first tick, `Aging` while it
/// integrates, `Expired` once it is too old or too small to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticlePhase {
    Spawned,
    Aging,
    Expired,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Hsla,
    pub age: u32,
    pub max_age: u32,
    pub phase: ParticlePhase,
}

impl Particle {
    /// Fades linearly with age.
    pub fn opacity(&self) -> f32 {
        if self.max_age == 0 {
            return 0.0;
        }
        (1.0 - self.age as f32 / self.max_age as f32).clamp(0.0, 1.0)
    }

    /// `size` is a diameter.
    pub fn radius(&self) -> f32 {
        self.size.max(0.0) * 0.5
    }

    fn should_expire(&self, cfg: &ParticleConfig) -> bool {
        self.age >= self.max_age || self.size < cfg.visibility_floor
    }

    /// One frame of integration. Returns the phase after the tick.
    pub fn advance(&mut self, cfg: &ParticleConfig) -> ParticlePhase {
        if self.phase == ParticlePhase::Expired {
            return self.phase;
        }
        self.phase = ParticlePhase::Aging;
        self.position += self.velocity;
        self.velocity.x *= cfg.friction;
        self.velocity.y = self.velocity.y * cfg.friction + cfg.gravity;
        self.size *= cfg.shrink;
        self.age += 1;
        if self.should_expire(cfg) {
            self.phase = ParticlePhase::Expired;
        }
        self.phase
    }
}

/// Tunables for spawning and ageing particles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub capacity: usize,
    pub min_distance: f32,
    pub min_interval_ms: f64,
    pub distance_per_particle: f32,
    pub max_per_spawn: usize,
    pub size_range: (f32, f32),
    pub speed_range: (f32, f32),
    pub max_age_range: (u32, u32),
    pub friction: f32,
    pub gravity: f32,
    pub shrink: f32,
    pub visibility_floor: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: PARTICLE_CAPACITY,
            min_distance: PARTICLE_SPAWN_MIN_DISTANCE_PX,
            min_interval_ms: PARTICLE_SPAWN_MIN_INTERVAL_MS,
            distance_per_particle: PARTICLE_DISTANCE_PER_PARTICLE_PX,
            max_per_spawn: PARTICLE_MAX_PER_SPAWN,
            size_range: (PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_MAX_PX),
            speed_range: (PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            max_age_range: (PARTICLE_MAX_AGE_MIN, PARTICLE_MAX_AGE_MAX),
            friction: PARTICLE_FRICTION,
            gravity: PARTICLE_GRAVITY,
            shrink: PARTICLE_SHRINK,
            visibility_floor: PARTICLE_VISIBILITY_FLOOR_PX,
        }
    }
}

/// Result of feeding one pointer position to the spawn gate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub distance: f32,
    pub moving: bool,
    pub spawn_count: usize,
}

/// Decides how many particles a pointer move should emit.
///
/// Distance is measured from the previous pointer event, whether or not it
/// spawned; the interval is measured from the previous spawn.
#[derive(Clone, Debug, Default)]
pub struct SpawnGate {
    last_position: Option<Vec2>,
    last_spawn_ms: Option<f64>,
}

impl SpawnGate {
    pub fn observe(&mut self, position: Vec2, now_ms: f64, cfg: &ParticleConfig) -> PointerSample {
        let distance = self
            .last_position
            .map(|p| p.distance(position))
            .unwrap_or(0.0);
        self.last_position = Some(position);

        let moving = distance > cfg.min_distance;
        let interval_ok = self
            .last_spawn_ms
            .map_or(true, |t| now_ms - t > cfg.min_interval_ms);

        let mut spawn_count = 0;
        if moving && interval_ok {
            spawn_count = ((distance / cfg.distance_per_particle).floor() as usize)
                .min(cfg.max_per_spawn);
            self.last_spawn_ms = Some(now_ms);
        }
        PointerSample {
            distance,
            moving,
            spawn_count,
        }
    }
}

/// Fixed-capacity slot arena. Expired particles free their slot for reuse so
/// steady-state ticking does not allocate.
#[derive(Debug)]
pub struct ParticleArena {
    slots: Vec<Option<Particle>>,
    free: Vec<usize>,
    live: usize,
    capacity: usize,
}

impl ParticleArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            live: 0,
            capacity,
        }
    }

    /// Store a particle; `None` when every slot is occupied.
    pub fn insert(&mut self, particle: Particle) -> Option<usize> {
        let slot = match self.free.pop() {
            Some(i) => i,
            None if self.slots.len() < self.capacity => {
                self.slots.push(None);
                self.slots.len() - 1
            }
            None => return None,
        };
        self.slots[slot] = Some(particle);
        self.live += 1;
        Some(slot)
    }

    /// Advance every live particle one tick; returns how many expired.
    pub fn tick(&mut self, cfg: &ParticleConfig) -> usize {
        let mut expired = 0;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let gone = match slot {
                Some(p) => p.advance(cfg) == ParticlePhase::Expired,
                None => false,
            };
            if gone {
                *slot = None;
                self.free.push(i);
                expired += 1;
            }
        }
        self.live -= expired;
        expired
    }

    pub fn get(&self, slot: usize) -> Option<&Particle> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots ever allocated (live + recyclable).
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free.push(i);
            }
        }
        self.live = 0;
    }
}

/// Pointer-trail particle system: spawn gate, arena and RNG.
pub struct ParticleSystem {
    config: ParticleConfig,
    gate: SpawnGate,
    arena: ParticleArena,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        let arena = ParticleArena::with_capacity(config.capacity);
        Self {
            config,
            gate: SpawnGate::default(),
            arena,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Feed a pointer position; spawns particles at it when the gate allows.
    pub fn on_pointer_move(&mut self, position: Vec2, now_ms: f64) -> PointerSample {
        let sample = self.gate.observe(position, now_ms, &self.config);
        let batch: SmallVec<[Particle; PARTICLE_MAX_PER_SPAWN]> = (0..sample.spawn_count)
            .map(|_| self.make_particle(position))
            .collect();
        for p in batch {
            if self.arena.insert(p).is_none() {
                log::debug!("[particles] arena full, dropping spawn");
                break;
            }
        }
        sample
    }

    pub fn tick(&mut self) -> usize {
        self.arena.tick(&self.config)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.arena.iter()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
    }

    fn make_particle(&mut self, position: Vec2) -> Particle {
        let cfg = &self.config;
        let rng = &mut self.rng;
        let size = rng.gen_range(cfg.size_range.0..cfg.size_range.1);
        let speed = rng.gen_range(cfg.speed_range.0..cfg.speed_range.1);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let color = Hsla {
            hue: rng.gen_range(PARTICLE_HUE_RANGE.0..PARTICLE_HUE_RANGE.1),
            saturation: rng.gen_range(PARTICLE_SATURATION_RANGE.0..PARTICLE_SATURATION_RANGE.1),
            lightness: rng.gen_range(PARTICLE_LIGHTNESS_RANGE.0..PARTICLE_LIGHTNESS_RANGE.1),
            alpha: rng.gen_range(PARTICLE_ALPHA_RANGE.0..PARTICLE_ALPHA_RANGE.1),
        };
        Particle {
            position,
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            size,
            color,
            age: 0,
            max_age: rng.gen_range(cfg.max_age_range.0..=cfg.max_age_range.1),
            phase: ParticlePhase::Spawned,
        }
    }
}
