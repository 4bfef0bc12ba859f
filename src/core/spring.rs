use super::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS,
};

/// Physical parameters of a damped spring.
///
/// The default is critically damped (`damping == 2 * sqrt(stiffness * mass)`)
/// and therefore settles on a step target without overshooting it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Critically damped spring for the given stiffness and mass.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self::new(stiffness, 2.0 * (stiffness * mass).max(0.0).sqrt(), mass)
    }

    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1 is critical, below 1 oscillates, above 1 creeps.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_degenerate(&self) -> bool {
        !(self.stiffness > 0.0 && self.mass > 0.0 && self.damping >= 0.0)
            || !self.stiffness.is_finite()
            || !self.mass.is_finite()
            || !self.damping.is_finite()
    }
}

/// Scalar spring follower.
///
/// Each step advances the closed-form solution of the damped oscillator by
/// the elapsed time, so large or uneven frame times stay stable.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
    initialized: bool,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            initialized: false,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() {
            return;
        }
        if !self.initialized {
            self.jump_to(target);
        } else {
            self.target = target;
        }
    }

    /// Place the spring at `value`, at rest.
    pub fn jump_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.initialized = true;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Set the target and advance by `dt_sec`. The first call snaps to the
    /// target so a freshly created follower does not sweep in from zero.
    pub fn follow(&mut self, target: f32, dt_sec: f32) -> f32 {
        self.set_target(target);
        self.step(dt_sec)
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if !(dt_sec > 0.0) || !dt_sec.is_finite() {
            return self.position;
        }
        if self.config.is_degenerate() {
            self.jump_to(self.target);
            return self.position;
        }

        let (x, v) = advance(
            &self.config,
            self.position - self.target,
            self.velocity,
            dt_sec,
        );
        self.position = self.target + x;
        self.velocity = v;

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

// Offset `x0` from the target and velocity `v0`, advanced by `t` seconds.
fn advance(cfg: &SpringConfig, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let w0 = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();

    if (zeta - 1.0).abs() < 1e-4 {
        let c = v0 + w0 * x0;
        let e = (-w0 * t).exp();
        let x = (x0 + c * t) * e;
        let v = (v0 - w0 * c * t) * e;
        (x, v)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + zeta * w0 * x0) / wd;
        let e = (-zeta * w0 * t).exp();
        let (s, c) = (wd * t).sin_cos();
        let x = e * (x0 * c + b * s);
        let v = e * (v0 * c - (x0 * wd + zeta * w0 * b) * s);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

/// Two independent springs driving a screen-space point.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config),
            y: Spring::new(config),
        }
    }

    pub fn follow(&mut self, target: glam::Vec2, dt_sec: f32) -> glam::Vec2 {
        glam::Vec2::new(
            self.x.follow(target.x, dt_sec),
            self.y.follow(target.y, dt_sec),
        )
    }

    pub fn value(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x.value(), self.y.value())
    }
}
