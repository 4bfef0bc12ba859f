// Shared engine constants. Pure values only, no platform types.

// Timeline layout
pub const TIMELINE_HALF_WIDTH: f32 = 0.3; // progress window half-width around an entry's anchor
pub const TIMELINE_OFFSET_PX: f32 = 50.0; // vertical offset at the window edges
pub const TIMELINE_SCALE_EDGE: f32 = 0.8; // item scale at the window edges
pub const TIMELINE_OPACITY_SHOULDER: f32 = 0.7; // opacity one third of a half-width from the anchor
pub const TIMELINE_IMAGE_SCALE_EDGE: f32 = 1.1; // thumbnail zoom at the image window edges
pub const TIMELINE_TOP_SPAN_PERCENT: f32 = 85.0; // items are laid out over the top 85% of the track

// Spring defaults (critically damped: damping == 2 * sqrt(stiffness * mass))
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 1e-3;
pub const SPRING_REST_SPEED: f32 = 1e-2;

// Cursor particles
pub const PARTICLE_CAPACITY: usize = 256;
pub const PARTICLE_SPAWN_MIN_DISTANCE_PX: f32 = 5.0;
pub const PARTICLE_SPAWN_MIN_INTERVAL_MS: f64 = 50.0;
pub const PARTICLE_DISTANCE_PER_PARTICLE_PX: f32 = 10.0;
pub const PARTICLE_MAX_PER_SPAWN: usize = 3;
pub const PARTICLE_SIZE_MIN_PX: f32 = 2.0;
pub const PARTICLE_SIZE_MAX_PX: f32 = 10.0;
pub const PARTICLE_SPEED_MIN: f32 = 1.0; // px per tick
pub const PARTICLE_SPEED_MAX: f32 = 3.0;
pub const PARTICLE_MAX_AGE_MIN: u32 = 10; // ticks
pub const PARTICLE_MAX_AGE_MAX: u32 = 30;
pub const PARTICLE_FRICTION: f32 = 0.97;
pub const PARTICLE_GRAVITY: f32 = 0.1; // px per tick^2, +y is down
pub const PARTICLE_SHRINK: f32 = 0.95;
pub const PARTICLE_VISIBILITY_FLOOR_PX: f32 = 0.5;

// Particle palette (blues to purples)
pub const PARTICLE_HUE_RANGE: (u16, u16) = (220, 260);
pub const PARTICLE_SATURATION_RANGE: (u8, u8) = (70, 100);
pub const PARTICLE_LIGHTNESS_RANGE: (u8, u8) = (50, 70);
pub const PARTICLE_ALPHA_RANGE: (f32, f32) = (0.2, 0.7);

// Navigation
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;
pub const NAVBAR_SHADOW_SCROLL_PX: f64 = 10.0;
pub const THEME_TOGGLE_DELAY_MS: f64 = 200.0;

// Projects grid
pub const PROJECTS_COLLAPSED_COUNT: usize = 3;

// Easter egg
pub const EASTER_EGG_DURATION_MS: f64 = 10_000.0;

// Contact relay
pub const CONTACT_TITLE: &str = "Portfolio Contact Message";
pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Hero typewriter
pub const TYPE_SPEED_MS: f64 = 100.0;
pub const BACK_SPEED_MS: f64 = 50.0;
pub const TYPE_START_DELAY_MS: f64 = 300.0;
pub const TYPE_BACK_DELAY_MS: f64 = 1500.0;

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_VISIBLE_FRACTION: f32 = 0.5;
