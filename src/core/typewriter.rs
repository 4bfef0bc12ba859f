use super::constants::{
    BACK_SPEED_MS, COUNTER_DURATION_MS, TYPE_BACK_DELAY_MS, TYPE_SPEED_MS, TYPE_START_DELAY_MS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub type_ms: f64,
    pub back_ms: f64,
    pub start_delay_ms: f64,
    pub back_delay_ms: f64,
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: TYPE_SPEED_MS,
            back_ms: BACK_SPEED_MS,
            start_delay_ms: TYPE_START_DELAY_MS,
            back_delay_ms: TYPE_BACK_DELAY_MS,
            looping: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    Deleting,
    Done,
}

// More than this many pending steps means the tab slept; resync instead of replaying.
const MAX_CATCH_UP_STEPS: usize = 64;

/// Hero text that types, holds, deletes and moves to the next string.
#[derive(Clone, Debug)]
pub struct Typewriter {
    strings: Vec<&'static str>,
    config: TypewriterConfig,
    index: usize,
    chars: usize,
    phase: TypePhase,
    next_at_ms: Option<f64>,
}

impl Typewriter {
    pub fn new(strings: &[&'static str], config: TypewriterConfig) -> Self {
        let phase = if strings.is_empty() {
            TypePhase::Done
        } else {
            TypePhase::Typing
        };
        Self {
            strings: strings.to_vec(),
            config,
            index: 0,
            chars: 0,
            phase,
            next_at_ms: None,
        }
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    /// Currently visible text.
    pub fn text(&self) -> &'static str {
        let Some(s) = self.strings.get(self.index) else {
            return "";
        };
        match s.char_indices().nth(self.chars) {
            Some((byte, _)) => &s[..byte],
            None => s,
        }
    }

    fn current_len(&self) -> usize {
        self.strings
            .get(self.index)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }

    /// Advance to `now_ms`; returns true when the visible text changed.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let next = match self.next_at_ms {
            Some(t) => t,
            None => {
                self.next_at_ms = Some(now_ms + self.config.start_delay_ms);
                return false;
            }
        };
        let mut next = next;
        let mut changed = false;
        let mut steps = 0;
        while self.phase != TypePhase::Done && now_ms >= next {
            if steps == MAX_CATCH_UP_STEPS {
                next = now_ms;
                break;
            }
            steps += 1;
            next += self.step();
            changed = true;
        }
        self.next_at_ms = Some(next);
        changed
    }

    // One keystroke; returns the delay until the next one.
    fn step(&mut self) -> f64 {
        let len = self.current_len();
        match self.phase {
            TypePhase::Typing => {
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars < len {
                    return self.config.type_ms;
                }
                let last = self.index + 1 == self.strings.len();
                self.phase = if last && !self.config.looping {
                    TypePhase::Done
                } else {
                    TypePhase::Deleting
                };
                self.config.back_delay_ms
            }
            TypePhase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars > 0 {
                    return self.config.back_ms;
                }
                self.index = (self.index + 1) % self.strings.len();
                self.phase = TypePhase::Typing;
                self.config.type_ms
            }
            TypePhase::Done => 0.0,
        }
    }
}

/// Count-up stat: `floor(t / duration * end)`, settling exactly on `end`.
#[derive(Clone, Debug)]
pub struct CountUp {
    end: u32,
    duration_ms: f64,
    started_at_ms: Option<f64>,
}

impl CountUp {
    pub fn new(end: u32) -> Self {
        Self::with_duration(end, COUNTER_DURATION_MS)
    }

    pub fn with_duration(end: u32, duration_ms: f64) -> Self {
        Self {
            end,
            duration_ms,
            started_at_ms: None,
        }
    }

    /// Begin counting; later calls are ignored so it only ever runs once.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.started_at_ms
            .map(|t| now_ms - t >= self.duration_ms)
            .unwrap_or(false)
    }

    pub fn value_at(&self, now_ms: f64) -> u32 {
        let Some(start) = self.started_at_ms else {
            return 0;
        };
        if !(self.duration_ms > 0.0) {
            return self.end;
        }
        let t = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.end
        } else {
            (t * self.end as f64).floor() as u32
        }
    }
}
