use super::constants::EASTER_EGG_DURATION_MS;

/// Konami code, as `KeyboardEvent.key` values.
pub const KONAMI: &[&str] = &[
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Streaming matcher for a key sequence anywhere in the keystroke stream.
///
/// On a mismatch the matcher falls back to the longest prefix of the
/// sequence that is still a suffix of what was typed (KMP failure links), so
/// overlapping attempts like `Up Up Up Down Down ...` still match.
#[derive(Clone, Debug)]
pub struct SequenceMatcher {
    sequence: Vec<String>,
    fallback: Vec<usize>,
    matched: usize,
}

impl SequenceMatcher {
    pub fn new<S: AsRef<str>>(sequence: &[S]) -> Self {
        let sequence: Vec<String> = sequence.iter().map(|s| s.as_ref().to_string()).collect();
        let fallback = failure_links(&sequence);
        Self {
            sequence,
            fallback,
            matched: 0,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI)
    }

    /// Number of leading sequence keys currently matched.
    #[inline]
    pub fn progress(&self) -> usize {
        self.matched
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Feed one key; `true` when it completes the sequence. Progress resets
    /// after a completed match.
    pub fn push(&mut self, key: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        while self.matched > 0 && self.sequence[self.matched] != key {
            self.matched = self.fallback[self.matched - 1];
        }
        if self.sequence[self.matched] == key {
            self.matched += 1;
        }
        if self.matched == self.sequence.len() {
            self.matched = 0;
            return true;
        }
        false
    }
}

// fallback[i] = length of the longest proper prefix of sequence[..=i] that is
// also a suffix of it.
fn failure_links(sequence: &[String]) -> Vec<usize> {
    let mut links = vec![0; sequence.len()];
    let mut k = 0;
    for i in 1..sequence.len() {
        while k > 0 && sequence[i] != sequence[k] {
            k = links[k - 1];
        }
        if sequence[i] == sequence[k] {
            k += 1;
        }
        links[i] = k;
    }
    links
}

/// Easter egg: the overlay is active for a fixed time after the sequence.
#[derive(Clone, Debug)]
pub struct EasterEgg {
    matcher: SequenceMatcher,
    active_until_ms: Option<f64>,
    duration_ms: f64,
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self::new(SequenceMatcher::konami(), EASTER_EGG_DURATION_MS)
    }
}

impl EasterEgg {
    pub fn new(matcher: SequenceMatcher, duration_ms: f64) -> Self {
        Self {
            matcher,
            active_until_ms: None,
            duration_ms,
        }
    }

    /// Feed a key; `true` when this key activated the egg.
    pub fn on_key(&mut self, key: &str, now_ms: f64) -> bool {
        if self.matcher.push(key) {
            self.active_until_ms = Some(now_ms + self.duration_ms);
            return true;
        }
        false
    }

    /// Expire the egg if its time is up; `true` when it just turned off.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.active_until_ms {
            Some(until) if now_ms >= until => {
                self.active_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_until_ms.is_some()
    }

    pub fn progress(&self) -> usize {
        self.matcher.progress()
    }
}
