/// How far a tracked container has travelled through the viewport, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp into `[0, 1]`; NaN maps to 0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::START
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub top: f64,
    pub height: f64,
}

/// Progress of `rect` through a viewport of `viewport_height`.
///
/// 0 when the container's top edge meets the viewport bottom, 1 when its
/// bottom edge meets the viewport top. Zero-height containers report 0.
pub fn progress_through_viewport(rect: ContainerRect, viewport_height: f64) -> ScrollProgress {
    if !(rect.height > 0.0) || !rect.top.is_finite() {
        return ScrollProgress::START;
    }
    let travel = viewport_height.max(0.0) + rect.height;
    if !(travel > 0.0) || !travel.is_finite() {
        return ScrollProgress::START;
    }
    ScrollProgress::new(((viewport_height - rect.top) / travel) as f32)
}

/// Fraction of `rect` currently inside the viewport, in `[0, 1]`.
pub fn visible_fraction(rect: ContainerRect, viewport_height: f64) -> f32 {
    if !(rect.height > 0.0) {
        return 0.0;
    }
    let top = rect.top.max(0.0);
    let bottom = (rect.top + rect.height).min(viewport_height);
    (((bottom - top) / rect.height).clamp(0.0, 1.0)) as f32
}

/// Holds the last progress sample of one tracked container.
///
/// A sample with no geometry (the container is gone) produces no update and
/// leaves the previous value in place.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    current: ScrollProgress,
    mounted: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(
        &mut self,
        rect: Option<ContainerRect>,
        viewport_height: f64,
    ) -> Option<ScrollProgress> {
        let rect = match rect {
            Some(r) => r,
            None => {
                self.mounted = false;
                return None;
            }
        };
        self.mounted = true;
        self.current = progress_through_viewport(rect, viewport_height);
        Some(self.current)
    }

    #[inline]
    pub fn current(&self) -> ScrollProgress {
        self.current
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Document-space bounds of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the nav should highlight for `scroll_y`.
///
/// Later sections win when ranges overlap, matching document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - offset && scroll_y < s.top + s.height - offset)
        .last()
        .map(|s| s.id.as_str())
}
