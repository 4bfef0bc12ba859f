use super::constants::*;
use super::content::Project;
use super::interp::Keyframes;
use super::progress::ScrollProgress;
use super::spring::{Spring, SpringConfig};

// Curve shapes as offsets from the anchor, in half-widths.
const EDGE_OFFSETS: [f32; 3] = [-1.0, 0.0, 1.0];
const OPACITY_OFFSETS: [f32; 5] = [-4.0 / 3.0, -1.0 / 3.0, 0.0, 1.0 / 3.0, 4.0 / 3.0];
const IMAGE_OFFSETS: [f32; 3] = [-2.0 / 3.0, 0.0, 2.0 / 3.0];

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    pub half_width: f32,
    pub offset_px: f32,
    pub scale_edge: f32,
    pub opacity_shoulder: f32,
    pub image_scale_edge: f32,
    pub top_span_percent: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            half_width: TIMELINE_HALF_WIDTH,
            offset_px: TIMELINE_OFFSET_PX,
            scale_edge: TIMELINE_SCALE_EDGE,
            opacity_shoulder: TIMELINE_OPACITY_SHOULDER,
            image_scale_edge: TIMELINE_IMAGE_SCALE_EDGE,
            top_span_percent: TIMELINE_TOP_SPAN_PERCENT,
        }
    }
}

/// Anchor of entry `index` among `total`; a lone entry sits at 0.
#[inline]
pub fn anchor_for(index: usize, total: usize) -> f32 {
    if total <= 1 {
        0.0
    } else {
        index as f32 / (total - 1) as f32
    }
}

/// Sub-range of global progress over which an entry animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressWindow {
    pub start: f32,
    pub anchor: f32,
    pub end: f32,
}

impl ProgressWindow {
    pub fn around(anchor: f32, half_width: f32) -> Self {
        Self {
            start: (anchor - half_width).max(0.0),
            anchor,
            end: (anchor + half_width).min(1.0),
        }
    }

    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Horizontal shift applied on top of `left: 50%`.
    pub fn translate_x_percent(self) -> f32 {
        match self {
            Side::Left => -75.0,
            Side::Right => -25.0,
        }
    }
}

/// Visual state of one entry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedTransform {
    pub opacity: f32,
    pub vertical_offset: f32,
    pub scale: f32,
    pub image_scale: f32,
}

impl Default for DerivedTransform {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            vertical_offset: 0.0,
            scale: 1.0,
            image_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
struct EntryCurves {
    opacity: Keyframes,
    offset: Keyframes,
    scale: Keyframes,
    image_scale: Keyframes,
}

impl EntryCurves {
    fn build(anchor: f32, cfg: &TimelineConfig) -> Self {
        let hw = cfg.half_width;
        let shoulder = cfg.opacity_shoulder;
        Self {
            opacity: Keyframes::anchored(
                anchor,
                hw,
                &OPACITY_OFFSETS,
                &[0.0, shoulder, 1.0, shoulder, 0.0],
            ),
            offset: Keyframes::anchored(
                anchor,
                hw,
                &EDGE_OFFSETS,
                &[cfg.offset_px, 0.0, cfg.offset_px],
            ),
            scale: Keyframes::anchored(
                anchor,
                hw,
                &EDGE_OFFSETS,
                &[cfg.scale_edge, 1.0, cfg.scale_edge],
            ),
            image_scale: Keyframes::anchored(
                anchor,
                hw,
                &IMAGE_OFFSETS,
                &[cfg.image_scale_edge, 1.0, cfg.image_scale_edge],
            ),
        }
    }
}

/// One project placed on the timeline. Immutable after construction.
#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub index: usize,
    pub total: usize,
    pub project: &'static Project,
    window: ProgressWindow,
    top_percent: f32,
    curves: EntryCurves,
}

impl TimelineEntry {
    pub fn new(index: usize, total: usize, project: &'static Project, cfg: &TimelineConfig) -> Self {
        let anchor = anchor_for(index, total);
        Self {
            index,
            total,
            project,
            window: ProgressWindow::around(anchor, cfg.half_width),
            top_percent: anchor * cfg.top_span_percent,
            curves: EntryCurves::build(anchor, cfg),
        }
    }

    #[inline]
    pub fn anchor(&self) -> f32 {
        self.window.anchor
    }

    pub fn window(&self) -> ProgressWindow {
        self.window
    }

    pub fn side(&self) -> Side {
        Side::for_index(self.index)
    }

    pub fn top_percent(&self) -> f32 {
        self.top_percent
    }

    pub fn z_index(&self) -> usize {
        self.index
    }

    pub fn opacity_curve(&self) -> &Keyframes {
        &self.curves.opacity
    }

    pub fn offset_curve(&self) -> &Keyframes {
        &self.curves.offset
    }

    pub fn scale_curve(&self) -> &Keyframes {
        &self.curves.scale
    }

    pub fn transform_at(&self, progress: ScrollProgress) -> DerivedTransform {
        let p = progress.value();
        DerivedTransform {
            opacity: self.curves.opacity.sample(p),
            vertical_offset: self.curves.offset.sample(p),
            scale: self.curves.scale.sample(p),
            image_scale: self.curves.image_scale.sample(p),
        }
    }
}

/// Section-wide decorations driven by the same progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionEffects {
    pub progress_bar_scale: f32,
    pub progress_bar_opacity: f32,
    pub line_scale: f32,
    pub start_marker_opacity: f32,
    pub end_marker_opacity: f32,
}

#[derive(Clone, Debug)]
struct SectionCurves {
    bar_opacity: Keyframes,
    start_marker: Keyframes,
    end_marker: Keyframes,
}

impl Default for SectionCurves {
    fn default() -> Self {
        Self {
            bar_opacity: Keyframes::new([(0.0, 0.0), (0.05, 1.0), (0.95, 1.0), (1.0, 0.0)]),
            start_marker: Keyframes::new([(0.0, 1.0), (0.05, 1.0), (0.1, 0.0)]),
            end_marker: Keyframes::new([(0.9, 0.0), (0.95, 1.0), (1.0, 1.0)]),
        }
    }
}

/// The ordered entries of the timeline.
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    section: SectionCurves,
}

impl Timeline {
    pub fn new(projects: &'static [Project], cfg: &TimelineConfig) -> Self {
        let total = projects.len();
        let entries = projects
            .iter()
            .enumerate()
            .map(|(i, p)| TimelineEntry::new(i, total, p, cfg))
            .collect();
        Self {
            entries,
            section: SectionCurves::default(),
        }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unsmoothed transforms for every entry, in entry order.
    pub fn derive(&self, progress: ScrollProgress, out: &mut Vec<DerivedTransform>) {
        out.clear();
        out.extend(self.entries.iter().map(|e| e.transform_at(progress)));
    }

    fn section_targets(&self, raw: ScrollProgress) -> SectionEffects {
        let p = raw.value();
        SectionEffects {
            progress_bar_scale: p,
            progress_bar_opacity: self.section.bar_opacity.sample(p),
            line_scale: p,
            start_marker_opacity: self.section.start_marker.sample(p),
            end_marker_opacity: self.section.end_marker.sample(p),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ChannelSprings {
    opacity: Spring,
    offset: Spring,
    scale: Spring,
    image_scale: Spring,
}

impl ChannelSprings {
    fn new(cfg: SpringConfig) -> Self {
        Self {
            opacity: Spring::new(cfg),
            offset: Spring::new(cfg),
            scale: Spring::new(cfg),
            image_scale: Spring::new(cfg),
        }
    }

    fn follow(&mut self, target: &DerivedTransform, dt_sec: f32) -> DerivedTransform {
        DerivedTransform {
            opacity: self.opacity.follow(target.opacity, dt_sec).clamp(0.0, 1.0),
            vertical_offset: self.offset.follow(target.vertical_offset, dt_sec),
            scale: self.scale.follow(target.scale, dt_sec),
            image_scale: self.image_scale.follow(target.image_scale, dt_sec),
        }
    }
}

/// Derive-then-smooth pipeline over a [`Timeline`].
pub struct TimelineAnimator {
    timeline: Timeline,
    springs: Vec<ChannelSprings>,
    progress_spring: Spring,
    targets: Vec<DerivedTransform>,
    smoothed: Vec<DerivedTransform>,
    section: Option<SectionEffects>,
}

impl TimelineAnimator {
    pub fn new(timeline: Timeline, spring: SpringConfig) -> Self {
        let n = timeline.len();
        Self {
            timeline,
            springs: vec![ChannelSprings::new(spring); n],
            progress_spring: Spring::new(spring),
            targets: Vec::with_capacity(n),
            smoothed: vec![DerivedTransform::default(); n],
            section: None,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Advance one frame with the raw progress sample.
    pub fn update(&mut self, raw: ScrollProgress, dt_sec: f32) -> &[DerivedTransform] {
        self.timeline.derive(raw, &mut self.targets);

        let smooth_progress = self.progress_spring.follow(raw.value(), dt_sec).clamp(0.0, 1.0);
        let mut section = self.timeline.section_targets(raw);
        section.progress_bar_scale = smooth_progress;
        section.line_scale = smooth_progress;
        self.section = Some(section);

        for ((springs, target), out) in self
            .springs
            .iter_mut()
            .zip(&self.targets)
            .zip(self.smoothed.iter_mut())
        {
            *out = springs.follow(target, dt_sec);
        }
        &self.smoothed
    }

    pub fn transforms(&self) -> &[DerivedTransform] {
        &self.smoothed
    }

    pub fn section(&self) -> Option<SectionEffects> {
        self.section
    }

    /// Smoothed progress, for the progress bar and timeline line.
    pub fn smoothed_progress(&self) -> f32 {
        self.progress_spring.value()
    }
}
