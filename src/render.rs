use crate::constants::*;
use crate::core::{
    visible_projects, AppState, CursorFrame, DerivedTransform, Particle, Project, ProjectFilter,
    SectionEffects, Timeline, EXPERIENCE, NAV_LINKS, PROJECTS, PROJECT_FILTERS, SITE, STATS,
    TECHNICAL_SKILLS,
};
use crate::dom::{self, set_class, set_style};
use std::f64::consts::TAU;
use std::fmt::Write as _;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Markup =====================

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tech_badges(out: &mut String, technologies: &[&str]) {
    for t in technologies {
        _ = write!(out, r#"<span class="tech-badge">{}</span>"#, escape(t));
    }
}

/// Timeline items, one per project, absolutely positioned by the frame loop.
pub fn timeline_items_html(timeline: &Timeline) -> String {
    let mut out = String::new();
    for entry in timeline.entries() {
        let p = entry.project;
        _ = write!(
            out,
            r#"<article class="timeline-item" data-timeline-index="{idx}" style="top:{top:.2}%;z-index:{z};opacity:0">
<div class="timeline-card">
<div class="timeline-image"><img data-timeline-image src="{img}" alt="{title}" loading="lazy"></div>
<h3>{title}</h3>
<p>{desc}</p>
<div class="tech-list">"#,
            idx = entry.index,
            top = entry.top_percent(),
            z = entry.z_index(),
            img = escape(p.image),
            title = escape(p.title),
            desc = escape(p.description),
        );
        tech_badges(&mut out, p.technologies);
        _ = write!(
            out,
            r#"</div>
<button type="button" class="view-details" data-project-index="{}">View Details</button>
</div>
</article>"#,
            entry.index
        );
    }
    out
}

/// Cards for the filtered project grid.
pub fn project_cards_html(projects: &[&Project]) -> String {
    let mut out = String::new();
    for p in projects {
        let index = PROJECTS.iter().position(|q| q.id == p.id).unwrap_or(0);
        _ = write!(
            out,
            r#"<div class="project-card">
<img src="{img}" alt="{title}" loading="lazy">
<h3>{title}</h3>
<p>{desc}</p>
<div class="tech-list">"#,
            img = escape(p.image),
            title = escape(p.title),
            desc = escape(p.description),
        );
        tech_badges(&mut out, p.technologies);
        _ = write!(
            out,
            r#"</div>
<button type="button" class="view-details" data-project-index="{}">View Details</button>
</div>"#,
            index
        );
    }
    out
}

pub fn project_details_html(p: &Project) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        r#"<img class="modal-image" src="{img}" alt="{title}">
<h2>{title}</h2>
<p>{desc}</p>
<h4>Use Case</h4>
<p>{use_case}</p>
<h4>Solution</h4>
<p>{solution}</p>
<div class="tech-list">"#,
        img = escape(p.image),
        title = escape(p.title),
        desc = escape(p.description),
        use_case = escape(p.use_case),
        solution = escape(p.solution),
    );
    tech_badges(&mut out, p.technologies);
    out.push_str("</div><div class=\"modal-links\">");
    if !p.live_link.is_empty() {
        _ = write!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Live Demo</a>"#,
            escape(p.live_link)
        );
    }
    if !p.code_link.is_empty() {
        _ = write!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Source Code</a>"#,
            escape(p.code_link)
        );
    }
    out.push_str("</div>");
    out
}

fn filter_buttons_html(active: &ProjectFilter) -> String {
    let mut out = String::new();
    for label in PROJECT_FILTERS {
        let class = if *label == active.label() {
            "filter-button active"
        } else {
            "filter-button"
        };
        _ = write!(
            out,
            r#"<button type="button" class="{}" data-filter="{}">{}</button>"#,
            class,
            escape(label),
            escape(label)
        );
    }
    out
}

fn stats_html() -> String {
    let mut out = String::new();
    for (i, s) in STATS.iter().enumerate() {
        _ = write!(
            out,
            r#"<div class="stat"><span class="stat-value" data-stat-index="{}">0{}</span><span class="stat-label">{}</span></div>"#,
            i,
            escape(s.suffix),
            escape(s.label)
        );
    }
    out
}

fn skills_html() -> String {
    let mut out = String::new();
    for s in TECHNICAL_SKILLS {
        _ = write!(
            out,
            r#"<div class="skill"><div class="skill-header"><span>{name}</span><span>{pct}%</span></div><div class="skill-bar"><div class="skill-fill" style="width:{pct}%"></div></div></div>"#,
            name = escape(s.name),
            pct = s.percentage
        );
    }
    out
}

fn experience_html() -> String {
    let mut out = String::new();
    for e in EXPERIENCE {
        _ = write!(
            out,
            r#"<div class="experience-item"><h3>{}</h3><p class="company">{} &middot; {}</p><ul>"#,
            escape(e.title),
            escape(e.company),
            escape(e.period)
        );
        for r in e.responsibilities {
            _ = write!(out, "<li>{}</li>", escape(r));
        }
        out.push_str("</ul></div>");
    }
    out
}

/// Fill the static content regions once at start-up.
pub fn render_content(document: &web::Document, timeline: &Timeline, state: &AppState) {
    document.set_title(&format!("{} | {}", SITE.name, SITE.title));
    if let Some(el) = document.get_element_by_id(SKILLS_ID) {
        el.set_inner_html(&skills_html());
    }
    if let Some(el) = document.get_element_by_id(EXPERIENCE_ID) {
        el.set_inner_html(&experience_html());
    }
    if let Some(el) = document.get_element_by_id(TIMELINE_ITEMS_ID) {
        el.set_inner_html(&timeline_items_html(timeline));
    }
    if let Some(el) = document.get_element_by_id(STATS_ID) {
        el.set_inner_html(&stats_html());
    }
    render_projects(document, state);
}

/// Re-render the filter bar, the grid and the view-all toggle.
pub fn render_projects(document: &web::Document, state: &AppState) {
    if let Some(el) = document.get_element_by_id(PROJECT_FILTERS_ID) {
        el.set_inner_html(&filter_buttons_html(state.filter()));
    }
    if let Some(el) = document.get_element_by_id(PROJECTS_GRID_ID) {
        let visible = visible_projects(PROJECTS, state.filter(), state.view_all());
        el.set_inner_html(&project_cards_html(&visible));
    }
    if let Some(btn) = dom::element(document, VIEW_ALL_BUTTON_ID) {
        let hidden = crate::core::matching_count(PROJECTS, state.filter())
            <= crate::core::constants::PROJECTS_COLLAPSED_COUNT;
        set_class(&btn, "hidden", hidden);
        btn.set_text_content(Some(if state.view_all() {
            "Show Less"
        } else {
            "View All Projects"
        }));
    }
}

// ===================== Per-frame styles =====================

/// Cached handles for the elements the timeline animates.
pub struct TimelineView {
    container: web::HtmlElement,
    items: Vec<web::HtmlElement>,
    images: Vec<Option<web::HtmlElement>>,
    progress_bar: Option<web::HtmlElement>,
    line: Option<web::HtmlElement>,
    start_marker: Option<web::HtmlElement>,
    end_marker: Option<web::HtmlElement>,
}

impl TimelineView {
    /// Bind to the rendered items; `None` if the section is absent.
    pub fn bind(document: &web::Document, timeline: &Timeline) -> Option<Self> {
        let container = dom::element(document, TIMELINE_CONTAINER_ID)?;
        let mut items = Vec::with_capacity(timeline.len());
        let mut images = Vec::with_capacity(timeline.len());
        for entry in timeline.entries() {
            let selector = format!("[data-timeline-index=\"{}\"]", entry.index);
            let item = document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())?;
            let image = item
                .query_selector("[data-timeline-image]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            items.push(item);
            images.push(image);
        }
        Some(Self {
            container,
            items,
            images,
            progress_bar: dom::element(document, TIMELINE_PROGRESS_BAR_ID),
            line: dom::element(document, TIMELINE_LINE_ID),
            start_marker: dom::element(document, TIMELINE_START_MARKER_ID),
            end_marker: dom::element(document, TIMELINE_END_MARKER_ID),
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn apply(&self, timeline: &Timeline, transforms: &[DerivedTransform]) {
        for ((entry, t), (item, image)) in timeline
            .entries()
            .iter()
            .zip(transforms)
            .zip(self.items.iter().zip(&self.images))
        {
            set_style(item, "opacity", &format!("{:.3}", t.opacity));
            set_style(
                item,
                "transform",
                &format!(
                    "translateX({}%) translateY({:.2}px) scale({:.4})",
                    entry.side().translate_x_percent(),
                    t.vertical_offset,
                    t.scale
                ),
            );
            if let Some(img) = image {
                set_style(img, "transform", &format!("scale({:.4})", t.image_scale));
            }
        }
    }

    pub fn apply_section(&self, fx: &SectionEffects) {
        if let Some(bar) = &self.progress_bar {
            set_style(bar, "transform", &format!("scaleX({:.4})", fx.progress_bar_scale));
            set_style(bar, "opacity", &format!("{:.3}", fx.progress_bar_opacity));
        }
        if let Some(line) = &self.line {
            set_style(line, "transform", &format!("scaleY({:.4})", fx.line_scale));
        }
        if let Some(m) = &self.start_marker {
            set_style(m, "opacity", &format!("{:.3}", fx.start_marker_opacity));
        }
        if let Some(m) = &self.end_marker {
            set_style(m, "opacity", &format!("{:.3}", fx.end_marker_opacity));
        }
    }
}

pub struct CursorView {
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    glow: Option<web::HtmlElement>,
}

impl CursorView {
    pub fn bind(document: &web::Document) -> Option<Self> {
        Some(Self {
            ring: dom::element(document, CURSOR_RING_ID)?,
            dot: dom::element(document, CURSOR_DOT_ID)?,
            glow: dom::element(document, CURSOR_GLOW_ID),
        })
    }

    pub fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        set_style(&self.ring, "display", display);
        set_style(&self.dot, "display", display);
        if let Some(g) = &self.glow {
            set_style(g, "display", display);
        }
    }

    pub fn apply(&self, f: &CursorFrame) {
        set_style(&self.ring, "width", &format!("{:.1}px", f.ring_size));
        set_style(&self.ring, "height", &format!("{:.1}px", f.ring_size));
        set_style(&self.ring, "transform", &f.ring_transform());
        set_style(&self.dot, "transform", &f.dot_transform());
        set_style(&self.dot, "opacity", &format!("{:.3}", f.dot_opacity));
        if let Some(g) = &self.glow {
            set_style(g, "transform", &f.glow_transform());
        }
    }
}

/// 2D canvas painter for the cursor trail.
pub struct ParticlePainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl ParticlePainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn draw<'p>(&self, particles: impl Iterator<Item = &'p Particle>) {
        let dpr = dom::sync_canvas_backing_size(&self.canvas);
        let ctx = &self.ctx;
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        for p in particles {
            let color = p.color.to_css();
            ctx.set_global_alpha(p.opacity() as f64);
            ctx.set_fill_style_str(&color);
            ctx.set_shadow_color(&color);
            ctx.set_shadow_blur((p.size * 2.0) as f64);
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius() as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }
}

// ===================== Navigation and hero =====================

pub fn apply_nav(document: &web::Document, state: &AppState) {
    if let Some(nav) = document.get_element_by_id(NAVBAR_ID) {
        set_class(&nav, NAVBAR_SCROLLED_CLASS, state.scrolled());
    }
    for link in NAV_LINKS {
        let selector = format!("a[href=\"{}\"]", link.href);
        if let Ok(list) = document.query_selector_all(&selector) {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    set_class(&el, "active", state.active_section() == Some(link.section_id()));
                }
            }
        }
    }
}

pub fn apply_menu(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
        set_class(&menu, "hidden", !open);
    }
    if let Some(btn) = document.get_element_by_id(MENU_BUTTON_ID) {
        _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

pub fn set_typed_text(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HERO_TYPED_ID) {
        el.set_text_content(Some(text));
    }
}

pub fn set_stat_value(document: &web::Document, index: usize, value: u32) {
    let Some(stat) = STATS.get(index) else {
        return;
    };
    let selector = format!("[data-stat-index=\"{}\"]", index);
    if let Some(el) = document.query_selector(&selector).ok().flatten() {
        el.set_text_content(Some(&format!("{}{}", value, stat.suffix)));
    }
}
