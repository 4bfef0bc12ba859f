// DOM ids, selectors and frame tuning used by the web front-end.
//
// These keep markup contracts with `index.html` in one place instead of
// scattering string literals through the event and render code.

// Timeline section
pub const TIMELINE_CONTAINER_ID: &str = "timeline-track";
pub const TIMELINE_ITEMS_ID: &str = "timeline-items";
pub const TIMELINE_PROGRESS_BAR_ID: &str = "timeline-progress";
pub const TIMELINE_LINE_ID: &str = "timeline-line";
pub const TIMELINE_START_MARKER_ID: &str = "timeline-start";
pub const TIMELINE_END_MARKER_ID: &str = "timeline-end";

// Cursor layers
pub const CURSOR_CANVAS_ID: &str = "cursor-canvas";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_GLOW_ID: &str = "cursor-glow";
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [role=\"button\"]";

// Overlays
pub const TOAST_ID: &str = "toast";
pub const TOAST_TITLE_ID: &str = "toast-title";
pub const TOAST_DESCRIPTION_ID: &str = "toast-description";
pub const TOAST_DURATION_MS: i32 = 5000;
pub const EASTER_EGG_ID: &str = "easter-egg";
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_BODY_ID: &str = "project-modal-body";
pub const MODAL_CLOSE_ID: &str = "project-modal-close";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAVBAR_SCROLLED_CLASS: &str = "shadow-md";
pub const MENU_BUTTON_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const THEME_BUTTON_ID: &str = "theme-toggle";
pub const PULL_STRING_ID: &str = "pull-string";

// Sections
pub const HERO_TYPED_ID: &str = "hero-typed";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const PROJECT_FILTERS_ID: &str = "project-filters";
pub const VIEW_ALL_BUTTON_ID: &str = "projects-view-all";
pub const STATS_ID: &str = "stats";
pub const SKILLS_ID: &str = "skills-list";
pub const EXPERIENCE_ID: &str = "experience-list";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp long frames (tab switches) before smoothing
pub const VIEW_ALL_SCROLL_PX: f64 = 200.0;
pub const VIEW_ALL_SCROLL_DELAY_MS: i32 = 100;
