use super::constants::{NAVBAR_SHADOW_SCROLL_PX, PROJECTS_COLLAPSED_COUNT, THEME_TOGGLE_DELAY_MS};
use super::content::Project;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Durable key-value store for user preferences (`localStorage` on the web).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Projects grid filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.in_category(c),
        }
    }
}

/// Projects matching `filter`; only the first few unless `view_all`.
pub fn visible_projects<'a>(
    projects: &'a [Project],
    filter: &ProjectFilter,
    view_all: bool,
) -> Vec<&'a Project> {
    let limit = if view_all {
        usize::MAX
    } else {
        PROJECTS_COLLAPSED_COUNT
    };
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .take(limit)
        .collect()
}

/// Number of projects matching `filter`, ignoring the collapsed limit.
pub fn matching_count(projects: &[Project], filter: &ProjectFilter) -> usize {
    projects.iter().filter(|p| filter.matches(p)).count()
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    theme: Theme,
    theme_toggle_due_ms: Option<f64>,
    menu_open: bool,
    scrolled: bool,
    active_section: Option<String>,
    filter: ProjectFilter,
    view_all: bool,
    selected_project: Option<usize>,
}

impl AppState {
    /// Initial state: stored theme if valid, otherwise the system preference.
    pub fn load(store: &impl PreferenceStore, prefers_dark: bool) -> Self {
        let theme = store
            .load(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light });
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme now and persist it.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.save(THEME_KEY, self.theme.as_str());
        self.theme
    }

    /// Start the pull-string toggle. Ignored while one is already running.
    pub fn request_theme_toggle(&mut self, now_ms: f64) -> bool {
        if self.theme_toggle_due_ms.is_some() {
            return false;
        }
        self.theme_toggle_due_ms = Some(now_ms + THEME_TOGGLE_DELAY_MS);
        true
    }

    pub fn theme_toggle_pending(&self) -> bool {
        self.theme_toggle_due_ms.is_some()
    }

    /// Complete a requested toggle once its animation delay has passed.
    pub fn poll_theme_toggle(
        &mut self,
        now_ms: f64,
        store: &mut impl PreferenceStore,
    ) -> Option<Theme> {
        match self.theme_toggle_due_ms {
            Some(due) if now_ms >= due => {
                self.theme_toggle_due_ms = None;
                Some(self.toggle_theme(store))
            }
            _ => None,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns true when the navbar shadow state changed.
    pub fn set_scroll_y(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAVBAR_SHADOW_SCROLL_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Returns true when the highlighted section changed.
    pub fn set_active_section(&mut self, id: Option<&str>) -> bool {
        if self.active_section.as_deref() == id {
            return false;
        }
        self.active_section = id.map(str::to_string);
        true
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Changing the filter collapses the grid again.
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.view_all = false;
    }

    pub fn view_all(&self) -> bool {
        self.view_all
    }

    pub fn toggle_view_all(&mut self) -> bool {
        self.view_all = !self.view_all;
        self.view_all
    }

    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    pub fn open_project(&mut self, index: usize) {
        self.selected_project = Some(index);
    }

    /// Returns true when a modal was open.
    pub fn close_project(&mut self) -> bool {
        self.selected_project.take().is_some()
    }
}

/// In-memory store, used before `localStorage` is available and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn save(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}
