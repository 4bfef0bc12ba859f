use crate::core::{PreferenceStore, Theme};
use web_sys as web;

/// `localStorage`-backed preference store. Storage failures (private mode,
/// quota) are logged and otherwise ignored.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[theme] failed to persist {}={}: {:?}", key, value, e);
            }
        }
    }
}

pub fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Mirror the theme onto `<html class="dark">`.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        crate::dom::set_class(&root, "dark", theme.is_dark());
    }
    if let Some(btn) = document.get_element_by_id(crate::constants::THEME_BUTTON_ID) {
        let label = if theme.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        };
        _ = btn.set_attribute("aria-label", label);
    }
}

/// Restart the pull-string and bulb CSS animations for a pending toggle.
pub fn play_pull_animation(document: &web::Document, theme: Theme) {
    if let Some(el) = crate::dom::element(document, crate::constants::PULL_STRING_ID) {
        let cl = el.class_list();
        _ = cl.remove_2("pull-string-animate", "pull-string-animate-dark");
        // Reading layout restarts the CSS animation.
        let _ = el.offset_width();
        _ = cl.add_1(if theme.is_dark() {
            "pull-string-animate"
        } else {
            "pull-string-animate-dark"
        });
    }
}
