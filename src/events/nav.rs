use crate::constants::*;
use crate::core::constants::SCROLL_SPY_OFFSET_PX;
use crate::core::{active_section, ProjectFilter, SectionBounds, PROJECTS};
use crate::dom::{self, Listener, Listeners};
use crate::frame::Shared;
use crate::overlay;
use crate::render;
use crate::theme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    wire_scroll(listeners, document, shared);
    wire_menu(listeners, document, shared);
    wire_theme(listeners, document, shared);
    wire_projects(listeners, document, shared);
    wire_modal(listeners, document, shared);
}

fn section_bounds(document: &web::Document) -> Vec<SectionBounds> {
    let Ok(list) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.client_height() as f64,
        })
        .collect()
}

fn sync_scroll(document: &web::Document, shared: &Shared) {
    let y = dom::scroll_y();
    let sections = section_bounds(document);
    let active = active_section(y, &sections, SCROLL_SPY_OFFSET_PX);
    let mut state = shared.state.borrow_mut();
    let shadow_changed = state.set_scroll_y(y);
    let section_changed = state.set_active_section(active);
    if shadow_changed || section_changed {
        render::apply_nav(document, &state);
    }
}

fn wire_scroll(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    sync_scroll(document, shared);
    let doc = document.clone();
    let shared = shared.clone();
    listeners.push(Listener::on_window("scroll", move |_| sync_scroll(&doc, &shared)));
}

fn wire_menu(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let doc = document.clone();
    let toggle = shared.clone();
    listeners.push(Listener::on_id(document, MENU_BUTTON_ID, "click", move |_| {
        let open = toggle.state.borrow_mut().toggle_menu();
        render::apply_menu(&doc, open);
    }));

    // Following a link in the mobile menu closes it.
    let doc = document.clone();
    let close = shared.clone();
    listeners.push(Listener::on_id(document, MOBILE_MENU_ID, "click", move |ev| {
        if dom::closest_from_event(&ev, "a").is_some() {
            close.state.borrow_mut().close_menu();
            render::apply_menu(&doc, false);
        }
    }));
}

fn wire_theme(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let doc = document.clone();
    let shared = shared.clone();
    listeners.push(Listener::on_id(document, THEME_BUTTON_ID, "click", move |ev| {
        let mut state = shared.state.borrow_mut();
        if state.request_theme_toggle(ev.time_stamp()) {
            theme::play_pull_animation(&doc, state.theme());
        }
    }));
}

fn wire_projects(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let doc = document.clone();
    let filters = shared.clone();
    listeners.push(Listener::on_id(document, PROJECT_FILTERS_ID, "click", move |ev| {
        let Some(label) = dom::closest_from_event(&ev, "[data-filter]")
            .and_then(|el| el.get_attribute("data-filter"))
        else {
            return;
        };
        let mut state = filters.state.borrow_mut();
        state.set_filter(ProjectFilter::from_label(&label));
        render::render_projects(&doc, &state);
    }));

    let doc = document.clone();
    let view_all = shared.clone();
    listeners.push(Listener::on_id(document, VIEW_ALL_BUTTON_ID, "click", move |_| {
        let expanded = {
            let mut state = view_all.state.borrow_mut();
            let expanded = state.toggle_view_all();
            render::render_projects(&doc, &state);
            expanded
        };
        if expanded {
            scroll_down_later();
        }
    }));

    // "View Details" buttons live in both the timeline and the grid.
    let doc = document.clone();
    let details = shared.clone();
    listeners.push(Listener::new(document.as_ref(), "click", move |ev| {
        let Some(index) = dom::closest_from_event(&ev, "[data-project-index]")
            .and_then(|el| el.get_attribute("data-project-index"))
            .and_then(|v| v.parse::<usize>().ok())
        else {
            return;
        };
        let Some(project) = PROJECTS.get(index) else {
            log::warn!("[projects] no project at index {}", index);
            return;
        };
        details.state.borrow_mut().open_project(index);
        overlay::show_project_modal(&doc, project);
    }));
}

fn scroll_down_later() {
    let Some(window) = web::window() else {
        return;
    };
    let w = window.clone();
    let cb = Closure::once_into_js(move || {
        w.scroll_by_with_x_and_y(0.0, VIEW_ALL_SCROLL_PX);
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        VIEW_ALL_SCROLL_DELAY_MS,
    );
}

fn wire_modal(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let doc = document.clone();
    let close = shared.clone();
    listeners.push(Listener::on_id(document, MODAL_CLOSE_ID, "click", move |_| {
        if close.state.borrow_mut().close_project() {
            overlay::hide_project_modal(&doc);
        }
    }));

    // Clicks on the backdrop itself, not the dialog, dismiss it.
    let doc = document.clone();
    let backdrop = shared.clone();
    listeners.push(Listener::on_id(document, MODAL_ID, "click", move |ev| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == MODAL_ID)
            .unwrap_or(false);
        if on_backdrop && backdrop.state.borrow_mut().close_project() {
            overlay::hide_project_modal(&doc);
        }
    }));
}
