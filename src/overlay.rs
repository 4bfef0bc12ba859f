use crate::constants::*;
use crate::core::{ContactForm, Field, Project, Toast, ToastKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

/// Show a toast and hide it again after `TOAST_DURATION_MS`.
pub fn show_toast(document: &web::Document, toast: &Toast) {
    if let Some(el) = document.get_element_by_id(TOAST_TITLE_ID) {
        el.set_text_content(Some(toast.title));
    }
    if let Some(el) = document.get_element_by_id(TOAST_DESCRIPTION_ID) {
        el.set_text_content(Some(toast.description));
    }
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        let failure = toast.kind == ToastKind::Failure;
        crate::dom::set_class(&el, "toast-error", failure);
    }
    show(document, TOAST_ID);

    let doc = document.clone();
    let hide_later = Closure::once_into_js(move || hide(&doc, TOAST_ID));
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide_later.unchecked_ref(),
            TOAST_DURATION_MS,
        );
    }
}

pub fn show_easter_egg(document: &web::Document) {
    show(document, EASTER_EGG_ID);
}

pub fn hide_easter_egg(document: &web::Document) {
    hide(document, EASTER_EGG_ID);
}

/// Fill and open the project details modal.
pub fn show_project_modal(document: &web::Document, project: &Project) {
    if let Some(el) = document.get_element_by_id(MODAL_BODY_ID) {
        el.set_inner_html(&crate::render::project_details_html(project));
    }
    show(document, MODAL_ID);
    if let Some(body) = document.body() {
        crate::dom::set_class(&body, "overflow-hidden", true);
    }
}

pub fn hide_project_modal(document: &web::Document) {
    hide(document, MODAL_ID);
    if let Some(body) = document.body() {
        crate::dom::set_class(&body, "overflow-hidden", false);
    }
}

/// Mirror the form's validation errors next to each field.
pub fn show_field_errors(document: &web::Document, form: &ContactForm) {
    for field in Field::ALL {
        let error = form.error_for(field);
        if let Some(el) = document.get_element_by_id(&format!("{}-error", field.id())) {
            let text = error.map(|e| e.to_string()).unwrap_or_default();
            el.set_text_content(Some(&text));
            crate::dom::set_class(&el, "hidden", error.is_none());
        }
        if let Some(input) = document.get_element_by_id(field.id()) {
            crate::dom::set_class(&input, "input-error", error.is_some());
        }
    }
}
