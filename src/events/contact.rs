use crate::constants::{CONTACT_FORM_ID, CONTACT_SUBMIT_ID};
use crate::core::{ContactForm, Field, RelayConfig, Submission};
use crate::dom::{self, Listener, Listeners};
use crate::overlay;
use crate::relay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn read_value(target: &web::EventTarget) -> Option<(Field, String)> {
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Field::from_id(&input.id()).map(|f| (f, input.value()));
    }
    if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        return Field::from_id(&area.id()).map(|f| (f, area.value()));
    }
    None
}

fn clear_inputs(document: &web::Document) {
    for field in Field::ALL {
        let Some(el) = document.get_element_by_id(field.id()) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

fn set_sending(document: &web::Document, sending: bool) {
    let Some(btn) = dom::element(document, CONTACT_SUBMIT_ID) else {
        return;
    };
    if sending {
        _ = btn.set_attribute("disabled", "");
        btn.set_text_content(Some("Sending..."));
    } else {
        _ = btn.remove_attribute("disabled");
        btn.set_text_content(Some("Send Message"));
    }
}

pub fn wire(listeners: &mut Listeners, document: &web::Document) {
    let form = Rc::new(RefCell::new(ContactForm::new()));

    let doc = document.clone();
    let typing = form.clone();
    listeners.push(Listener::on_id(document, CONTACT_FORM_ID, "input", move |ev| {
        let Some((field, value)) = ev.target().as_ref().and_then(read_value) else {
            return;
        };
        let mut form = typing.borrow_mut();
        let had_error = form.error_for(field).is_some();
        form.set_value(field, value);
        if had_error {
            overlay::show_field_errors(&doc, &form);
        }
    }));

    let doc = document.clone();
    listeners.push(Listener::on_id(document, CONTACT_FORM_ID, "submit", move |ev| {
        ev.prevent_default();
        let submission = form.borrow_mut().submit(dom::locale_timestamp());
        let params = match submission {
            Submission::Send(params) => params,
            Submission::Invalid => {
                log::debug!("[contact] validation failed");
                overlay::show_field_errors(&doc, &form.borrow());
                return;
            }
            Submission::InFlight => return,
        };
        overlay::show_field_errors(&doc, &form.borrow());
        set_sending(&doc, true);

        let doc = doc.clone();
        let form = form.clone();
        spawn_local(async move {
            let result = match RelayConfig::from_build_env() {
                Ok(config) => relay::send(&config, params).await,
                Err(e) => Err(e),
            };
            match &result {
                Ok(()) => log::info!("[contact] message sent"),
                Err(e) => log::error!("[contact] send failed: {}", e),
            }
            let toast = form.borrow_mut().complete(&result);
            if result.is_ok() {
                clear_inputs(&doc);
            }
            set_sending(&doc, false);
            overlay::show_toast(&doc, &toast);
        });
    }));
}
