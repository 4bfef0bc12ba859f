use crate::dom::{Listener, Listeners};
use crate::frame::Shared;
use crate::overlay;
use crate::render;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let shared = shared.clone();
    let document = document.clone();
    listeners.push(Listener::on_window("keydown", move |ev: web::Event| {
        let Some(ke) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let key = ke.key();

        if key == "Escape" {
            handle_escape(&document, &shared);
        }

        let activated = shared.egg.borrow_mut().on_key(&key, ev.time_stamp());
        if activated {
            log::info!("[egg] sequence complete");
            overlay::show_easter_egg(&document);
        }
    }));
}

fn handle_escape(document: &web::Document, shared: &Shared) {
    let mut state = shared.state.borrow_mut();
    if state.close_project() {
        overlay::hide_project_modal(document);
    }
    if state.menu_open() {
        state.close_menu();
        render::apply_menu(document, false);
    }
}
