use crate::constants::INTERACTIVE_SELECTOR;
use crate::core::{cursor_enabled, CursorVariant};
use crate::dom::{self, Listener, Listeners};
use crate::frame::Shared;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    wire_pointermove(listeners, shared);
    wire_hover(listeners, document, shared);
}

fn wire_pointermove(listeners: &mut Listeners, shared: &Shared) {
    let shared = shared.clone();
    listeners.push(Listener::on_window("pointermove", move |ev: web::Event| {
        let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !cursor_enabled(dom::viewport_size().0) {
            return;
        }
        let pos = Vec2::new(pe.client_x() as f32, pe.client_y() as f32);
        let sample = shared
            .particles
            .borrow_mut()
            .on_pointer_move(pos, ev.time_stamp());
        if sample.spawn_count > 0 {
            log::trace!(
                "[pointer] d={:.1} spawned={}",
                sample.distance,
                sample.spawn_count
            );
        }
        shared.cursor.borrow_mut().set_pointer(pos, sample.moving);
    }));
}

/// Grow the ring over links, buttons and inputs.
fn wire_hover(listeners: &mut Listeners, document: &web::Document, shared: &Shared) {
    let over = shared.clone();
    listeners.push(Listener::new(document.as_ref(), "pointerover", move |ev| {
        let variant = if dom::closest_from_event(&ev, INTERACTIVE_SELECTOR).is_some() {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        };
        let mut cursor = over.cursor.borrow_mut();
        if cursor.variant() != variant {
            cursor.set_variant(variant);
        }
    }));

    // Leaving the window entirely has no following `pointerover`.
    let out = shared.clone();
    listeners.push(Listener::new(document.as_ref(), "pointerout", move |ev| {
        let left_window = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|me| me.related_target().is_none())
            .unwrap_or(false);
        if left_window {
            out.cursor.borrow_mut().set_variant(CursorVariant::Default);
        }
    }));
}
