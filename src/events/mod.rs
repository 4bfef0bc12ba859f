//! DOM event wiring. Every handler is registered through [`Listeners`], so
//! dropping the page detaches all of them.

use crate::dom::Listeners;
use crate::frame::Shared;
use web_sys as web;

mod contact;
mod keyboard;
mod nav;
mod pointer;

pub fn wire_all(document: &web::Document, shared: &Shared) -> Listeners {
    let mut listeners = Listeners::default();
    pointer::wire(&mut listeners, document, shared);
    keyboard::wire(&mut listeners, document, shared);
    nav::wire(&mut listeners, document, shared);
    contact::wire(&mut listeners, document);
    log::info!("[events] {} listeners attached", listeners.len());
    listeners
}
