#![cfg(target_arch = "wasm32")]
use crate::core::{
    AppState, CountUp, CursorFollower, EasterEgg, ParticleConfig, ParticleSystem, ScrollTracker,
    SpringConfig, Timeline, TimelineAnimator, TimelineConfig, Typewriter, TypewriterConfig,
    PROJECTS, STATS, TYPED_STRINGS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod relay;
mod render;
mod theme;

use frame::{AnimationLoop, FrameContext, Shared};

/// Everything the running page owns. Dropping it stops the frame loop and
/// detaches every listener.
struct Page {
    _listeners: dom::Listeners,
    _frame_loop: AnimationLoop,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear the page down: cancel the animation loop and remove listeners.
#[wasm_bindgen]
pub fn stop() {
    if PAGE.with(|p| p.borrow_mut().take()).is_some() {
        log::info!("folio-web stopped");
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = theme::LocalStore::open();
    let state = AppState::load(&store, theme::prefers_dark());
    theme::apply(&document, state.theme());
    log::info!("[theme] initial {}", state.theme().as_str());

    let timeline = Timeline::new(PROJECTS, &TimelineConfig::default());
    render::render_content(&document, &timeline, &state);
    let timeline_view = render::TimelineView::bind(&document, &timeline);
    if timeline_view.is_none() {
        log::warn!("[timeline] #{} not found; timeline disabled", constants::TIMELINE_CONTAINER_ID);
    }

    let painter = document
        .get_element_by_id(constants::CURSOR_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .and_then(|canvas| {
            render::ParticlePainter::new(canvas)
                .map_err(|e| log::warn!("[cursor] particle canvas disabled: {:?}", e))
                .ok()
        });

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let shared = Shared {
        state: Rc::new(RefCell::new(state)),
        store: Rc::new(RefCell::new(store)),
        particles: Rc::new(RefCell::new(ParticleSystem::new(
            ParticleConfig::default(),
            seed,
        ))),
        cursor: Rc::new(RefCell::new(CursorFollower::new())),
        egg: Rc::new(RefCell::new(EasterEgg::default())),
    };

    let listeners = events::wire_all(&document, &shared);

    let frame_ctx = FrameContext {
        document: document.clone(),
        shared,
        animator: TimelineAnimator::new(timeline, SpringConfig::default()),
        tracker: ScrollTracker::new(),
        timeline_view,
        cursor_view: render::CursorView::bind(&document),
        cursor_visible: None,
        painter,
        typewriter: Typewriter::new(TYPED_STRINGS, TypewriterConfig::default()),
        counters: STATS.iter().map(|s| CountUp::new(s.value)).collect(),
        counter_values: vec![0; STATS.len()],
        last_instant: Instant::now(),
    };
    let frame_loop = AnimationLoop::start(frame_ctx);

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _listeners: listeners,
            _frame_loop: frame_loop,
        })
    });
    Ok(())
}
