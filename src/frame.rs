use crate::constants::*;
use crate::core::constants::COUNTER_VISIBLE_FRACTION;
use crate::core::{
    cursor_enabled, visible_fraction, AppState, ContainerRect, CountUp, CursorFollower,
    EasterEgg, ParticleSystem, ScrollTracker, TimelineAnimator, Typewriter,
};
use crate::dom;
use crate::overlay;
use crate::render::{self, CursorView, ParticlePainter, TimelineView};
use crate::theme::{self, LocalStore};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State shared between the frame loop and the event handlers.
#[derive(Clone)]
pub struct Shared {
    pub state: Rc<RefCell<AppState>>,
    pub store: Rc<RefCell<LocalStore>>,
    pub particles: Rc<RefCell<ParticleSystem>>,
    pub cursor: Rc<RefCell<CursorFollower>>,
    pub egg: Rc<RefCell<EasterEgg>>,
}

pub struct FrameContext {
    pub document: web::Document,
    pub shared: Shared,

    pub animator: TimelineAnimator,
    pub tracker: ScrollTracker,
    pub timeline_view: Option<TimelineView>,

    pub cursor_view: Option<CursorView>,
    pub cursor_visible: Option<bool>,
    pub painter: Option<ParticlePainter>,

    pub typewriter: Typewriter,
    pub counters: Vec<CountUp>,
    pub counter_values: Vec<u32>,

    pub last_instant: Instant,
}

fn rect_of(el: &web::HtmlElement) -> Option<ContainerRect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(ContainerRect {
        top: r.top(),
        height: r.height(),
    })
}

impl FrameContext {
    /// One animation frame. `now_ms` is the rAF timestamp, which shares its
    /// time origin with `Event.timeStamp`.
    pub fn frame(&mut self, now_ms: f64) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let (vw, vh) = dom::viewport_size();
        self.update_timeline(vh, dt_sec);
        self.update_cursor(vw, dt_sec);
        self.poll_timers(now_ms);
        self.update_hero(now_ms, vh);
    }

    fn update_timeline(&mut self, viewport_height: f64, dt_sec: f32) {
        let Some(view) = &self.timeline_view else {
            return;
        };
        // Derive, then smooth, then write styles.
        let Some(progress) = self.tracker.sample(rect_of(view.container()), viewport_height) else {
            return;
        };
        self.animator.update(progress, dt_sec);
        view.apply(self.animator.timeline(), self.animator.transforms());
        if let Some(fx) = self.animator.section() {
            view.apply_section(&fx);
        }
    }

    fn update_cursor(&mut self, viewport_width: f64, dt_sec: f32) {
        let enabled = cursor_enabled(viewport_width);
        if self.cursor_visible != Some(enabled) {
            self.cursor_visible = Some(enabled);
            if let Some(cv) = &self.cursor_view {
                cv.set_visible(enabled);
            }
            if let Some(p) = &self.painter {
                dom::set_class(p.canvas(), "hidden", !enabled);
            }
            if !enabled {
                self.shared.particles.borrow_mut().clear();
            }
            log::debug!("[cursor] enabled={}", enabled);
        }
        if !enabled {
            return;
        }

        let frame = self.shared.cursor.borrow_mut().update(dt_sec);
        if let Some(cv) = &self.cursor_view {
            cv.apply(&frame);
        }

        let mut particles = self.shared.particles.borrow_mut();
        particles.tick();
        if let Some(p) = &self.painter {
            p.draw(particles.particles());
        }
    }

    fn poll_timers(&mut self, now_ms: f64) {
        let toggled = {
            let mut store = self.shared.store.borrow_mut();
            self.shared
                .state
                .borrow_mut()
                .poll_theme_toggle(now_ms, &mut *store)
        };
        if let Some(t) = toggled {
            theme::apply(&self.document, t);
            log::info!("[theme] switched to {}", t.as_str());
        }

        if self.shared.egg.borrow_mut().poll(now_ms) {
            overlay::hide_easter_egg(&self.document);
        }
    }

    fn update_hero(&mut self, now_ms: f64, viewport_height: f64) {
        if self.typewriter.update(now_ms) {
            render::set_typed_text(&self.document, self.typewriter.text());
        }

        if self.counters.iter().any(|c| !c.is_started()) {
            let visible = dom::element(&self.document, STATS_ID)
                .as_ref()
                .and_then(rect_of)
                .map(|r| visible_fraction(r, viewport_height))
                .unwrap_or(0.0);
            if visible >= COUNTER_VISIBLE_FRACTION {
                for c in self.counters.iter_mut() {
                    c.start(now_ms);
                }
            }
        }
        for (i, (c, last)) in self
            .counters
            .iter()
            .zip(self.counter_values.iter_mut())
            .enumerate()
        {
            let v = c.value_at(now_ms);
            if v != *last {
                *last = v;
                render::set_stat_value(&self.document, i, v);
            }
        }
    }
}

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl AnimationLoop {
    pub fn start(frame_ctx: FrameContext) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let mut frame_ctx = frame_ctx;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            frame_ctx.frame(now_ms);
            handle_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut(f64)>));

        handle.set(request_frame(&tick));
        Self { handle, tick }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
        .ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The callback holds a clone of `tick`; taking it breaks the cycle.
        drop(self.tick.borrow_mut().take());
    }
}
