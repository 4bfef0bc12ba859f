pub mod combo;
pub mod constants;
/// Contact form: field state, validation, the relay request payload and the
/// user-facing outcome of a submission.
pub mod contact;
/// Static page content: site identity, navigation, projects, experience and
/// the hero/stat copy. Loaded once; never mutated.
pub mod content;
pub mod cursor;
pub mod interp;
pub mod particles;
/// Scroll sampling: container progress through the viewport, element
/// visibility and the nav scroll spy.
///
/// Everything here works on plain geometry (CSS pixels) so the web layer can
/// feed it from `getBoundingClientRect` / `offsetTop` without this module
/// touching the DOM.
pub mod progress;
pub mod spring;
/// Application state and its named transitions.
///
/// Every UI toggle on the page (theme, mobile menu, project filter, details
/// modal, scroll spy) lives here; event handlers call a transition and then
/// re-render from the returned value instead of flipping DOM state directly.
pub mod state;
/// Scroll-driven project timeline.
///
/// Each entry owns an anchor in `[0, 1]` (`index / (total - 1)`) and four
/// piecewise-linear curves placed around it. Per frame the animator maps the
/// raw container progress through those curves and then runs every channel
/// through a spring before the renderer reads it.
pub mod timeline;
pub mod typewriter;

pub use combo::*;
pub use contact::*;
pub use content::*;
pub use cursor::*;
pub use interp::*;
pub use particles::*;
pub use progress::*;
pub use spring::*;
pub use state::*;
pub use timeline::*;
pub use typewriter::*;
