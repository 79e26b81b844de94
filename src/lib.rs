//! # folio-site
//!
//! WASM front-end for a static portfolio site: a persisted dark/light theme
//! toggle, the homepage image carousel, and the per-page design carousels.
//!
//! The page's HTML is static; this crate attaches listeners once the DOM is
//! ready and mutates classes and radio inputs directly. Browser wiring is
//! behind the `hydrate` feature. The state machines underneath are plain Rust
//! and are tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Stored theme flag, visual state, and the toggle |
//! | [`carousel`] | Slide index, transition lock, gestures, and DOM binding |
//! | [`config`] | Page-overridable selectors and tuning |
//! | [`consts`] | Default storage key, DOM hooks, and timings |
//! | [`error`] | Error type for the browser initializers |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod theme;

#[cfg(feature = "hydrate")]
mod dom;

#[cfg(feature = "hydrate")]
pub use browser::run;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Event, Window};

    use crate::config::SiteConfig;
    use crate::error::SiteError;
    use crate::{carousel, dom, theme};

    const LOG_LEVEL: log::Level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(LOG_LEVEL).is_err() {
            log::debug!("console logger already installed");
        }
        if let Err(e) = boot() {
            log::warn!("site init failed: {e}");
        }
    }

    /// Run the initializers now, or at `DOMContentLoaded` if the document is
    /// still parsing.
    fn boot() -> Result<(), SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let doc = window.document().ok_or(SiteError::NoDocument)?;
        if doc.ready_state() != "loading" {
            run(&window, &doc);
            return Ok(());
        }
        let target = doc.clone();
        dom::listen(&target, "DOMContentLoaded", move |_: Event| run(&window, &doc))
    }

    /// Initialize the theme toggle and every carousel on the page. Each
    /// initializer is independent; a failure in one is logged and the rest
    /// still run.
    pub fn run(window: &Window, doc: &Document) {
        let config = SiteConfig::from_document(doc);
        if let Err(e) = theme::init(window, doc, &config.theme) {
            log::warn!("theme init failed: {e}");
        }
        if let Err(e) = carousel::init_primary(doc, &config.carousel) {
            log::warn!("carousel init failed: {e}");
        }
        if let Err(e) = carousel::init_design(doc, &config.carousel) {
            log::warn!("design carousel init failed: {e}");
        }
    }
}
