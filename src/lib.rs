//! # portfolio
//!
//! Leptos + WASM page script for a static portfolio site. It decorates the
//! server-rendered markup with a theme switch, mobile menu, mailto contact
//! form, Leaflet map, experience timeline, scroll reveal animations, a
//! particle background and an auto-advancing carousel.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-free state machines, one per feature |
//! | [`components`] | Browser hosts wiring DOM events to the state machines |
//! | [`app`] | Composition root (hydrate only) |
//! | [`config`] | Embedded site content and tuning values |
//! | [`util`] | Storage, mailto encoding, DOM helpers, logging |

#[cfg(feature = "hydrate")]
pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::app::Page;
    use crate::config::SiteConfig;
    use crate::util::{dom, logging};

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    fn boot(config: &SiteConfig) {
        match Page::boot(config) {
            Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
            Err(err) => log::error!("page script not started: {err}"),
        }
    }

    /// Module entry point. Mounts immediately if the document has been
    /// parsed, otherwise waits for `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the embedded site content is invalid.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        let config = match SiteConfig::embedded() {
            Ok(config) => config,
            Err(err) => {
                logging::init(log::Level::Info);
                log::error!("{err}");
                return Err(JsValue::from_str(&err.to_string()));
            }
        };
        logging::init(config.log_level());

        let document = dom::document().map_err(|err| JsValue::from_str(&err.to_string()))?;
        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(move || boot(&config));
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            boot(&config);
        }
        Ok(())
    }

    /// Detach every listener and stop the frame loop and carousel timer.
    #[wasm_bindgen]
    pub fn shutdown() {
        if PAGE.with(|slot| slot.borrow_mut().take()).is_some() {
            log::info!("page script stopped");
        }
    }
}
