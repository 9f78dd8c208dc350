//! Composition root: finds the page's optional elements and mounts each
//! feature against them.
//!
//! Features are independent. A missing element disables only its feature,
//! and a feature that fails to mount is logged and skipped without
//! affecting the others.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlFormElement};

use crate::components::carousel::{self, CarouselHost};
use crate::components::contact_form::{self, ContactFormHost};
use crate::components::map::{self, MapWidget};
use crate::components::nav_menu::{self, NavMenuHost};
use crate::components::particle_canvas::{self, ParticleCanvas};
use crate::components::scroll_reveal::{self, ScrollReveal};
use crate::components::theme_toggle::{self, ThemeToggle};
use crate::components::timeline::{self, TimelineView};
use crate::config::SiteConfig;
use crate::state::contact::ContactForm;
use crate::util::dom::{self, DomError};

/// Optional DOM dependencies, looked up once at startup.
pub struct PageElements {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub theme_toggle: Option<Element>,
    pub navbar: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_links: Option<Element>,
    pub nav_anchors: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub map: Option<HtmlElement>,
    pub timeline: Option<HtmlElement>,
    pub canvas: Option<HtmlCanvasElement>,
    pub carousel_track: Option<HtmlElement>,
    pub next_button: Option<Element>,
    pub prev_button: Option<Element>,
}

fn cast<T: JsCast>(element: Element) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => None,
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(cast)
}

impl PageElements {
    #[must_use]
    pub fn query(document: Document) -> Self {
        Self {
            body: document.body(),
            theme_toggle: document.get_element_by_id("theme-toggle"),
            navbar: dom::query(&document, ".navbar"),
            hamburger: dom::query(&document, ".hamburger"),
            nav_links: dom::query(&document, ".nav-links"),
            nav_anchors: dom::query_all(&document, ".nav-links li a"),
            contact_form: by_id(&document, contact_form::FORM_ID),
            map: by_id(&document, map::CONTAINER_ID),
            timeline: by_id(&document, timeline::CONTAINER_ID),
            canvas: by_id(&document, particle_canvas::CANVAS_ID),
            carousel_track: dom::query(&document, ".carousel-track").and_then(cast),
            next_button: dom::query(&document, ".next-btn"),
            prev_button: dom::query(&document, ".prev-btn"),
            document,
        }
    }
}

fn mounted<T>(feature: &str, result: Result<T, DomError>) -> Option<T> {
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("{feature} disabled: {err}");
            None
        }
    }
}

fn absent(feature: &str) {
    log::debug!("{feature}: markup not present, skipping");
}

/// Every live listener, timer and frame loop on the page. Dropping it
/// detaches and cancels all of them.
#[derive(Default)]
pub struct Page {
    theme: Option<ThemeToggle>,
    nav: Option<NavMenuHost>,
    contact: Option<ContactFormHost>,
    map: Option<MapWidget>,
    timeline: Option<TimelineView>,
    reveal: Option<ScrollReveal>,
    particles: Option<ParticleCanvas>,
    carousel: Option<CarouselHost>,
}

impl Page {
    /// Mount all features present in `elements`.
    pub fn mount(config: &SiteConfig, elements: PageElements) -> Self {
        let mut page = Self::default();
        let PageElements {
            document,
            body,
            theme_toggle: toggle,
            navbar,
            hamburger,
            nav_links,
            nav_anchors,
            contact_form: form,
            map: map_container,
            timeline: timeline_container,
            canvas,
            carousel_track: track,
            next_button,
            prev_button,
        } = elements;

        if let (Some(toggle), Some(navbar), Some(hamburger)) = (&toggle, &navbar, &hamburger) {
            dom::report("theme", theme_toggle::relocate(toggle, navbar, hamburger));
        }

        match &body {
            Some(body) => page.theme = mounted("theme", theme_toggle::mount(body.clone(), toggle)).flatten(),
            None => absent("theme"),
        }

        match (hamburger, nav_links) {
            (Some(hamburger), Some(links)) => page.nav = mounted("nav", nav_menu::mount(hamburger, links, nav_anchors)),
            _ => absent("nav"),
        }

        match form {
            Some(form) => {
                let contact = ContactForm::new(config.contact.recipient.clone());
                page.contact = mounted("contact", contact_form::mount(form, contact));
            }
            None => absent("contact"),
        }

        match map_container {
            Some(container) => page.map = mounted("map", map::mount(container, &config.map)),
            None => absent("map"),
        }

        match timeline_container {
            Some(container) => page.timeline = Some(timeline::mount(container, config.experiences.clone())),
            None => absent("timeline"),
        }

        // After the timeline so its items are picked up.
        if config.reveal.selectors.is_empty() {
            absent("reveal");
        } else {
            let targets = dom::query_all(&document, &config.reveal.selector_query());
            page.reveal = mounted("reveal", scroll_reveal::mount(targets, config.reveal.threshold));
        }

        match (canvas, &body) {
            (Some(canvas), Some(body)) => {
                page.particles =
                    mounted("particles", particle_canvas::mount(canvas, body.clone(), config.particles.clone()));
            }
            _ => absent("particles"),
        }

        match track {
            Some(track) => {
                page.carousel = mounted(
                    "carousel",
                    carousel::mount(track, next_button, prev_button, config.carousel.interval_ms),
                )
                .flatten();
            }
            None => absent("carousel"),
        }

        log::info!("page script ready: {}", page.active_features().join(", "));
        page
    }

    /// Names of the features that mounted successfully.
    #[must_use]
    pub fn active_features(&self) -> Vec<&'static str> {
        [
            ("theme", self.theme.is_some()),
            ("nav", self.nav.is_some()),
            ("contact", self.contact.is_some()),
            ("map", self.map.is_some()),
            ("timeline", self.timeline.is_some()),
            ("reveal", self.reveal.is_some()),
            ("particles", self.particles.is_some()),
            ("carousel", self.carousel.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, live)| live.then_some(name))
        .collect()
    }

    /// Look up the page's elements and mount every feature.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when there is no window or document at all.
    pub fn boot(config: &SiteConfig) -> Result<Self, DomError> {
        let document = dom::document()?;
        Ok(Self::mount(config, PageElements::query(document)))
    }
}
