//! Experience timeline.
//!
//! Renders the configured entries, in order, into the
//! `#experience-timeline` container. Must be mounted before scroll reveal
//! so the generated `.timeline-item` nodes get observed.

use leptos::prelude::*;

use crate::config::ExperienceEntry;

/// Container id the timeline is rendered into.
pub const CONTAINER_ID: &str = "experience-timeline";

/// One timeline card.
#[component]
pub fn TimelineItem(entry: ExperienceEntry) -> impl IntoView {
    let ExperienceEntry { role, company, period, description } = entry;
    view! {
        <div class="timeline-item">
            <h3>{role} " " <span class="role">"@ " {company}</span></h3>
            <p class="period" style="font-size: 0.9rem; color: #666; margin-bottom: 0.5rem;">{period}</p>
            <p>{description}</p>
        </div>
    }
}

/// All entries, in the order given.
#[component]
pub fn Timeline(entries: Vec<ExperienceEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| view! { <TimelineItem entry=entry/> })
        .collect_view()
}

/// The mounted timeline. Dropping it removes the rendered items.
#[cfg(feature = "hydrate")]
pub struct TimelineView {
    _handle: Box<dyn std::any::Any>,
}

/// Append the timeline to `container`. Rendering happens synchronously, so
/// the items exist as soon as this returns.
#[cfg(feature = "hydrate")]
pub fn mount(container: web_sys::HtmlElement, entries: Vec<ExperienceEntry>) -> TimelineView {
    let count = entries.len();
    let handle = leptos::mount::mount_to(container, move || view! { <Timeline entries=entries/> });
    log::debug!("timeline: rendered {count} entries");
    TimelineView { _handle: Box::new(handle) }
}
