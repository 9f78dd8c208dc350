//! Browser hosts for each page feature.
//!
//! ARCHITECTURE
//! ============
//! Every host takes the DOM elements it needs as arguments (the composition
//! root in `crate::app` decides whether they exist), attaches listeners that
//! drive the matching `crate::state` machine, and returns a handle that
//! detaches everything when dropped. Only the timeline view compiles
//! outside the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod carousel;
#[cfg(feature = "hydrate")]
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod map;
#[cfg(feature = "hydrate")]
pub mod nav_menu;
#[cfg(feature = "hydrate")]
pub mod particle_canvas;
#[cfg(feature = "hydrate")]
pub mod scroll_reveal;
#[cfg(feature = "hydrate")]
pub mod theme_toggle;
pub mod timeline;
