//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the component
//! state machines to keep the latter testable on the host.

pub mod dom;
#[cfg(feature = "hydrate")]
pub mod logging;
pub mod mailto;
pub mod storage;
