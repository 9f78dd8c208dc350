//! Component state machines.
//!
//! DESIGN
//! ======
//! Each page feature keeps its state here, private behind explicit
//! operations, with no browser types involved. The hosts in
//! `crate::components` translate DOM events into these calls and write the
//! results back to the document.

pub mod carousel;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod theme;
