//! Core application state and behavior for the FAQ search widget.
//!
//! The [`App`] type composes the search component (its [`SearchState`] and
//! input box) with the popular-questions list. Supporting modules partition the
//! implementation: actions (keyboard and mouse handling) and rendering.
//!
//! [`SearchState`]: faqz_core::SearchState

mod actions;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub use state::{App, Focus};
pub(crate) use state::HitRegions;
