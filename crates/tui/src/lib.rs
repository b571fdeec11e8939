//! Interactive terminal UI for `faqz`.
//!
//! This crate hosts the terminal application around the search state machine
//! from `faqz-core`: the builder, event loop, rendering pipeline, mouse hit
//! testing, and the widgets/style definitions that draw the search box,
//! results dropdown, answer panel and popular-questions list.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::{App, Focus};
pub use builder::FaqUi;
pub use config::UiLabels;
pub use outcome::SearchOutcome;
pub use runtime::MouseCapture;

pub use crate::input::SearchInput;
pub use crate::style::{Theme, by_name as theme_by_name, default_theme, names as theme_names};
