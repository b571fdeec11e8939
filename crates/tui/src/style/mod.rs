//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. They are looked
//! up by name, so configuration files and the command line can pick one.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, definitions, names};
