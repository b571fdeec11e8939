//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers config files, environment
//! variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`] that the rest of the binary consumes.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use raw::default_sources;
pub(crate) use resolved::{DatasetSource, ResolvedConfig};
