//! Logger bootstrap.
//!
//! The terminal belongs to the UI while it runs, so records are collected by
//! `tui-logger` and shown in the in-app log pane instead of being written to
//! stderr.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the `tui-logger` collector and set its default level.
pub(crate) fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level)
		.map_err(|err| anyhow!("failed to install the log collector: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging initialised at {level}");
	Ok(())
}
