use std::fmt;
use std::path::PathBuf;

use faqz_core::FoldMode;
use faqz_tui::UiLabels;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatasetSource {
	/// The copy compiled into `faqz-core`.
	Bundled,
	File(PathBuf),
}

impl fmt::Display for DatasetSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bundled => f.write_str("(bundled)"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub questions: DatasetSource,
	pub popular: DatasetSource,
	pub fold: FoldMode,
	pub initial_query: String,
	/// Name of a built-in theme, already validated.
	pub theme: String,
	pub labels: UiLabels,
	pub collapse_popular: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
