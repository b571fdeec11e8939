use std::fmt::Write;
use std::path::Path;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::app_dirs;
use crate::settings::default_sources;

/// Produce the full version banner: directories, the datasets used when none
/// is configured, and the available fold modes and themes.
pub(super) fn long_version() -> &'static str {
	let config_dir = app_dirs::get_config_dir();
	let data_dir = app_dirs::get_data_dir();
	let details = version_details(
		config_dir.as_deref().map_err(ToString::to_string),
		data_dir.as_deref().map_err(ToString::to_string),
	);
	Box::leak(details.into_boxed_str())
}

fn version_details(config_dir: Result<&Path, String>, data_dir: Result<&Path, String>) -> String {
	let describe = |dir: &Result<&Path, String>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("faqz {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(&config_dir));
	let _ = writeln!(details, "data directory: {}", describe(&data_dir));
	for (file_name, source) in default_sources(data_dir.ok()) {
		let _ = writeln!(details, "{file_name}: {source}");
	}
	let folds: Vec<&str> = faqz_core::FoldMode::ALL.iter().map(|mode| mode.name()).collect();
	let _ = writeln!(details, "fold modes: {}", folds.join(", "));
	let _ = writeln!(details, "themes: {}", faqz_tui::theme_names().join(", "));
	details
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
