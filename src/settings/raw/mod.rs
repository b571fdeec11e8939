use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use faqz_core::FoldMode;
use faqz_tui::UiLabels;
use log::LevelFilter;
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, DatasetSource, ResolvedConfig, SettingSource};
use crate::app_dirs;
use crate::cli::CliArgs;


const QUESTIONS_FILE: &str = "questions.json";
const POPULAR_FILE: &str = "popular_questions.json";
const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	questions: Option<PathBuf>,
	popular: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	fold: Option<String>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	placeholder: Option<String>,
	answer_title: Option<String>,
	popular_title: Option<String>,
	/// Show only the answer the user opens in the popular list.
	collapse_popular: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.questions.clone() {
			self.data.questions = Some(path);
		}
		if let Some(path) = cli.popular.clone() {
			self.data.popular = Some(path);
		}
		if let Some(fold) = cli.fold {
			self.search.fold = Some(fold.as_str().to_string());
		}
		if let Some(query) = cli.initial_query.clone() {
			self.search.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, ConfigError> {
		let data_dir = app_dirs::get_data_dir().ok();
		self.resolve_in(cli, data_dir.as_deref())
	}

	fn resolve_in(
		self,
		cli: &CliArgs,
		data_dir: Option<&Path>,
	) -> Result<ResolvedConfig, ConfigError> {
		let sources = ConfigSources {
			fold: detect_source(
				cli.fold.is_some(),
				self.search.fold.is_some(),
				"FAQZ__SEARCH__FOLD",
				"--fold",
				"search.fold",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FAQZ__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"FAQZ__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let fold = match self.search.fold {
			Some(value) => FoldMode::from_str(&value).map_err(|_| {
				ConfigError::invalid(
					"search.fold",
					value,
					sources.source_for_fold(),
					"expected one of: unicode, arabic",
				)
			})?,
			None => FoldMode::default(),
		};

		let theme = self
			.ui
			.theme
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		if faqz_tui::theme_by_name(&theme).is_none() {
			let expected = format!("expected one of: {}", faqz_tui::theme_names().join(", "));
			return Err(ConfigError::invalid(
				"ui.theme",
				theme,
				sources.source_for_theme(),
				expected,
			));
		}

		let log_level = match self.logging.level {
			Some(value) => LevelFilter::from_str(value.trim()).map_err(|_| {
				ConfigError::invalid(
					"logging.level",
					value,
					sources.source_for_log_level(),
					"expected one of: off, error, warn, info, debug, trace",
				)
			})?,
			None => LevelFilter::Info,
		};

		let mut labels = UiLabels::default();
		if let Some(placeholder) = self.ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}
		if let Some(title) = self.ui.answer_title {
			labels = labels.with_answer_title(title);
		}
		if let Some(title) = self.ui.popular_title {
			labels = labels.with_popular_title(title);
		}

		Ok(ResolvedConfig {
			questions: dataset_source(self.data.questions, data_dir, QUESTIONS_FILE),
			popular: dataset_source(self.data.popular, data_dir, POPULAR_FILE),
			fold,
			initial_query: self.search.initial_query.unwrap_or_default(),
			theme,
			labels,
			collapse_popular: self.ui.collapse_popular.unwrap_or(false),
			log_level,
		})
	}
}

/// Datasets used when nothing is configured, keyed by the file name looked up
/// in `data_dir`.
pub(crate) fn default_sources(data_dir: Option<&Path>) -> [(&'static str, DatasetSource); 2] {
	[QUESTIONS_FILE, POPULAR_FILE]
		.map(|file_name| (file_name, dataset_source(None, data_dir, file_name)))
}

/// A configured path wins; otherwise a file named `file_name` in the data
/// directory, if present; otherwise the bundled dataset.
fn dataset_source(
	configured: Option<PathBuf>,
	data_dir: Option<&Path>,
	file_name: &str,
) -> DatasetSource {
	if let Some(path) = configured {
		return DatasetSource::File(path);
	}
	match data_dir.map(|dir| dir.join(file_name)) {
		Some(path) if path.is_file() => DatasetSource::File(path),
		_ => DatasetSource::Bundled,
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
