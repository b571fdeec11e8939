use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve(cli)?)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use faqz_core::FoldMode;
	use log::LevelFilter;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_files_layer_in_order_and_cli_wins() {
		let dir = tempdir().expect("tempdir");
		let base = dir.path().join("base.toml");
		let local = dir.path().join("local.toml");
		fs::write(
			&base,
			"[search]\nfold = \"arabic\"\ninitial_query = \"base\"\n\n[ui]\ntheme = \"light\"\n",
		)
		.expect("write base");
		fs::write(&local, "[search]\ninitial_query = \"local\"\n").expect("write local");

		let cli = CliArgs::parse_from([
			"faqz",
			"--no-config",
			"--config",
			base.to_str().expect("utf-8 path"),
			"--config",
			local.to_str().expect("utf-8 path"),
			"--theme",
			"solarized",
		]);
		let config = load(&cli).expect("load");

		assert_eq!(config.fold, FoldMode::Arabic);
		assert_eq!(config.initial_query, "local");
		assert_eq!(config.theme, "solarized");
		assert_eq!(config.log_level, LevelFilter::Info);
	}

	#[test]
	fn collapse_popular_is_read_from_the_ui_section() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("faqz.toml");
		fs::write(&path, "[ui]\ncollapse_popular = true\n").expect("write");

		let cli = CliArgs::parse_from([
			"faqz",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let config = load(&cli).expect("load");
		assert!(config.collapse_popular);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("missing.toml");
		let cli = CliArgs::parse_from([
			"faqz",
			"--no-config",
			"--config",
			missing.to_str().expect("utf-8 path"),
		]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_values_name_their_key() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("bad.toml");
		fs::write(&path, "[logging]\nlevel = \"chatty\"\n").expect("write");

		let cli = CliArgs::parse_from([
			"faqz",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let err = load(&cli).expect_err("invalid level");
		let message = err.to_string();
		assert!(message.contains("logging.level"));
		assert!(message.contains("chatty"));
	}
}
