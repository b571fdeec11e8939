use anyhow::{Context, Result};
use faqz_core::{Dataset, DatasetError};
use faqz_tui::{FaqUi, SearchOutcome};

use crate::settings::{DatasetSource, ResolvedConfig};

/// Coordinates loading the datasets and running the interactive search.
pub(crate) struct SearchWorkflow {
	ui: FaqUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			questions,
			popular,
			fold,
			initial_query,
			theme,
			labels,
			collapse_popular,
			log_level: _,
		} = config;

		let questions = load_dataset(&questions, Dataset::bundled_questions)
			.context("failed to load questions")?;
		let popular = load_dataset(&popular, Dataset::bundled_popular)
			.context("failed to load popular questions")?;

		let ui = FaqUi::new(questions, popular)
			.with_labels(labels)
			.with_theme_name(&theme)
			.with_fold(fold)
			.with_initial_query(initial_query)
			.with_collapsed_popular(collapse_popular);
		Ok(Self { ui })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.ui.run()
	}
}

fn load_dataset(
	source: &DatasetSource,
	bundled: fn() -> Result<Dataset, DatasetError>,
) -> Result<Dataset, DatasetError> {
	let dataset = match source {
		DatasetSource::Bundled => bundled()?,
		DatasetSource::File(path) => Dataset::from_path(path)?,
	};
	log::info!("loaded {} records from {source}", dataset.len());
	Ok(dataset)
}
