use anyhow::Result;
use faqz_core::{Dataset, FoldMode, PopularQuestions};

use crate::App;
use crate::config::UiLabels;
use crate::outcome::SearchOutcome;
use crate::style::{self, Theme};

/// A small builder for configuring the FAQ search UI before running it.
pub struct FaqUi {
	questions: Dataset,
	popular: Dataset,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	fold: FoldMode,
	initial_query: String,
	collapse_popular: bool,
}

impl FaqUi {
	/// Create a UI searching `questions`, with `popular` listed alongside.
	pub fn new(questions: Dataset, popular: Dataset) -> Self {
		Self {
			questions,
			popular,
			labels: None,
			theme: None,
			fold: FoldMode::default(),
			initial_query: String::new(),
			collapse_popular: false,
		}
	}

	/// Create a UI over the datasets bundled with `faqz-core`.
	pub fn bundled() -> Result<Self> {
		Ok(Self::new(
			Dataset::bundled_questions()?,
			Dataset::bundled_popular()?,
		))
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Select a built-in theme by name. Unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}', keeping the default"),
		}
		self
	}

	pub fn with_fold(mut self, fold: FoldMode) -> Self {
		self.fold = fold;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Show popular answers only for the entry the user opens.
	pub fn with_collapsed_popular(mut self, collapsed: bool) -> Self {
		self.collapse_popular = collapsed;
		self
	}

	/// Build the [`App`] without running it.
	pub fn into_app(self) -> App<'static> {
		let popular = if self.collapse_popular {
			PopularQuestions::collapsed(self.popular)
		} else {
			PopularQuestions::new(self.popular)
		};
		let mut app = App::new(self.questions, popular, self.fold);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_initial_query(&self.initial_query);
		app
	}

	/// Run the interactive UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.into_app().run()
	}
}
