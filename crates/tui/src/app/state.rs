//! Core state container for the terminal application.

use faqz_core::{Dataset, FoldMode, PopularQuestions, SearchState};
use ratatui::layout::Rect;

use crate::components::{DropdownHits, LogPane, point_in_rect};
use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::outcome::SearchOutcome;
use crate::style::Theme;

/// Which part of the UI receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	/// The search input.
	Search,
	/// The popular-questions list.
	Popular,
	/// The log pane, while it is shown.
	Logs,
	/// Nothing; the input was blurred by a click elsewhere.
	Idle,
}

/// Screen areas recorded by the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitRegions {
	/// Bounds of the search component: input row, dropdown and answer panel.
	pub component: Vec<Rect>,
	pub input: Option<Rect>,
	pub clear_button: Option<Rect>,
	pub dropdown: DropdownHits,
	pub popular: Vec<(Rect, usize)>,
}

impl HitRegions {
	pub(crate) fn in_component(&self, column: u16, row: u16) -> bool {
		self.component
			.iter()
			.any(|area| point_in_rect(column, row, *area))
	}

	pub(crate) fn hit(targets: &[(Rect, usize)], column: u16, row: u16) -> Option<usize> {
		targets
			.iter()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, index)| *index)
	}
}

/// Aggregate state shared across the terminal UI.
///
/// The search component's state lives in [`SearchState`]; everything here is
/// presentation: the text editor, focus, keyboard highlight, and the screen
/// regions from the last frame.
pub struct App<'a> {
	/// Searchable questions.
	pub questions: Dataset,
	/// The search component's state machine.
	pub state: SearchState,
	/// The static popular-questions list.
	pub popular: PopularQuestions,
	/// Text input widget mirroring `state.query()`.
	pub search_input: SearchInput<'a>,
	pub theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) focus: Focus,
	/// Keyboard-highlighted dropdown row, as an index into the filtered set.
	pub(crate) highlight: Option<usize>,
	pub(crate) popular_selected: Option<usize>,
	pub(crate) logs: LogPane,
	pub(crate) regions: HitRegions,
}

impl<'a> App<'a> {
	/// Mount the search component with the input focused.
	pub fn new(questions: Dataset, popular: PopularQuestions, fold: FoldMode) -> Self {
		let mut app = Self {
			questions,
			state: SearchState::new(fold),
			popular,
			search_input: SearchInput::new(""),
			theme: Theme::default(),
			labels: UiLabels::default(),
			focus: Focus::Idle,
			highlight: None,
			popular_selected: None,
			logs: LogPane::new(),
			regions: HitRegions::default(),
		};
		app.set_focus(Focus::Search);
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	/// Type `query` into the input as if the user had entered it.
	pub fn set_initial_query(&mut self, query: &str) {
		if query.is_empty() {
			return;
		}
		self.search_input.set_text(query);
		self.text_changed();
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn outcome(&self) -> SearchOutcome {
		SearchOutcome {
			query: self.state.query().to_string(),
			answer: self.state.answer().map(str::to_string),
			history: self.state.history().to_vec(),
		}
	}

	/// Move focus, firing the component's focus transition when the search
	/// input gains it.
	pub(crate) fn set_focus(&mut self, focus: Focus) {
		if self.focus == focus {
			return;
		}
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
		match focus {
			Focus::Search => {
				self.state.on_focus();
				self.highlight = None;
			}
			Focus::Popular => {
				if self.popular_selected.is_none() && !self.popular.is_empty() {
					self.popular_selected = Some(0);
				}
			}
			Focus::Logs | Focus::Idle => {}
		}
	}

	pub(crate) fn text_changed(&mut self) {
		let text = self.search_input.text().to_string();
		self.state.on_text_change(&self.questions, text);
		self.highlight = None;
	}

	pub(crate) fn submit(&mut self) {
		self.state.on_submit(&self.questions);
		self.highlight = None;
	}

	pub(crate) fn click_result(&mut self, index: usize) {
		let Some(record) = self.state.filtered().get(index).cloned() else {
			return;
		};
		self.state.on_result_click(record);
		self.search_input.set_text(self.state.query());
		self.highlight = None;
	}

	/// Remove the filtered record at `index` from the history, if it is there.
	pub(crate) fn remove_history_at(&mut self, index: usize) {
		let Some(q) = self
			.state
			.filtered()
			.get(index)
			.filter(|record| self.state.history().contains(&record.q))
			.map(|record| record.q.clone())
		else {
			return;
		};
		self.state.on_history_remove(&q);
	}

	pub(crate) fn clear(&mut self) {
		if !self.state.can_clear() {
			return;
		}
		self.state.on_clear();
		self.search_input.set_text("");
		self.highlight = None;
	}

	pub(crate) fn outside_interaction(&mut self) {
		self.state.on_outside_interaction();
		self.highlight = None;
	}

	pub(crate) fn dropdown_len(&self) -> usize {
		self.state.dropdown_rows().len()
	}

	pub(crate) fn toggle_logs(&mut self) {
		self.logs.toggle();
		if !self.logs.is_visible() && self.focus == Focus::Logs {
			self.set_focus(Focus::Search);
		}
	}
}
