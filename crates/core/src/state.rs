//! The search component's state machine.
//!
//! [`SearchState`] is created empty when the component mounts and is mutated
//! only through the transition methods below, one per user interaction. Each
//! transition is synchronous and runs to completion before the next one.

use crate::dataset::Dataset;
use crate::fold::{FoldMode, Matcher};
use crate::history::SearchHistory;
use crate::record::QaRecord;

/// Maximum number of rows the results dropdown shows.
pub const RESULT_LIMIT: usize = 15;

/// A user interaction, for callers that prefer dispatching events to calling
/// the transition methods directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
	TextChanged(String),
	Submit,
	ResultClicked(QaRecord),
	HistoryRemoved(String),
	Focus,
	Clear,
	OutsideInteraction,
}

/// One row of the results dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownRow<'a> {
	/// Position within the filtered set.
	pub index: usize,
	pub record: &'a QaRecord,
	/// Whether the record is also in the history. History rows get a marker
	/// and a removal affordance.
	pub in_history: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
	query: String,
	filtered: Vec<QaRecord>,
	selected_answer: String,
	history: SearchHistory,
	list_visible: bool,
	fold: FoldMode,
}

impl SearchState {
	pub fn new(fold: FoldMode) -> Self {
		Self {
			fold,
			..Self::default()
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn filtered(&self) -> &[QaRecord] {
		&self.filtered
	}

	pub fn selected_answer(&self) -> &str {
		&self.selected_answer
	}

	/// The selected answer, if any.
	pub fn answer(&self) -> Option<&str> {
		(!self.selected_answer.is_empty()).then_some(self.selected_answer.as_str())
	}

	pub fn history(&self) -> &SearchHistory {
		&self.history
	}

	pub fn list_visible(&self) -> bool {
		self.list_visible
	}

	pub fn fold(&self) -> FoldMode {
		self.fold
	}

	/// The clear affordance is only offered while there is text to clear.
	pub fn can_clear(&self) -> bool {
		!self.query.is_empty()
	}

	pub fn apply(&mut self, dataset: &Dataset, interaction: Interaction) {
		match interaction {
			Interaction::TextChanged(text) => self.on_text_change(dataset, text),
			Interaction::Submit => self.on_submit(dataset),
			Interaction::ResultClicked(record) => self.on_result_click(record),
			Interaction::HistoryRemoved(q) => self.on_history_remove(&q),
			Interaction::Focus => self.on_focus(),
			Interaction::Clear => self.on_clear(),
			Interaction::OutsideInteraction => self.on_outside_interaction(),
		}
	}

	pub fn on_text_change(&mut self, dataset: &Dataset, text: impl Into<String>) {
		self.query = text.into();
		self.selected_answer.clear();
		self.filtered = if self.query.is_empty() {
			self.history.to_vec()
		} else {
			filter_records(dataset, &self.query, self.fold)
		};
		self.list_visible = true;
		log::trace!(
			"query changed to {:?}: {} results",
			self.query,
			self.filtered.len()
		);
	}

	/// Re-run the filter for the current query without touching visibility or
	/// the selected answer. An empty query matches every record.
	pub fn on_submit(&mut self, dataset: &Dataset) {
		self.filtered = filter_records(dataset, &self.query, self.fold);
		log::debug!(
			"submitted {:?}: {} results",
			self.query,
			self.filtered.len()
		);
	}

	/// Select `record`: show its answer, empty the dropdown and move it to the
	/// front of the history. `list_visible` is left as it was; with nothing
	/// filtered the dropdown renders nothing.
	pub fn on_result_click(&mut self, record: QaRecord) {
		log::debug!("selected {:?}", record.q);
		self.query = record.q.clone();
		self.selected_answer = record.a.clone();
		self.filtered.clear();
		self.history.record(record);
	}

	/// Drop `q` from the history. The filtered set and query are untouched.
	pub fn on_history_remove(&mut self, q: &str) {
		if self.history.remove(q) {
			log::debug!("removed {q:?} from history");
		}
	}

	pub fn on_focus(&mut self) {
		if self.query.is_empty() {
			self.filtered = self.history.to_vec();
			self.list_visible = true;
		}
	}

	pub fn on_clear(&mut self) {
		self.query.clear();
		self.selected_answer.clear();
		self.filtered = self.history.to_vec();
		self.list_visible = true;
	}

	pub fn on_outside_interaction(&mut self) {
		self.list_visible = false;
	}

	/// Rows the dropdown should render: nothing while hidden or empty,
	/// otherwise the first [`RESULT_LIMIT`] filtered records.
	pub fn dropdown_rows(&self) -> Vec<DropdownRow<'_>> {
		if !self.list_visible {
			return Vec::new();
		}
		self.filtered
			.iter()
			.take(RESULT_LIMIT)
			.enumerate()
			.map(|(index, record)| DropdownRow {
				index,
				record,
				in_history: self.history.contains(&record.q),
			})
			.collect()
	}
}

/// Every record whose folded question contains the folded query, in dataset
/// order.
pub fn filter_records(dataset: &Dataset, query: &str, fold: FoldMode) -> Vec<QaRecord> {
	let matcher = Matcher::new(query, fold);
	dataset
		.iter()
		.filter(|record| matcher.matches(&record.q))
		.cloned()
		.collect()
}
