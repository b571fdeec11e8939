use crate::dataset::Dataset;
use crate::record::QaRecord;

/// The static "popular questions" list shown next to the search box.
///
/// It is never filtered. By default every answer is shown; with
/// [`PopularQuestions::collapsed`] only the toggled entry reveals its answer.
#[derive(Debug, Clone)]
pub struct PopularQuestions {
	dataset: Dataset,
	expanded: Option<usize>,
	show_all_answers: bool,
}

impl PopularQuestions {
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			expanded: None,
			show_all_answers: true,
		}
	}

	pub fn collapsed(dataset: Dataset) -> Self {
		Self {
			show_all_answers: false,
			..Self::new(dataset)
		}
	}

	pub fn records(&self) -> &[QaRecord] {
		self.dataset.records()
	}

	pub fn len(&self) -> usize {
		self.dataset.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dataset.is_empty()
	}

	pub fn expanded(&self) -> Option<usize> {
		self.expanded
	}

	/// Open `index`, or close it if it is already open. Out of range indices
	/// are ignored. Returns whether `index` is open afterwards.
	pub fn toggle(&mut self, index: usize) -> bool {
		if index >= self.dataset.len() {
			return false;
		}
		if self.expanded == Some(index) {
			self.expanded = None;
			false
		} else {
			self.expanded = Some(index);
			true
		}
	}

	pub fn answer_visible(&self, index: usize) -> bool {
		self.show_all_answers || self.expanded == Some(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn popular() -> PopularQuestions {
		PopularQuestions::collapsed(Dataset::new(vec![
			QaRecord::new("one", "1"),
			QaRecord::new("two", "2"),
		]))
	}

	#[test]
	fn toggle_opens_then_closes() {
		let mut list = popular();
		assert!(list.toggle(0));
		assert_eq!(list.expanded(), Some(0));
		assert!(!list.toggle(0));
		assert_eq!(list.expanded(), None);
	}

	#[test]
	fn opening_another_entry_closes_the_first() {
		let mut list = popular();
		list.toggle(0);
		assert!(list.toggle(1));
		assert!(!list.answer_visible(0));
		assert!(list.answer_visible(1));
	}

	#[test]
	fn out_of_range_toggle_is_ignored() {
		let mut list = popular();
		list.toggle(1);
		assert!(!list.toggle(5));
		assert_eq!(list.expanded(), Some(1));
	}

	#[test]
	fn default_shows_every_answer() {
		let list = PopularQuestions::new(Dataset::new(vec![QaRecord::new("q", "a")]));
		assert!(list.answer_visible(0));
	}
}
