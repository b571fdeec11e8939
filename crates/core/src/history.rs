use crate::record::QaRecord;

/// Maximum number of records kept in the search history.
pub const HISTORY_LIMIT: usize = 10;

/// Most-recent-first list of selected records, unique by question and never
/// longer than [`HISTORY_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
	entries: Vec<QaRecord>,
}

impl SearchHistory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Move `record` to the front, dropping any older entry with the same
	/// question and anything past the limit.
	pub fn record(&mut self, record: QaRecord) {
		self.entries.retain(|entry| entry.q != record.q);
		self.entries.insert(0, record);
		self.entries.truncate(HISTORY_LIMIT);
	}

	/// Remove the entry for `q`. Returns whether anything was removed.
	pub fn remove(&mut self, q: &str) -> bool {
		let before = self.entries.len();
		self.entries.retain(|entry| entry.q != q);
		self.entries.len() != before
	}

	pub fn contains(&self, q: &str) -> bool {
		self.entries.iter().any(|entry| entry.q == q)
	}

	pub fn as_slice(&self) -> &[QaRecord] {
		&self.entries
	}

	pub fn to_vec(&self) -> Vec<QaRecord> {
		self.entries.clone()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, QaRecord> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(n: usize) -> QaRecord {
		QaRecord::new(format!("question {n}"), format!("answer {n}"))
	}

	fn questions(history: &SearchHistory) -> Vec<&str> {
		history.iter().map(|entry| entry.q.as_str()).collect()
	}

	#[test]
	fn newest_entry_comes_first() {
		let mut history = SearchHistory::new();
		history.record(record(1));
		history.record(record(2));
		assert_eq!(questions(&history), ["question 2", "question 1"]);
	}

	#[test]
	fn repeated_question_moves_to_front_without_growing() {
		let mut history = SearchHistory::new();
		history.record(record(1));
		history.record(record(2));
		history.record(record(3));
		history.record(record(1));
		assert_eq!(history.len(), 3);
		assert_eq!(questions(&history), ["question 1", "question 3", "question 2"]);
	}

	#[test]
	fn repeated_question_replaces_stale_answer() {
		let mut history = SearchHistory::new();
		history.record(QaRecord::new("q", "old"));
		history.record(QaRecord::new("q", "new"));
		assert_eq!(history.as_slice(), [QaRecord::new("q", "new")]);
	}

	#[test]
	fn never_exceeds_limit() {
		let mut history = SearchHistory::new();
		for n in 1..=HISTORY_LIMIT + 1 {
			history.record(record(n));
		}
		assert_eq!(history.len(), HISTORY_LIMIT);
		assert!(!history.contains("question 1"));
		assert_eq!(history.as_slice()[0], record(HISTORY_LIMIT + 1));
	}

	#[test]
	fn removal_preserves_order_of_the_rest() {
		let mut history = SearchHistory::new();
		for n in 1..=5 {
			history.record(record(n));
		}
		assert!(history.remove("question 3"));
		assert_eq!(
			questions(&history),
			["question 5", "question 4", "question 2", "question 1"]
		);
		assert!(!history.remove("question 3"));
	}
}
