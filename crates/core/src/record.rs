use serde::{Deserialize, Serialize};

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaRecord {
	/// Question text, used as the record's identity in the search history.
	pub q: String,
	/// Answer shown once the question is selected.
	pub a: String,
}

impl QaRecord {
	pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			a: a.into(),
		}
	}
}
