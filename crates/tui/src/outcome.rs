use faqz_core::QaRecord;
use serde::Serialize;

/// What the session ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// Text in the search box at exit.
	pub query: String,
	/// The answer on display at exit, if one was selected.
	pub answer: Option<String>,
	/// Search history at exit, most recent first.
	pub history: Vec<QaRecord>,
}
