//! Immutable question/answer datasets.
//!
//! A [`Dataset`] is loaded once and shared for the lifetime of the process.
//! Two datasets ship with the crate: the searchable questions and the
//! "popular questions" list rendered beside the search box.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::DatasetError;
use crate::record::QaRecord;

const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");
const BUNDLED_POPULAR: &str = include_str!("../data/popular_questions.json");

/// Ordered, read-only sequence of [`QaRecord`]s. Cloning shares the records.
#[derive(Debug, Clone)]
pub struct Dataset {
	records: Arc<[QaRecord]>,
}

impl Default for Dataset {
	fn default() -> Self {
		Self {
			records: Arc::from(Vec::new()),
		}
	}
}

impl From<Vec<QaRecord>> for Dataset {
	fn from(records: Vec<QaRecord>) -> Self {
		Self {
			records: Arc::from(records),
		}
	}
}

impl Dataset {
	pub fn new(records: Vec<QaRecord>) -> Self {
		Self::from(records)
	}

	/// The searchable questions compiled into the crate.
	pub fn bundled_questions() -> Result<Self, DatasetError> {
		Self::from_json_str("bundled questions", BUNDLED_QUESTIONS)
	}

	/// The popular questions compiled into the crate.
	pub fn bundled_popular() -> Result<Self, DatasetError> {
		Self::from_json_str("bundled popular questions", BUNDLED_POPULAR)
	}

	/// Parse a JSON array of `{ "q": ..., "a": ... }` objects.
	///
	/// `origin` only labels errors and log lines.
	pub fn from_json_str(origin: &str, json: &str) -> Result<Self, DatasetError> {
		let records: Vec<QaRecord> =
			serde_json::from_str(json).map_err(|source| DatasetError::Parse {
				origin: origin.to_string(),
				source,
			})?;
		validate(origin, &records)?;
		log::info!("loaded {} records from {origin}", records.len());
		Ok(Self::from(records))
	}

	pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
		let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&path.display().to_string(), &json)
	}

	pub fn records(&self) -> &[QaRecord] {
		&self.records
	}

	pub fn iter(&self) -> std::slice::Iter<'_, QaRecord> {
		self.records.iter()
	}

	pub fn get(&self, index: usize) -> Option<&QaRecord> {
		self.records.get(index)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a> IntoIterator for &'a Dataset {
	type Item = &'a QaRecord;
	type IntoIter = std::slice::Iter<'a, QaRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Reject blank questions. Duplicate questions are kept but reported, since
/// history de-duplication treats records with the same `q` as one entry.
fn validate(origin: &str, records: &[QaRecord]) -> Result<(), DatasetError> {
	let mut seen = HashSet::with_capacity(records.len());
	for (index, record) in records.iter().enumerate() {
		if record.q.trim().is_empty() {
			return Err(DatasetError::EmptyQuestion {
				origin: origin.to_string(),
				index,
			});
		}
		if !seen.insert(record.q.as_str()) {
			log::warn!("duplicate question at index {index} in {origin}: {}", record.q);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn bundled_datasets_parse() {
		let questions = Dataset::bundled_questions().expect("bundled questions");
		let popular = Dataset::bundled_popular().expect("bundled popular");
		assert!(!questions.is_empty());
		assert!(!popular.is_empty());
		assert_eq!(questions.records()[1].q, "كيف أسجل؟");
	}

	#[test]
	fn preserves_source_order() {
		let data = Dataset::from_json_str(
			"inline",
			r#"[{"q":"b","a":"2"},{"q":"a","a":"1"},{"q":"c","a":"3"}]"#,
		)
		.expect("parse");
		let questions: Vec<&str> = data.iter().map(|record| record.q.as_str()).collect();
		assert_eq!(questions, ["b", "a", "c"]);
	}

	#[test]
	fn keeps_duplicate_questions() {
		let data = Dataset::from_json_str(
			"inline",
			r#"[{"q":"same","a":"first"},{"q":"same","a":"second"}]"#,
		)
		.expect("parse");
		assert_eq!(data.len(), 2);
	}

	#[test]
	fn rejects_blank_questions() {
		let err = Dataset::from_json_str("inline", r#"[{"q":"ok","a":"x"},{"q":"  ","a":"y"}]"#)
			.expect_err("blank question");
		assert!(matches!(err, DatasetError::EmptyQuestion { index: 1, .. }));
	}

	#[test]
	fn reports_malformed_json() {
		let err = Dataset::from_json_str("inline", r#"[{"q":"missing answer"}]"#)
			.expect_err("missing field");
		assert!(matches!(err, DatasetError::Parse { .. }));
		assert!(err.to_string().contains("inline"));
	}

	#[test]
	fn loads_from_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		write!(file, r#"[{{"q":"كيف أسجل؟","a":"عبر الموقع"}}]"#).expect("write");

		let data = Dataset::from_path(file.path()).expect("load");
		assert_eq!(data.get(0), Some(&QaRecord::new("كيف أسجل؟", "عبر الموقع")));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().expect("temp dir");
		let err = Dataset::from_path(&dir.path().join("absent.json")).expect_err("missing");
		assert!(matches!(err, DatasetError::Io { .. }));
	}

	#[test]
	fn clones_share_records() {
		let data = Dataset::new(vec![QaRecord::new("q", "a")]);
		let copy = data.clone();
		assert!(std::ptr::eq(data.records(), copy.records()));
	}
}
