use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading a question dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to read dataset {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse dataset {origin}: {source}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("record {index} in {origin} has an empty question")]
	EmptyQuestion { origin: String, index: usize },
}
