//! Text folding applied to both the query and each question before matching.
//!
//! Matching is always plain substring containment over folded text. The fold
//! only decides which spellings are considered equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How query and question text are normalised before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldMode {
	/// Unicode default lower-casing. Locale independent, so no
	/// language-specific casing rules (such as Turkish dotted I) apply.
	/// Scripts without case, Arabic included, pass through unchanged.
	#[default]
	Unicode,
	/// Unicode lower-casing plus Arabic orthographic normalisation: diacritics
	/// are dropped, hamza-carrying alef forms become bare alef, alef maqsura
	/// becomes yaa, taa marbuta becomes haa, punctuation is removed and
	/// whitespace runs collapse.
	Arabic,
}

#[derive(Debug, Error)]
#[error("unknown fold mode '{0}' (expected one of: unicode, arabic)")]
pub struct UnknownFoldMode(pub String);

impl FoldMode {
	pub const ALL: [FoldMode; 2] = [FoldMode::Unicode, FoldMode::Arabic];

	pub fn name(self) -> &'static str {
		match self {
			FoldMode::Unicode => "unicode",
			FoldMode::Arabic => "arabic",
		}
	}

	pub fn fold(self, text: &str) -> String {
		match self {
			FoldMode::Unicode => text.to_lowercase(),
			FoldMode::Arabic => fold_arabic(text),
		}
	}
}

impl fmt::Display for FoldMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for FoldMode {
	type Err = UnknownFoldMode;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|mode| mode.name() == normalized)
			.ok_or_else(|| UnknownFoldMode(value.to_string()))
	}
}

/// A query folded once and tested against many candidates.
#[derive(Debug, Clone)]
pub struct Matcher {
	needle: String,
	mode: FoldMode,
}

impl Matcher {
	pub fn new(query: &str, mode: FoldMode) -> Self {
		Self {
			needle: mode.fold(query),
			mode,
		}
	}

	pub fn matches(&self, haystack: &str) -> bool {
		self.mode.fold(haystack).contains(&self.needle)
	}
}

// Tashkeel and Quranic annotation marks.
fn is_arabic_diacritic(ch: char) -> bool {
	matches!(ch, '\u{0617}'..='\u{061A}' | '\u{064B}'..='\u{0652}')
}

fn fold_arabic(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut pending_space = false;

	for ch in text.chars() {
		if is_arabic_diacritic(ch) {
			continue;
		}
		if ch.is_whitespace() {
			pending_space = !out.is_empty();
			continue;
		}
		// Punctuation (، ؟ . and the like) is dropped without leaving a gap.
		if !ch.is_alphanumeric() && ch != '_' {
			continue;
		}
		if pending_space {
			out.push(' ');
			pending_space = false;
		}
		match ch {
			'أ' | 'إ' | 'آ' => out.push('ا'),
			'ى' => out.push('ي'),
			'ة' => out.push('ه'),
			other => out.extend(other.to_lowercase()),
		}
	}

	out
}
