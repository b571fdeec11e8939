use ratatui::style::{Color, Style};

/// Styles for the UI elements of the search widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders and panel titles.
	pub header: Style,
	/// The highlighted dropdown or popular-list row.
	pub row_highlight: Style,
	/// The prompt glyph and the clear button.
	pub prompt: Style,
	/// Placeholder text, answers in the popular list and other muted text.
	pub empty: Style,
	/// Emphasis, such as the history marker on dropdown rows.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}
}

/// A built-in theme together with the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, aliases: &'static [&'static str], theme: Theme) -> Self {
		Self {
			name,
			aliases,
			theme,
		}
	}

	fn answers_to(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.contains(&normalized)
	}
}

pub(super) fn lookup<'a>(
	definitions: &'a [ThemeDefinition],
	name: &str,
) -> Option<&'a ThemeDefinition> {
	let normalized = normalize_name(name);
	definitions
		.iter()
		.find(|definition| definition.answers_to(&normalized))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}
