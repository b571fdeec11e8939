mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

/// Every built-in theme, default first.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	&builtins::DEFINITIONS
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	definitions().iter().map(|definition| definition.name).collect()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::lookup(definitions(), name).map(|definition| definition.theme)
}

#[must_use]
pub fn default_theme() -> Theme {
	builtins::DEFINITIONS[0].theme
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Solarized"), Some(SOLARIZED));
		assert_eq!(by_name("solarized_dark"), Some(SOLARIZED));
		assert_eq!(by_name(" DAY "), Some(LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn default_is_listed_first() {
		assert_eq!(names().first(), Some(&"slate"));
		assert_eq!(Theme::default(), SLATE);
	}
}
