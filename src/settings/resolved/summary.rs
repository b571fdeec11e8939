use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Questions: {}", config.questions);
	let _ = writeln!(out, "  Popular questions: {}", config.popular);
	let _ = writeln!(out, "  Fold: {}", config.fold);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	let _ = writeln!(out, "  Placeholder: {}", config.labels.placeholder);
	let _ = writeln!(out, "  Answer title: {}", config.labels.answer_title);
	let _ = writeln!(out, "  Popular title: {}", config.labels.popular_title);
	let _ = writeln!(
		out,
		"  Popular answers: {}",
		if config.collapse_popular {
			"on demand"
		} else {
			"always shown"
		}
	);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}
