use anyhow::Result;
use faqz_tui::SearchOutcome;

/// Render the plain-text form of the outcome: the selected answer, or a note
/// that nothing was selected.
pub(crate) fn format_plain(outcome: &SearchOutcome) -> String {
	match &outcome.answer {
		Some(answer) => answer.clone(),
		None => format!("No selection (query: '{}')", outcome.query),
	}
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
