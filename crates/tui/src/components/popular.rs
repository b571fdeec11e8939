use faqz_core::PopularQuestions;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_truncate::UnicodeTruncateStr;

use super::{row_of, wrap_to_width};
use crate::style::Theme;

const BULLET: &str = "• ";
const BULLET_WIDTH: usize = 2;
const ANSWER_INDENT: &str = "  ";

pub struct PopularContext<'a> {
	pub popular: &'a PopularQuestions,
	/// Row highlighted while the list has focus.
	pub selected: Option<usize>,
	pub title: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render every popular question, each followed by its answer when visible.
/// Returns the screen row of each question that fit.
pub fn render_popular(frame: &mut Frame, context: PopularContext<'_>) -> Vec<(Rect, usize)> {
	let PopularContext {
		popular,
		selected,
		title,
		area,
		theme,
	} = context;

	let mut hits = Vec::new();
	if area.width == 0 || area.height == 0 {
		return hits;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let text_width = usize::from(inner.width).saturating_sub(BULLET_WIDTH);
	let mut offset: u16 = 0;

	for (index, record) in popular.records().iter().enumerate() {
		let Some(row_area) = row_of(inner, offset) else {
			break;
		};
		let style = if selected == Some(index) {
			theme.row_highlight
		} else {
			Style::default()
		};
		let (question, _) = record.q.unicode_truncate(text_width);
		let line = Line::from(vec![
			Span::styled(BULLET, theme.prompt),
			Span::raw(question.to_string()),
		]);
		frame.render_widget(Paragraph::new(line).style(style), row_area);
		hits.push((row_area, index));
		offset = offset.saturating_add(1);

		if !popular.answer_visible(index) {
			continue;
		}
		for answer_line in wrap_to_width(&record.a, text_width) {
			let Some(row_area) = row_of(inner, offset) else {
				break;
			};
			let line = Line::from(vec![
				Span::raw(ANSWER_INDENT),
				Span::styled(answer_line, theme.empty_style()),
			]);
			frame.render_widget(Paragraph::new(line), row_area);
			offset = offset.saturating_add(1);
		}
	}

	hits
}
