use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::wrap_to_width;
use crate::style::Theme;

const MAX_ANSWER_LINES: usize = 8;

pub struct AnswerContext<'a> {
	pub title: &'a str,
	pub answer: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Height of the answer panel, borders included, for an outer `width`.
pub fn answer_height(answer: &str, width: u16) -> u16 {
	let inner_width = usize::from(width.saturating_sub(2));
	let lines = wrap_to_width(answer, inner_width)
		.len()
		.clamp(1, MAX_ANSWER_LINES);
	u16::try_from(lines).unwrap_or(1) + 2
}

pub fn render_answer(frame: &mut Frame, context: AnswerContext<'_>) {
	let AnswerContext {
		title,
		answer,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Line::from(title.to_string()).style(theme.highlight));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let lines: Vec<Line> = wrap_to_width(answer, usize::from(inner.width))
		.into_iter()
		.map(Line::from)
		.collect();
	frame.render_widget(Paragraph::new(lines), inner);
}
