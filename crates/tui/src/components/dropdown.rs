use faqz_core::DropdownRow;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_truncate::UnicodeTruncateStr;

use super::row_of;
use crate::style::Theme;

pub const HISTORY_MARKER: &str = "◷ ";
pub const REMOVE_SYMBOL: &str = "✕";

const MARKER_WIDTH: u16 = 2;
const REMOVE_WIDTH: u16 = 2;

pub struct DropdownContext<'a> {
	pub rows: &'a [DropdownRow<'a>],
	/// Index of the keyboard-highlighted row.
	pub highlight: Option<usize>,
	pub title: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Screen positions of the rendered rows, keyed by filtered index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownHits {
	pub rows: Vec<(Rect, usize)>,
	pub remove_buttons: Vec<(Rect, usize)>,
}

/// Rows plus borders. Zero when there is nothing to show.
pub fn dropdown_height(rows: usize) -> u16 {
	if rows == 0 {
		0
	} else {
		u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
	}
}

pub fn render_dropdown(frame: &mut Frame, context: DropdownContext<'_>) -> DropdownHits {
	let DropdownContext {
		rows,
		highlight,
		title,
		area,
		theme,
	} = context;

	let mut hits = DropdownHits::default();
	if rows.is_empty() || area.height == 0 {
		return hits;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	for (offset, row) in rows.iter().enumerate() {
		let Some(row_area) = u16::try_from(offset).ok().and_then(|offset| row_of(inner, offset))
		else {
			break;
		};

		let highlighted = highlight == Some(row.index);
		let row_style = if highlighted {
			theme.row_highlight
		} else {
			Style::default()
		};

		let reserved = MARKER_WIDTH + if row.in_history { REMOVE_WIDTH } else { 0 };
		let text_width = usize::from(row_area.width.saturating_sub(reserved));
		let (question, _) = row.record.q.unicode_truncate(text_width);

		let marker = if row.in_history {
			Span::styled(HISTORY_MARKER, theme.highlight)
		} else {
			Span::raw("  ")
		};
		let line = Line::from(vec![marker, Span::raw(question.to_string())]);
		frame.render_widget(Paragraph::new(line).style(row_style), row_area);
		hits.rows.push((row_area, row.index));

		if row.in_history && row_area.width > reserved {
			let button = Rect {
				x: row_area.right().saturating_sub(1),
				width: 1,
				..row_area
			};
			frame.buffer_mut().set_line(
				button.x,
				button.y,
				&Line::from(Span::styled(REMOVE_SYMBOL, theme.prompt)),
				1,
			);
			hits.remove_buttons.push((button, row.index));
		}
	}

	hits
}
