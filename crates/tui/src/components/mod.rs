//! UI building blocks shared across rendering and state modules.

/// Selected answer panel.
pub mod answer;
/// Results dropdown under the search input.
pub mod dropdown;
/// Runtime log pane.
pub mod logs;
/// Popular questions panel.
pub mod popular;
/// Input prompt and clear button.
pub mod prompt;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use answer::{AnswerContext, answer_height, render_answer};
pub use dropdown::{DropdownContext, DropdownHits, dropdown_height, render_dropdown};
pub use logs::LogPane;
pub use popular::{PopularContext, render_popular};
pub use prompt::{InputContext, InputLayout, render_input};

/// Whether the terminal cell at `column`, `row` lies inside `area`.
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Greedy word wrap by display width. Words wider than `width` are broken
/// between characters.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
	if width == 0 {
		return Vec::new();
	}

	let mut lines = Vec::new();
	let mut current = String::new();
	let mut current_width = 0;

	for word in text.split_whitespace() {
		let word_width = word.width();
		let needed = if current.is_empty() {
			word_width
		} else {
			current_width + 1 + word_width
		};
		if needed <= width {
			if !current.is_empty() {
				current.push(' ');
				current_width += 1;
			}
			current.push_str(word);
			current_width += word_width;
			continue;
		}

		if !current.is_empty() {
			lines.push(std::mem::take(&mut current));
			current_width = 0;
		}
		for ch in word.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if current_width + ch_width > width && !current.is_empty() {
				lines.push(std::mem::take(&mut current));
				current_width = 0;
			}
			current.push(ch);
			current_width += ch_width;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

/// A one-row strip of `area` at `offset` rows from its top, if it fits.
pub(crate) fn row_of(area: Rect, offset: u16) -> Option<Rect> {
	if offset >= area.height {
		return None;
	}
	Some(Rect {
		x: area.x,
		y: area.y + offset,
		width: area.width,
		height: 1,
	})
}
