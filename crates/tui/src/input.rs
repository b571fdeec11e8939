//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input widget holding the current query.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			focused: true,
		};
		input.set_text(&initial.into());
		input
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and put the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_cursor_style();
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	/// Feed a key to the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

fn inserts_newline(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
