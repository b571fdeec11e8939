use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Focus, HitRegions};
use crate::components::point_in_rect;
use crate::outcome::SearchOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome())),
			KeyCode::Char('l') if ctrl => self.toggle_logs(),
			KeyCode::Tab => self.cycle_focus(),
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::Popular => self.handle_popular_key(key),
				Focus::Logs => {
					self.logs.handle_key(key);
				}
				Focus::Idle => {
					// Typing into a blurred widget puts the cursor back first.
					if is_text_input(key) {
						self.set_focus(Focus::Search);
						self.handle_search_key(key);
					}
				}
			},
		}
		Ok(None)
	}

	/// Process a mouse event. Only left-button presses are interactions.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
			return;
		};
		let (column, row) = (mouse.column, mouse.row);

		if !self.regions.in_component(column, row) {
			self.outside_interaction();
			match HitRegions::hit(&self.regions.popular, column, row) {
				Some(index) => {
					self.set_focus(Focus::Popular);
					self.popular_selected = Some(index);
					self.popular.toggle(index);
				}
				None => self.set_focus(Focus::Idle),
			}
			return;
		}

		if let Some(button) = self.regions.clear_button
			&& point_in_rect(column, row, button)
		{
			self.clear();
			self.set_focus(Focus::Search);
		} else if let Some(index) =
			HitRegions::hit(&self.regions.dropdown.remove_buttons, column, row)
		{
			self.remove_history_at(index);
		} else if let Some(index) = HitRegions::hit(&self.regions.dropdown.rows, column, row) {
			self.click_result(index);
		} else if let Some(input) = self.regions.input
			&& point_in_rect(column, row, input)
		{
			self.set_focus(Focus::Search);
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Up => self.move_highlight_up(),
			KeyCode::Down => self.move_highlight_down(),
			KeyCode::Enter => match self.highlight {
				Some(index) => self.click_result(index),
				None => self.submit(),
			},
			KeyCode::Char('d') if ctrl => {
				if let Some(index) = self.highlight {
					self.remove_history_at(index);
					self.clamp_highlight();
				}
			}
			KeyCode::Char('u') if ctrl => self.clear(),
			_ => {
				if self.search_input.input(key) {
					self.text_changed();
				}
			}
		}
	}

	fn handle_popular_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => {
				if let Some(selected) = self.popular_selected
					&& selected > 0
				{
					self.popular_selected = Some(selected - 1);
				}
			}
			KeyCode::Down => {
				let len = self.popular.len();
				match self.popular_selected {
					Some(selected) if selected + 1 < len => {
						self.popular_selected = Some(selected + 1);
					}
					None if len > 0 => self.popular_selected = Some(0),
					_ => {}
				}
			}
			KeyCode::Enter | KeyCode::Char(' ') => {
				if let Some(selected) = self.popular_selected {
					self.popular.toggle(selected);
				}
			}
			_ => {
				if is_text_input(key) {
					self.set_focus(Focus::Search);
					self.handle_search_key(key);
				}
			}
		}
	}

	/// Search, then popular list, then the log pane when shown.
	fn cycle_focus(&mut self) {
		let next = match self.focus {
			Focus::Search if !self.popular.is_empty() => Focus::Popular,
			Focus::Search | Focus::Popular if self.logs.is_visible() => Focus::Logs,
			_ => Focus::Search,
		};
		self.set_focus(next);
	}

	fn move_highlight_up(&mut self) {
		if let Some(selected) = self.highlight
			&& selected > 0
		{
			self.highlight = Some(selected - 1);
		}
	}

	fn move_highlight_down(&mut self) {
		let len = self.dropdown_len();
		match self.highlight {
			Some(selected) if selected + 1 < len => self.highlight = Some(selected + 1),
			None if len > 0 => self.highlight = Some(0),
			_ => {}
		}
	}

	fn clamp_highlight(&mut self) {
		let len = self.dropdown_len();
		self.highlight = match self.highlight {
			_ if len == 0 => None,
			Some(selected) if selected >= len => Some(len - 1),
			other => other,
		};
	}
}

fn is_text_input(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Char(_) => !key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
		KeyCode::Backspace | KeyCode::Delete => true,
		_ => false,
	}
}
