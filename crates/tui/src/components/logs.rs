use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

/// Toggleable pane showing records captured by `tui-logger`.
pub struct LogPane {
	widget: TuiWidgetState,
	visible: bool,
}

impl LogPane {
	pub fn new() -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self {
			widget,
			visible: false,
		}
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Forward navigation keys to the log widget. Returns whether the key was
	/// consumed.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}

		let event = match key.code {
			KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
			KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiWidgetEvent::HideKey),
			KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiWidgetEvent::FocusKey),
			KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
			KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
			KeyCode::Up => Some(TuiWidgetEvent::UpKey),
			KeyCode::Down => Some(TuiWidgetEvent::DownKey),
			KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
			KeyCode::Right => Some(TuiWidgetEvent::RightKey),
			KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
			KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
			_ => None,
		};

		if let Some(event) = event {
			self.widget.transition(event);
			return true;
		}

		false
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(theme.highlight)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new()
	}
}
