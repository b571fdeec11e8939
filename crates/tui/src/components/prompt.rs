use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::input::SearchInput;
use crate::style::Theme;

pub const PROMPT_SYMBOL: &str = "› ";
pub const CLEAR_SYMBOL: &str = "✕";

const PROMPT_WIDTH: u16 = 2;
const CLEAR_WIDTH: u16 = 2;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Shown while the input is empty.
	pub placeholder: &'a str,
	/// Whether to draw the clear button.
	pub can_clear: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Where the input row's interactive parts landed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLayout {
	pub text: Rect,
	pub clear_button: Option<Rect>,
}

/// Render the prompt glyph, the editable text (or placeholder) and, when there
/// is text, a clear button at the right edge.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>) -> InputLayout {
	let InputContext {
		search_input,
		placeholder,
		can_clear,
		area,
		theme,
	} = input;

	if area.width == 0 || area.height == 0 {
		return InputLayout::default();
	}
	let row = Rect { height: 1, ..area };

	frame.buffer_mut().set_line(
		row.left(),
		row.top(),
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt)),
		row.width,
	);

	let reserved = PROMPT_WIDTH + if can_clear { CLEAR_WIDTH } else { 0 };
	let text = Rect {
		x: row.x.saturating_add(PROMPT_WIDTH).min(row.right()),
		width: row.width.saturating_sub(reserved),
		..row
	};
	search_input.render(frame, text);

	if search_input.text().is_empty() {
		render_placeholder(frame, text, placeholder, theme);
	}

	let clear_button = (can_clear && row.width > reserved).then(|| {
		let button = Rect {
			x: row.right().saturating_sub(1),
			width: 1,
			..row
		};
		frame.buffer_mut().set_line(
			button.x,
			button.y,
			&Line::from(Span::styled(CLEAR_SYMBOL, theme.prompt)),
			1,
		);
		button
	});

	InputLayout { text, clear_button }
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let available_width = area.width as usize;
	let display_text: String = text.chars().take(available_width).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}
