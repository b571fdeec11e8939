use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::{App, Focus, HitRegions};
use crate::components::{
	AnswerContext, DropdownContext, InputContext, PopularContext, answer_height, dropdown_height,
	render_answer, render_dropdown, render_input, render_popular,
};

impl App<'_> {
	/// Draw the whole UI and record where the clickable parts landed.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main_area, log_area) = if self.logs.is_visible() {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([Constraint::Min(0), Constraint::Percentage(40)])
				.split(area);
			(split[0], Some(split[1]))
		} else {
			(area, None)
		};

		let rows = self.state.dropdown_rows();
		let answer = self.state.answer();
		let answer_rows = answer
			.map(|text| answer_height(text, main_area.width))
			.unwrap_or(0);

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(dropdown_height(rows.len())),
				Constraint::Length(answer_rows),
				Constraint::Min(0),
			])
			.split(main_area);
		let (input_area, dropdown_area, answer_area, popular_area) =
			(layout[0], layout[1], layout[2], layout[3]);

		let input_layout = render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: &self.labels.placeholder,
				can_clear: self.state.can_clear(),
				area: input_area,
				theme: &self.theme,
			},
		);

		let dropdown = render_dropdown(
			frame,
			DropdownContext {
				rows: &rows,
				highlight: self.highlight,
				title: &self.labels.results_title,
				area: dropdown_area,
				theme: &self.theme,
			},
		);

		if let Some(answer) = answer {
			render_answer(
				frame,
				AnswerContext {
					title: &self.labels.answer_title,
					answer,
					area: answer_area,
					theme: &self.theme,
				},
			);
		}

		let popular = render_popular(
			frame,
			PopularContext {
				popular: &self.popular,
				selected: (self.focus == Focus::Popular)
					.then_some(self.popular_selected)
					.flatten(),
				title: &self.labels.popular_title,
				area: popular_area,
				theme: &self.theme,
			},
		);

		if let Some(log_area) = log_area {
			self.logs.render(frame, log_area, &self.theme);
		}

		self.regions = HitRegions {
			component: non_empty([input_area, dropdown_area, answer_area]),
			input: Some(input_area),
			clear_button: input_layout.clear_button,
			dropdown,
			popular,
		};
	}
}

fn non_empty<const N: usize>(areas: [Rect; N]) -> Vec<Rect> {
	areas
		.into_iter()
		.filter(|area| area.width > 0 && area.height > 0)
		.collect()
}
