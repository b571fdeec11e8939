use faqz_core::{Dataset, FoldMode, PopularQuestions, QaRecord, RESULT_LIMIT};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{App, Focus};
use crate::config::UiLabels;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn questions() -> Dataset {
	Dataset::new(vec![
		QaRecord::new("How do I register?", "Through the website"),
		QaRecord::new("What is the program?", "An education program"),
		QaRecord::new("When does registration close?", "At the end of the month"),
	])
}

fn popular() -> Dataset {
	Dataset::new(vec![
		QaRecord::new("Is it free?", "Yes"),
		QaRecord::new("Who can join?", "Everyone"),
	])
}

fn app_with(popular: PopularQuestions) -> App<'static> {
	let mut app = App::new(questions(), popular, FoldMode::Unicode);
	app.set_labels(
		UiLabels::default()
			.with_placeholder("Search here")
			.with_answer_title("Answer")
			.with_popular_title("Popular"),
	);
	app
}

fn app() -> App<'static> {
	app_with(PopularQuestions::new(popular()))
}

fn terminal(height: u16) -> Terminal<TestBackend> {
	Terminal::new(TestBackend::new(WIDTH, height)).expect("test terminal")
}

fn render(app: &mut App<'_>, terminal: &mut Terminal<TestBackend>) -> String {
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	buffer
		.content()
		.chunks(usize::from(buffer.area.width))
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch))).expect("key");
	}
}

fn click_at(app: &mut App<'_>, column: u16, row: u16) {
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

fn click(app: &mut App<'_>, area: Rect) {
	click_at(app, area.x, area.y);
}

/// Select the first result for `text` by clicking it.
fn select(app: &mut App<'_>, terminal: &mut Terminal<TestBackend>, text: &str) {
	type_text(app, text);
	render(app, terminal);
	let (row, _) = app.regions.dropdown.rows[0];
	click(app, row);
}

#[test]
fn mounts_focused_with_placeholder_and_popular_list() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	let screen = render(&mut app, &mut terminal);

	assert_eq!(app.focus(), Focus::Search);
	assert!(app.state.list_visible());
	assert!(app.state.filtered().is_empty());
	assert!(screen.contains("› Search here"));
	assert!(screen.contains("• Is it free?"));
	assert!(screen.contains("Everyone"));
	assert!(app.regions.dropdown.rows.is_empty());
	assert!(app.regions.clear_button.is_none());
}

#[test]
fn typing_filters_and_shows_clear_button() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	type_text(&mut app, "REG");
	let screen = render(&mut app, &mut terminal);

	assert_eq!(app.state.query(), "REG");
	assert_eq!(app.state.filtered().len(), 2);
	assert!(screen.contains("How do I register?"));
	assert!(screen.contains("When does registration close?"));
	assert!(!screen.contains("What is the program?"));
	assert_eq!(app.regions.dropdown.rows.len(), 2);
	assert!(app.regions.dropdown.remove_buttons.is_empty());
	assert!(app.regions.clear_button.is_some());
}

#[test]
fn clicking_a_result_shows_its_answer_and_fills_the_input() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "program");

	assert_eq!(app.state.answer(), Some("An education program"));
	assert_eq!(app.search_input.text(), "What is the program?");
	assert!(app.state.filtered().is_empty());
	assert_eq!(app.state.history().len(), 1);

	let screen = render(&mut app, &mut terminal);
	assert!(screen.contains("Answer"));
	assert!(screen.contains("An education program"));
	assert!(app.regions.dropdown.rows.is_empty());
}

#[test]
fn enter_clicks_the_highlighted_row() {
	let mut app = app();
	type_text(&mut app, "reg");
	app.handle_key(key(KeyCode::Down)).expect("down");
	app.handle_key(key(KeyCode::Down)).expect("down");
	app.handle_key(key(KeyCode::Enter)).expect("enter");

	assert_eq!(app.state.query(), "When does registration close?");
	assert_eq!(app.state.answer(), Some("At the end of the month"));
	assert_eq!(app.highlight, None);
}

#[test]
fn enter_without_highlight_submits_the_query() {
	let mut app = app();
	app.handle_key(key(KeyCode::Enter)).expect("enter");

	assert_eq!(app.state.filtered().len(), 3);
	assert!(app.state.answer().is_none());
}

#[test]
fn clicking_outside_hides_the_list_and_blurs() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	type_text(&mut app, "reg");
	render(&mut app, &mut terminal);

	click_at(&mut app, 0, 0);

	assert!(!app.state.list_visible());
	assert_eq!(app.focus(), Focus::Idle);
	assert_eq!(app.state.filtered().len(), 2);
	render(&mut app, &mut terminal);
	assert!(app.regions.dropdown.rows.is_empty());
}

#[test]
fn clicking_inside_the_dropdown_keeps_the_list() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	type_text(&mut app, "reg");
	render(&mut app, &mut terminal);

	// Top border of the dropdown.
	let (row, _) = app.regions.dropdown.rows[0];
	click_at(&mut app, row.x, row.y - 1);

	assert!(app.state.list_visible());
	assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn clicking_a_popular_question_toggles_its_answer() {
	let mut app = app_with(PopularQuestions::collapsed(popular()));
	let mut terminal = terminal(HEIGHT);
	let screen = render(&mut app, &mut terminal);
	assert!(!screen.contains("Everyone"));

	let (row, index) = app.regions.popular[1];
	click(&mut app, row);

	assert_eq!(index, 1);
	assert_eq!(app.popular.expanded(), Some(1));
	assert_eq!(app.focus(), Focus::Popular);
	assert!(!app.state.list_visible());
	let screen = render(&mut app, &mut terminal);
	assert!(screen.contains("Everyone"));

	let (row, _) = app.regions.popular[1];
	click(&mut app, row);
	assert_eq!(app.popular.expanded(), None);
}

#[test]
fn remove_button_drops_history_but_keeps_the_row() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "program");
	app.handle_key(ctrl('u')).expect("clear");

	let screen = render(&mut app, &mut terminal);
	assert!(screen.contains("◷ What is the program?"));
	let (button, index) = app.regions.dropdown.remove_buttons[0];
	assert_eq!(index, 0);

	click(&mut app, button);

	assert!(app.state.history().is_empty());
	assert_eq!(app.state.filtered().len(), 1);
	let screen = render(&mut app, &mut terminal);
	assert!(!screen.contains("◷"));
	assert!(screen.contains("What is the program?"));
}

#[test]
fn clear_button_resets_to_history() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "register");
	type_text(&mut app, "x");
	render(&mut app, &mut terminal);

	let button = app.regions.clear_button.expect("clear button");
	click(&mut app, button);

	assert_eq!(app.state.query(), "");
	assert_eq!(app.search_input.text(), "");
	assert!(app.state.answer().is_none());
	assert_eq!(app.state.filtered(), app.state.history().as_slice());
	assert!(app.state.list_visible());
	assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn clicking_the_input_after_blur_shows_history() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "register");
	app.handle_key(ctrl('u')).expect("clear");
	render(&mut app, &mut terminal);
	click_at(&mut app, 0, 0);
	assert!(!app.state.list_visible());

	render(&mut app, &mut terminal);
	let input = app.regions.input.expect("input region");
	click_at(&mut app, input.x + 4, input.y);

	assert_eq!(app.focus(), Focus::Search);
	assert!(app.state.list_visible());
	assert_eq!(app.state.filtered().len(), 1);
	assert_eq!(app.state.filtered()[0].q, "How do I register?");
}

#[test]
fn ctrl_d_removes_the_highlighted_history_row() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "register");
	app.handle_key(ctrl('u')).expect("clear");
	app.handle_key(key(KeyCode::Down)).expect("down");
	app.handle_key(ctrl('d')).expect("remove");

	assert!(app.state.history().is_empty());
	assert_eq!(app.state.filtered().len(), 1);
	assert_eq!(app.highlight, Some(0));
}

#[test]
fn ctrl_d_ignores_rows_outside_history() {
	let mut app = app();
	type_text(&mut app, "reg");
	app.handle_key(key(KeyCode::Down)).expect("down");
	app.handle_key(ctrl('d')).expect("remove");

	assert_eq!(app.state.filtered().len(), 2);
}

#[test]
fn ctrl_u_with_empty_query_does_nothing() {
	let mut app = app();
	app.handle_key(key(KeyCode::Enter)).expect("submit");
	app.handle_key(ctrl('u')).expect("clear");

	assert_eq!(app.state.filtered().len(), 3);
}

#[test]
fn escape_returns_the_outcome() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	select(&mut app, &mut terminal, "program");

	let outcome = app
		.handle_key(key(KeyCode::Esc))
		.expect("esc")
		.expect("outcome");
	assert_eq!(outcome.query, "What is the program?");
	assert_eq!(outcome.answer.as_deref(), Some("An education program"));
	assert_eq!(outcome.history.len(), 1);

	let outcome = app.handle_key(ctrl('c')).expect("ctrl-c");
	assert!(outcome.is_some());
}

#[test]
fn tab_cycles_focus_and_typing_returns_to_search() {
	let mut app = app();
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	assert_eq!(app.focus(), Focus::Popular);
	assert_eq!(app.popular_selected, Some(0));

	app.handle_key(key(KeyCode::Down)).expect("down");
	assert_eq!(app.popular_selected, Some(1));

	type_text(&mut app, "w");
	assert_eq!(app.focus(), Focus::Search);
	assert_eq!(app.state.query(), "w");
}

#[test]
fn log_pane_joins_the_focus_cycle_while_shown() {
	let mut app = app();
	app.handle_key(ctrl('l')).expect("toggle logs");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	app.handle_key(key(KeyCode::Tab)).expect("tab");
	assert_eq!(app.focus(), Focus::Logs);

	app.handle_key(ctrl('l')).expect("toggle logs");
	assert_eq!(app.focus(), Focus::Search);
}

#[test]
fn log_pane_renders_below_the_search() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	app.handle_key(ctrl('l')).expect("toggle logs");
	let screen = render(&mut app, &mut terminal);

	assert!(screen.contains("Runtime log"));
	assert!(screen.contains("› Search here"));
}

#[test]
fn typing_while_idle_refocuses_the_input() {
	let mut app = app();
	let mut terminal = terminal(HEIGHT);
	render(&mut app, &mut terminal);
	click_at(&mut app, 0, 0);
	assert_eq!(app.focus(), Focus::Idle);

	type_text(&mut app, "reg");

	assert_eq!(app.focus(), Focus::Search);
	assert!(app.state.list_visible());
	assert_eq!(app.state.filtered().len(), 2);
}

#[test]
fn dropdown_never_shows_more_than_the_result_limit() {
	let records = (1..=20)
		.map(|n| QaRecord::new(format!("Question {n}"), format!("Answer {n}")))
		.collect();
	let mut app = App::new(
		Dataset::new(records),
		PopularQuestions::new(Dataset::default()),
		FoldMode::Unicode,
	);
	let mut terminal = terminal(40);
	type_text(&mut app, "question");
	let screen = render(&mut app, &mut terminal);

	assert_eq!(app.state.filtered().len(), 20);
	assert_eq!(app.regions.dropdown.rows.len(), RESULT_LIMIT);
	assert!(screen.contains("Question 15"));
	assert!(!screen.contains("Question 16"));
}

#[test]
fn initial_query_filters_on_mount() {
	let mut app = app();
	app.set_initial_query("close");

	assert_eq!(app.search_input.text(), "close");
	assert_eq!(app.state.filtered().len(), 1);
}
