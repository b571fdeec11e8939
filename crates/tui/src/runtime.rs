//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use faqz_core::{ListenerGuard, PointerSource};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::App;
use crate::outcome::SearchOutcome;

/// Terminal mouse reporting, the source of pointer events for outside-click
/// detection.
#[derive(Debug, Default)]
pub struct MouseCapture;

impl PointerSource for MouseCapture {
	fn attach(&mut self) -> io::Result<()> {
		execute!(stdout(), EnableMouseCapture)
	}

	fn detach(&mut self) -> io::Result<()> {
		execute!(stdout(), DisableMouseCapture)
	}
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		let pointer = match ListenerGuard::attach(MouseCapture)
			.context("failed to enable mouse capture")
		{
			Ok(pointer) => pointer,
			Err(err) => {
				ratatui::restore();
				return Err(err);
			}
		};

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						match self.handle_key(key) {
							Ok(Some(outcome)) => {
								maybe_outcome = Some(outcome);
								break;
							}
							Ok(None) => {}
							Err(err) => break 'event_loop Err(err),
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		// Stop pointer delivery before the component goes away.
		if let Err(err) = pointer.release() {
			log::warn!("{err}");
		}
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			log::info!(
				"session ended with {} history entries",
				outcome.history.len()
			);
		}
		result
	}
}
