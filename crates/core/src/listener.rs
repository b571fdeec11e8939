//! Scoped registration of the global pointer listener.
//!
//! Outside-click detection needs a process-wide pointer listener. It must be
//! attached when the component mounts and detached when it goes away, on every
//! exit path, so that no event is ever delivered to a dropped component.
//! [`ListenerGuard`] ties that registration to a value's lifetime.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListenerError {
	#[error("failed to attach pointer listener: {0}")]
	Attach(#[source] io::Error),
	#[error("failed to detach pointer listener: {0}")]
	Detach(#[source] io::Error),
}

/// Something that can start and stop delivering pointer events.
pub trait PointerSource {
	fn attach(&mut self) -> io::Result<()>;
	fn detach(&mut self) -> io::Result<()>;
}

/// Holds a [`PointerSource`] attached until the guard is dropped or released.
#[must_use = "the listener is detached as soon as the guard is dropped"]
pub struct ListenerGuard<S: PointerSource> {
	source: Option<S>,
}

impl<S: PointerSource> ListenerGuard<S> {
	pub fn attach(mut source: S) -> Result<Self, ListenerError> {
		source.attach().map_err(ListenerError::Attach)?;
		log::debug!("pointer listener attached");
		Ok(Self {
			source: Some(source),
		})
	}

	pub fn is_attached(&self) -> bool {
		self.source.is_some()
	}

	/// Detach now and report failure instead of logging it.
	pub fn release(mut self) -> Result<(), ListenerError> {
		match self.source.take() {
			Some(mut source) => {
				source.detach().map_err(ListenerError::Detach)?;
				log::debug!("pointer listener released");
				Ok(())
			}
			None => Ok(()),
		}
	}
}

impl<S: PointerSource> Drop for ListenerGuard<S> {
	fn drop(&mut self) {
		if let Some(mut source) = self.source.take() {
			match source.detach() {
				Ok(()) => log::debug!("pointer listener detached"),
				Err(err) => log::warn!("failed to detach pointer listener: {err}"),
			}
		}
	}
}
