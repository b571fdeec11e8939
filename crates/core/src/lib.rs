//! Core state and data types for the `faqz` FAQ search widget.
//!
//! Nothing in this crate knows about terminals. The [`state`] module holds the
//! search component's state machine, [`dataset`] provides the immutable
//! question/answer records it filters, and [`listener`] models the scoped
//! pointer registration used for outside-click detection. The root module
//! re-exports the types embedders need so they do not have to dig through the
//! module hierarchy.

pub mod dataset;
pub mod error;
pub mod fold;
pub mod history;
pub mod listener;
pub mod popular;
pub mod record;
pub mod state;

pub use crate::dataset::Dataset;
pub use crate::error::DatasetError;
pub use crate::fold::{FoldMode, Matcher};
pub use crate::history::{HISTORY_LIMIT, SearchHistory};
pub use crate::listener::{ListenerError, ListenerGuard, PointerSource};
pub use crate::popular::PopularQuestions;
pub use crate::record::QaRecord;
pub use crate::state::{DropdownRow, Interaction, RESULT_LIMIT, SearchState};
