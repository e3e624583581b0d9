//! # Storage Layer
//!
//! This module defines the storage abstraction for qtrack. The [`StateStore`]
//! trait allows the application to work with different storage backends.
//!
//! The store keeps three independent records, each loaded and saved as a
//! whole (no batching, no partial writes):
//!
//! - questions by topic
//! - solved flags by question id
//! - the theme preference
//!
//! `load_*` returns `Ok(None)` when a record is absent. Backends are expected
//! to treat malformed records the same way: recovery happens at the port, so
//! the tracker falls back to its defaults instead of surfacing a load error.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - `questions.json` and `solved.json` as pretty-printed JSON
//!   - `theme` as a bare `light`/`dark` string
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Clones share one backing copy, so reloads observe earlier saves
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::{QuestionsByTopic, SolvedState, Theme};

pub mod fs;
pub mod memory;

/// Abstract interface for the persistence port.
///
/// The tracker owns one instance and flushes the affected record through it
/// after every mutation.
pub trait StateStore {
    /// Load the questions record, `None` if absent or unreadable
    fn load_questions(&self) -> Result<Option<QuestionsByTopic>>;

    /// Overwrite the questions record
    fn save_questions(&mut self, questions: &QuestionsByTopic) -> Result<()>;

    /// Load the solved record, `None` if absent or unreadable
    fn load_solved(&self) -> Result<Option<SolvedState>>;

    /// Overwrite the solved record
    fn save_solved(&mut self, solved: &SolvedState) -> Result<()>;

    /// Load the theme preference, `None` if absent or unreadable
    fn load_theme(&self) -> Result<Option<Theme>>;

    /// Overwrite the theme preference
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}
