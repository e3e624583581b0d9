//! # API Facade
//!
//! The single entry point for UI clients. A thin layer over the tracker and
//! the view queries: it dispatches, holds the one piece of session state
//! (the selected topic), and returns structured types. No business logic,
//! no I/O, no presentation concerns.
//!
//! `TrackerApi<S: StateStore>` is generic over the storage backend:
//! production wires in `FileStore`, tests use `InMemoryStore`.

use crate::error::Result;
use crate::model::{Difficulty, Question, Theme, DEFAULT_TOPICS};
use crate::store::StateStore;
use crate::tracker::Tracker;
use crate::view::{self, Progress, QuestionView, TopicCount};
use uuid::Uuid;

pub struct TrackerApi<S: StateStore> {
    tracker: Tracker<S>,
    selected_topic: String,
}

impl<S: StateStore> TrackerApi<S> {
    /// Load state from the given backend. The selected topic starts at the
    /// first registry entry.
    pub fn new(store: S) -> Self {
        Self {
            tracker: Tracker::load(store),
            selected_topic: DEFAULT_TOPICS[0].to_string(),
        }
    }

    // --- Queries ---

    pub fn list_topics(&self) -> Vec<TopicCount> {
        view::topic_counts(&self.tracker)
    }

    pub fn display_for_topic(&self, topic: &str) -> Vec<QuestionView> {
        view::display_for_topic(&self.tracker, topic)
    }

    pub fn display_selected(&self) -> Vec<QuestionView> {
        view::display_for_topic(&self.tracker, &self.selected_topic)
    }

    pub fn progress(&self, topic: &str) -> Progress {
        view::progress(&self.tracker, topic)
    }

    pub fn current_theme(&self) -> Theme {
        self.tracker.theme()
    }

    pub fn selected_topic(&self) -> &str {
        &self.selected_topic
    }

    pub fn is_solved(&self, id: &Uuid) -> bool {
        self.tracker.is_solved(id)
    }

    // --- Commands ---

    /// Select a topic. Any topic may be selected from any other at any time;
    /// the selection is session state and is not persisted.
    pub fn select_topic(&mut self, topic: &str) {
        self.selected_topic = topic.to_string();
    }

    pub fn add_question(
        &mut self,
        topic: &str,
        title: &str,
        link: &str,
        difficulty: Difficulty,
    ) -> Result<Option<Question>> {
        self.tracker.add_question(topic, title, link, difficulty)
    }

    pub fn add_to_selected(
        &mut self,
        title: &str,
        link: &str,
        difficulty: Difficulty,
    ) -> Result<Option<Question>> {
        let topic = self.selected_topic.clone();
        self.tracker.add_question(&topic, title, link, difficulty)
    }

    pub fn remove_question(&mut self, topic: &str, id: &Uuid) -> Result<()> {
        self.tracker.remove_question(topic, id)
    }

    pub fn toggle_solved(&mut self, id: &Uuid) -> Result<()> {
        self.tracker.toggle_solved(id)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.tracker.set_theme(theme)
    }

    /// Flip between light and dark, returning the new value.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.tracker.theme().toggled();
        self.tracker.set_theme(next)?;
        Ok(next)
    }
}
