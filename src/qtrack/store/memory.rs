use super::StateStore;
use crate::error::Result;
use crate::model::{QuestionsByTopic, SolvedState, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory storage for testing and development.
///
/// Clones share the same backing records, so a tracker rebuilt over a clone
/// observes everything saved through the original. That makes reload
/// round-trips testable without a filesystem.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    records: Rc<RefCell<Records>>,
}

#[derive(Default)]
struct Records {
    questions: Option<QuestionsByTopic>,
    solved: Option<SolvedState>,
    theme: Option<Theme>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStore {
    fn load_questions(&self) -> Result<Option<QuestionsByTopic>> {
        Ok(self.records.borrow().questions.clone())
    }

    fn save_questions(&mut self, questions: &QuestionsByTopic) -> Result<()> {
        self.records.borrow_mut().questions = Some(questions.clone());
        Ok(())
    }

    fn load_solved(&self) -> Result<Option<SolvedState>> {
        Ok(self.records.borrow().solved.clone())
    }

    fn save_solved(&mut self, solved: &SolvedState) -> Result<()> {
        self.records.borrow_mut().solved = Some(solved.clone());
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(self.records.borrow().theme)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.records.borrow_mut().theme = Some(theme);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Difficulty, Link, Question};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_questions(self, topic: &str, count: usize) -> Self {
            let mut store = self.store.clone();
            let mut questions = store.load_questions().unwrap().unwrap_or_default();
            let list = questions.entry(topic.to_string()).or_default();
            for i in 0..count {
                let q = Question::new(
                    format!("Question {}", i + 1),
                    Link::normalize(""),
                    Difficulty::default(),
                );
                list.insert(0, q);
            }
            store.save_questions(&questions).unwrap();
            self
        }

        pub fn with_theme(self, theme: Theme) -> Self {
            let mut store = self.store.clone();
            store.save_theme(theme).unwrap();
            self
        }
    }
}
