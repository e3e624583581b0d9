use crate::error::Result;
use crate::model::{
    Difficulty, Link, Question, QuestionsByTopic, SolvedState, Theme, DEFAULT_TOPICS,
};
use crate::store::StateStore;
use uuid::Uuid;

/// The question store: owns the in-memory records and the persistence port.
///
/// Constructed once per process. Every mutation updates the in-memory state
/// first, then flushes the affected record through the port as a full
/// overwrite. In-memory state stays applied even when a flush fails, so the
/// process keeps a correct picture and only restart durability is at risk.
pub struct Tracker<S: StateStore> {
    store: S,
    questions: QuestionsByTopic,
    solved: SolvedState,
    theme: Theme,
}

impl<S: StateStore> Tracker<S> {
    /// Load state from the port. Absent or unreadable records fall back to
    /// the seeded topic registry, an empty solved map, and the light theme.
    /// Never fails.
    pub fn load(store: S) -> Self {
        let questions = store
            .load_questions()
            .ok()
            .flatten()
            .unwrap_or_else(seed_topics);
        let solved = store.load_solved().ok().flatten().unwrap_or_default();
        let theme = store.load_theme().ok().flatten().unwrap_or_default();
        Self {
            store,
            questions,
            solved,
            theme,
        }
    }

    /// Add a question to the front of the topic's list, creating the list
    /// for topics outside the registry. A title that is empty after trimming
    /// is a silent no-op and nothing is persisted.
    pub fn add_question(
        &mut self,
        topic: &str,
        title: &str,
        raw_link: &str,
        difficulty: Difficulty,
    ) -> Result<Option<Question>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let question = Question::new(title.to_string(), Link::normalize(raw_link), difficulty);
        let list = self.questions.entry(topic.to_string()).or_default();
        list.insert(0, question.clone());
        self.store.save_questions(&self.questions)?;
        Ok(Some(question))
    }

    /// Remove the matching question from the named topic and drop its solved
    /// flag. Removing an id that is not present is a no-op, so the operation
    /// is idempotent.
    pub fn remove_question(&mut self, topic: &str, id: &Uuid) -> Result<()> {
        if let Some(list) = self.questions.get_mut(topic) {
            list.retain(|q| q.id != *id);
        }
        self.solved.remove(id);
        self.store.save_questions(&self.questions)?;
        self.store.save_solved(&self.solved)?;
        Ok(())
    }

    /// Flip the solved flag for `id`, treating an absent entry as unsolved.
    /// The id is not checked against the question lists.
    pub fn toggle_solved(&mut self, id: &Uuid) -> Result<()> {
        let current = self.solved.get(id).copied().unwrap_or(false);
        self.solved.insert(*id, !current);
        self.store.save_solved(&self.solved)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.save_theme(theme)
    }

    pub fn questions(&self) -> &QuestionsByTopic {
        &self.questions
    }

    pub fn questions_for(&self, topic: &str) -> &[Question] {
        self.questions.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_solved(&self, id: &Uuid) -> bool {
        self.solved.get(id).copied().unwrap_or(false)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Topic names in presentation order: the registry first, then any extra
    /// topics questions were added under, sorted by name.
    pub fn topics(&self) -> Vec<String> {
        let mut names: Vec<String> = DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect();
        let mut extras: Vec<String> = self
            .questions
            .keys()
            .filter(|k| !DEFAULT_TOPICS.contains(&k.as_str()))
            .cloned()
            .collect();
        extras.sort();
        names.extend(extras);
        names
    }
}

fn seed_topics() -> QuestionsByTopic {
    DEFAULT_TOPICS
        .iter()
        .map(|t| (t.to_string(), Vec::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn tracker() -> Tracker<InMemoryStore> {
        Tracker::load(InMemoryStore::new())
    }

    #[test]
    fn fresh_tracker_is_seeded_with_the_topic_registry() {
        let t = tracker();
        assert_eq!(t.topics().len(), DEFAULT_TOPICS.len());
        assert_eq!(t.topics()[0], "Array");
        assert!(t.questions_for("Array").is_empty());
    }

    #[test]
    fn add_prepends_with_trimmed_title() {
        let mut t = tracker();
        t.add_question("Array", "Two Sum", "", Difficulty::Easy)
            .unwrap();
        t.add_question("Array", "  3Sum  ", "", Difficulty::Medium)
            .unwrap();

        let list = t.questions_for("Array");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "3Sum");
        assert_eq!(list[1].title, "Two Sum");
    }

    #[test]
    fn blank_title_is_a_silent_no_op() {
        let mut t = tracker();
        assert!(t.add_question("Array", "", "", Difficulty::Easy).unwrap().is_none());
        assert!(t
            .add_question("Array", "   ", "", Difficulty::Easy)
            .unwrap()
            .is_none());
        assert!(t.questions_for("Array").is_empty());
    }

    #[test]
    fn add_normalizes_the_link() {
        let mut t = tracker();
        let q = t
            .add_question("Array", "Two Sum", "leetcode.com/problems/two-sum", Difficulty::Easy)
            .unwrap()
            .unwrap();
        assert_eq!(q.link.as_str(), "https://leetcode.com/problems/two-sum");

        let q = t
            .add_question("Array", "3Sum", "https://x.com", Difficulty::Medium)
            .unwrap()
            .unwrap();
        assert_eq!(q.link.as_str(), "https://x.com");

        let q = t
            .add_question("Array", "4Sum", "", Difficulty::Hard)
            .unwrap()
            .unwrap();
        assert!(q.link.is_empty());
    }

    #[test]
    fn add_creates_lists_for_unregistered_topics() {
        let mut t = tracker();
        t.add_question("Two Pointers", "Container With Most Water", "", Difficulty::Medium)
            .unwrap();

        assert_eq!(t.questions_for("Two Pointers").len(), 1);
        // Extra topics sort after the registry
        assert_eq!(t.topics().last().unwrap(), "Two Pointers");
    }

    #[test]
    fn remove_drops_the_question_and_its_solved_flag() {
        let mut t = tracker();
        let q = t
            .add_question("Array", "Two Sum", "", Difficulty::Easy)
            .unwrap()
            .unwrap();
        t.toggle_solved(&q.id).unwrap();
        assert!(t.is_solved(&q.id));

        t.remove_question("Array", &q.id).unwrap();
        assert!(t.questions_for("Array").is_empty());
        assert!(!t.is_solved(&q.id));
        assert!(!t.solved.contains_key(&q.id));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut t = tracker();
        let q = t
            .add_question("Array", "Two Sum", "", Difficulty::Easy)
            .unwrap()
            .unwrap();

        t.remove_question("Array", &q.id).unwrap();
        t.remove_question("Array", &q.id).unwrap();
        t.remove_question("Graphs", &q.id).unwrap();
        assert!(t.questions_for("Array").is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut t = tracker();
        let q = t
            .add_question("Array", "Two Sum", "", Difficulty::Easy)
            .unwrap()
            .unwrap();

        t.toggle_solved(&q.id).unwrap();
        assert!(t.is_solved(&q.id));
        t.toggle_solved(&q.id).unwrap();
        assert!(!t.is_solved(&q.id));
    }

    #[test]
    fn toggle_unknown_id_is_tolerated() {
        let mut t = tracker();
        let stray = Uuid::new_v4();

        t.toggle_solved(&stray).unwrap();
        assert!(t.is_solved(&stray));

        // Removal under any topic still scrubs the dangling entry
        t.remove_question("Array", &stray).unwrap();
        assert!(!t.is_solved(&stray));
    }

    #[test]
    fn state_survives_a_reload() {
        let backend = InMemoryStore::new();
        let first_id;
        {
            let mut t = Tracker::load(backend.clone());
            let q = t
                .add_question("Trees", "Invert Binary Tree", "leetcode.com/x", Difficulty::Easy)
                .unwrap()
                .unwrap();
            t.add_question("Trees", "Diameter of Binary Tree", "", Difficulty::Easy)
                .unwrap();
            t.toggle_solved(&q.id).unwrap();
            t.set_theme(Theme::Dark).unwrap();
            first_id = q.id;
        }

        let t = Tracker::load(backend);
        let list = t.questions_for("Trees");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "Invert Binary Tree");
        assert_eq!(list[1].link.as_str(), "https://leetcode.com/x");
        assert!(t.is_solved(&first_id));
        assert_eq!(t.theme(), Theme::Dark);
    }

    #[test]
    fn theme_defaults_to_light_and_persists() {
        let backend = InMemoryStore::new();
        {
            let mut t = Tracker::load(backend.clone());
            assert_eq!(t.theme(), Theme::Light);
            t.set_theme(t.theme().toggled()).unwrap();
        }

        let t = Tracker::load(backend);
        assert_eq!(t.theme(), Theme::Dark);
    }
}
