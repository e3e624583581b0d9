//! Pure queries over the tracker state. Nothing here mutates or persists;
//! every value is recomputed from the store on each call.

use crate::model::Question;
use crate::store::StateStore;
use crate::tracker::Tracker;

/// A question annotated with its solved flag, ready for display.
#[derive(Debug, Clone)]
pub struct QuestionView {
    pub question: Question,
    pub solved: bool,
}

#[derive(Debug, Clone)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Per-topic completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub solved: usize,
    pub total: usize,
    pub percent: u32,
}

/// Question counts per topic, in presentation order.
pub fn topic_counts<S: StateStore>(tracker: &Tracker<S>) -> Vec<TopicCount> {
    tracker
        .topics()
        .into_iter()
        .map(|topic| {
            let count = tracker.questions_for(&topic).len();
            TopicCount { topic, count }
        })
        .collect()
}

/// The topic's questions in stored order, each with its solved flag.
/// Unknown topics yield an empty list.
pub fn display_for_topic<S: StateStore>(tracker: &Tracker<S>, topic: &str) -> Vec<QuestionView> {
    tracker
        .questions_for(topic)
        .iter()
        .map(|q| QuestionView {
            solved: tracker.is_solved(&q.id),
            question: q.clone(),
        })
        .collect()
}

/// Completion summary for one topic. Percent rounds to the nearest integer;
/// an empty topic reports zero across the board.
pub fn progress<S: StateStore>(tracker: &Tracker<S>, topic: &str) -> Progress {
    let list = tracker.questions_for(topic);
    let total = list.len();
    let solved = list.iter().filter(|q| tracker.is_solved(&q.id)).count();
    let percent = if total == 0 {
        0
    } else {
        (solved as f64 / total as f64 * 100.0).round() as u32
    };
    Progress {
        solved,
        total,
        percent,
    }
}
