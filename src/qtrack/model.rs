use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Topics seeded into a fresh store, in sidebar order.
pub const DEFAULT_TOPICS: [&str; 11] = [
    "Array",
    "Strings",
    "Linked List",
    "Hashing",
    "Sorting",
    "Binary Search",
    "Trees",
    "Graphs",
    "Backtracking",
    "DP",
    "Recursion",
];

/// Topic name mapped to its questions, newest first.
pub type QuestionsByTopic = HashMap<String, Vec<Question>>;

/// Question id mapped to its solved flag. A missing entry means unsolved.
pub type SolvedState = HashMap<Uuid, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// A question link, normalized at construction.
///
/// Empty input stays empty; anything else without an `http://` or `https://`
/// prefix gets `https://` prepended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Link(String);

impl Link {
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Link(String::new());
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Link(trimmed.to_string())
        } else {
            Link(format!("https://{}", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub link: Link,
    pub difficulty: Difficulty,
    // Set once at creation, never touched again
    pub date_added: DateTime<Utc>,
}

impl Question {
    pub fn new(title: String, link: Link, difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            link,
            difficulty,
            date_added: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_without_scheme_gets_https_prefix() {
        let link = Link::normalize("leetcode.com/problems/two-sum");
        assert_eq!(link.as_str(), "https://leetcode.com/problems/two-sum");
    }

    #[test]
    fn link_with_scheme_is_unchanged() {
        assert_eq!(Link::normalize("https://x.com").as_str(), "https://x.com");
        assert_eq!(
            Link::normalize("http://example.org").as_str(),
            "http://example.org"
        );
    }

    #[test]
    fn empty_link_stays_empty() {
        assert!(Link::normalize("").is_empty());
        assert!(Link::normalize("   ").is_empty());
    }

    #[test]
    fn link_is_trimmed_before_normalizing() {
        let link = Link::normalize("  leetcode.com/x  ");
        assert_eq!(link.as_str(), "https://leetcode.com/x");
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn theme_double_toggle_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn question_serializes_with_camel_case_date_field() {
        let q = Question::new(
            "Two Sum".to_string(),
            Link::normalize("leetcode.com/problems/two-sum"),
            Difficulty::Easy,
        );
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"dateAdded\""));
        assert!(json.contains("\"Easy\""));
    }
}
