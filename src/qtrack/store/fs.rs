use super::StateStore;
use crate::error::{Result, TrackerError};
use crate::model::{QuestionsByTopic, SolvedState, Theme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const QUESTIONS_FILE: &str = "questions.json";
const SOLVED_FILE: &str = "solved.json";
const THEME_FILE: &str = "theme";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TrackerError::Io)?;
        }
        Ok(())
    }

    /// Read and parse a JSON record. Missing or malformed records load as
    /// `None` so callers fall back to their defaults.
    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let content = fs::read_to_string(self.root.join(name)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(TrackerError::Serialization)?;
        fs::write(self.root.join(name), content).map_err(TrackerError::Io)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load_questions(&self) -> Result<Option<QuestionsByTopic>> {
        Ok(self.read_json(QUESTIONS_FILE))
    }

    fn save_questions(&mut self, questions: &QuestionsByTopic) -> Result<()> {
        self.write_json(QUESTIONS_FILE, questions)
    }

    fn load_solved(&self) -> Result<Option<SolvedState>> {
        Ok(self.read_json(SOLVED_FILE))
    }

    fn save_solved(&mut self, solved: &SolvedState) -> Result<()> {
        self.write_json(SOLVED_FILE, solved)
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        // The theme record is a bare string, not JSON
        let content = match fs::read_to_string(self.root.join(THEME_FILE)) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };
        Ok(content.trim().parse().ok())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.root.join(THEME_FILE), theme.to_string()).map_err(TrackerError::Io)?;
        Ok(())
    }
}
