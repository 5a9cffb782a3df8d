use std::env;

use crate::services::{DEFAULT_DISTRACTOR_COUNT, DEFAULT_QUESTION_COUNT};

#[derive(Clone, Debug)]
pub struct Config {
    /// Google Drive file id of an alternate story document. None means the
    /// bundled story is used.
    pub story_file_id: Option<String>,
    pub question_count: usize,
    pub distractor_count: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            story_file_id: env::var("STORY_FILE_ID").ok().filter(|id| !id.is_empty()),
            question_count: env::var("QUESTION_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_QUESTION_COUNT),
            distractor_count: env::var("DISTRACTOR_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DISTRACTOR_COUNT),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            story_file_id: None,
            question_count: DEFAULT_QUESTION_COUNT,
            distractor_count: DEFAULT_DISTRACTOR_COUNT,
        }
    }
}
