use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::summary::StorySummary;

/// The content document the whole application runs on. Supplied as JSON,
/// either bundled with the binary or fetched from a remote file store.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoryDocument {
    #[validate(length(min = 1))]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[validate(length(min = 1), nested)]
    pub pages: Vec<StoryPage>,

    pub questions: BTreeMap<String, Question>,

    #[validate(nested)]
    pub summary: StorySummary,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoryPage {
    #[validate(length(min = 1))]
    pub image: String,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl StoryDocument {
    /// Parses and validates a raw JSON document. This is the only path a
    /// document takes into the application; anything that fails here is
    /// rejected whole, never adopted partially.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let document: StoryDocument = serde_json::from_str(raw)?;
        document.ensure_valid()?;
        Ok(document)
    }

    /// Checks the constraints serde cannot express: non-empty question bank
    /// and, for every question, a correct answer that actually points into
    /// its options.
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate()?;

        if self.questions.is_empty() {
            return Err(AppError::Validation(
                "story must contain at least one question".to_string(),
            ));
        }

        for (id, question) in &self.questions {
            if question.text.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "question '{}' has an empty text",
                    id
                )));
            }
            if question.options.is_empty() {
                return Err(AppError::Validation(format!(
                    "question '{}' has no options",
                    id
                )));
            }
            if question.correct_answer >= question.options.len() {
                return Err(AppError::Validation(format!(
                    "question '{}': correctAnswer {} is out of bounds for {} options",
                    id,
                    question.correct_answer,
                    question.options.len()
                )));
            }
        }

        Ok(())
    }

    /// The image shown on the questions screen. Falls back to the first
    /// page's illustration when no dedicated main image is set.
    pub fn main_image_or_first_page(&self) -> Option<&str> {
        self.main_image
            .as_deref()
            .or_else(|| self.pages.first().map(|page| page.image.as_str()))
    }
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}
