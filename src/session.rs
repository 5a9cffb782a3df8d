use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::domain::{DisplayQuestion, StoryDocument};
use crate::services::{
    build_display, build_review, score_answers, select_questions, ReviewEntry, ScoreSummary,
    DEFAULT_DISTRACTOR_COUNT, DEFAULT_QUESTION_COUNT,
};

/// One reader's pass through a story: the selected questions, their cached
/// display projections, and the answers recorded so far.
///
/// A session is built from a single validated document and never outlives
/// it. Loading a new document means building a new session; whichever
/// session is stored last wins.
pub struct StorySession {
    document: StoryDocument,
    selection: Vec<String>,
    display_cache: HashMap<String, DisplayQuestion>,
    answers: HashMap<String, usize>,
    current_step: usize,
    distractor_count: usize,
    rng: StdRng,
}

impl StorySession {
    pub fn new(document: StoryDocument) -> Self {
        Self::with_rng(document, StdRng::from_entropy())
    }

    /// Entry point for deterministic tests: the caller supplies the RNG that
    /// drives both question selection and option shuffling.
    pub fn with_rng(document: StoryDocument, rng: StdRng) -> Self {
        Self::with_limits(document, DEFAULT_QUESTION_COUNT, DEFAULT_DISTRACTOR_COUNT, rng)
    }

    pub fn with_limits(
        document: StoryDocument,
        question_count: usize,
        distractor_count: usize,
        mut rng: StdRng,
    ) -> Self {
        let selection = select_questions(&document.questions, question_count, &mut rng);
        Self {
            document,
            selection,
            display_cache: HashMap::new(),
            answers: HashMap::new(),
            current_step: 0,
            distractor_count,
            rng,
        }
    }

    pub fn document(&self) -> &StoryDocument {
        &self.document
    }

    /// Selected question ids in answer order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The id that may be answered next; None once the session is complete.
    pub fn current_question_id(&self) -> Option<&str> {
        self.selection.get(self.current_step).map(String::as_str)
    }

    /// The shuffled projection for one selected question. Built on first
    /// access and cached, so repeated reads see the same option order.
    /// Ids outside the selection yield None.
    pub fn display_question(&mut self, question_id: &str) -> Option<&DisplayQuestion> {
        if !self.selection.iter().any(|id| id == question_id) {
            return None;
        }
        if !self.display_cache.contains_key(question_id) {
            let question = self.document.questions.get(question_id)?;
            let display = build_display(question, self.distractor_count, &mut self.rng);
            self.display_cache.insert(question_id.to_string(), display);
        }
        self.display_cache.get(question_id)
    }

    /// Records the reader's choice (an ORIGINAL option index) for the
    /// current question and advances to the next one. Returns false without
    /// changing anything when the question is already answered, not part of
    /// the selection, or not the current step.
    pub fn record_answer(&mut self, question_id: &str, chosen_index: usize) -> bool {
        if self.answers.contains_key(question_id) {
            return false;
        }
        match self.current_question_id() {
            Some(current) if current == question_id => {}
            _ => return false,
        }

        self.answers.insert(question_id.to_string(), chosen_index);
        self.current_step += 1;
        true
    }

    pub fn answers(&self) -> &HashMap<String, usize> {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= self.selection.len()
    }

    pub fn score(&self) -> ScoreSummary {
        score_answers(&self.answers, &self.selection, &self.document.questions)
    }

    pub fn review(&self) -> Vec<ReviewEntry> {
        build_review(&self.answers, &self.selection, &self.document.questions)
    }

    /// The feedback text for the reader's tier, from the document's summary.
    pub fn feedback(&self) -> &str {
        self.document.summary.feedback.for_tier(self.score().tier)
    }
}
