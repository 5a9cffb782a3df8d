use serde::{Deserialize, Serialize};

/// The presentation-ready projection of a question: the correct option plus
/// a sample of distractors, shuffled. Built once per question per session
/// and cached, so a question never re-shuffles between reads.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub display_options: Vec<DisplayOption>,
}

/// `index` is the position of `text` in the ORIGINAL options list, not the
/// shuffled position. Answers are recorded and scored against it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOption {
    pub text: String,
    pub index: usize,
}

impl DisplayQuestion {
    /// The display entry that maps back to the correct answer.
    pub fn correct_display_option(&self) -> Option<&DisplayOption> {
        self.display_options
            .iter()
            .find(|option| option.index == self.correct_answer)
    }
}
