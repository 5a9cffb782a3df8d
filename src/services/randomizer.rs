use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{DisplayOption, DisplayQuestion, Question};

/// How many wrong options are shown next to the correct one by default.
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// Builds the shuffled option list for one question: the correct option plus
/// up to `distractor_count` randomly sampled wrong ones. Every entry keeps
/// its original index so the answer can later be checked against the
/// document's answer key.
///
/// A question with fewer options than requested simply shows all of them.
/// The caller must hand in a validated question; `correct_answer` is assumed
/// to be in bounds.
pub fn build_display<R: Rng + ?Sized>(
    question: &Question,
    distractor_count: usize,
    rng: &mut R,
) -> DisplayQuestion {
    let mut distractors: Vec<DisplayOption> = question
        .options
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != question.correct_answer)
        .map(|(index, text)| DisplayOption {
            text: text.clone(),
            index,
        })
        .collect();

    // Shuffle-and-truncate samples the distractors without replacement.
    distractors.shuffle(rng);
    distractors.truncate(distractor_count);

    let mut display_options = distractors;
    display_options.push(DisplayOption {
        text: question.options[question.correct_answer].clone(),
        index: question.correct_answer,
    });
    display_options.shuffle(rng);

    DisplayQuestion {
        text: question.text.clone(),
        options: question.options.clone(),
        correct_answer: question.correct_answer,
        display_options,
    }
}
