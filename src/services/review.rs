use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::domain::Question;

/// How many of the remaining options a review entry lists.
const REVIEW_OTHER_OPTIONS_LIMIT: usize = 3;

/// One line of the end-of-session summary screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub question_id: String,
    pub text: String,
    /// Text of the option the reader picked; None when unanswered.
    pub chosen: Option<String>,
    pub correct: bool,
    pub correct_text: String,
    /// Options that were neither chosen nor correct, capped for display.
    pub other_options: Vec<String>,
}

/// Builds the per-question review shown on the summary screen, in selection
/// order. Ids missing from the bank are skipped.
pub fn build_review(
    answers: &HashMap<String, usize>,
    selected: &[String],
    bank: &BTreeMap<String, Question>,
) -> Vec<ReviewEntry> {
    selected
        .iter()
        .filter_map(|id| {
            let question = bank.get(id)?;
            let chosen_index = answers.get(id.as_str()).copied();

            let other_options = question
                .options
                .iter()
                .enumerate()
                .filter(|(index, _)| {
                    Some(*index) != chosen_index && *index != question.correct_answer
                })
                .map(|(_, text)| text.clone())
                .take(REVIEW_OTHER_OPTIONS_LIMIT)
                .collect();

            Some(ReviewEntry {
                question_id: id.clone(),
                text: question.text.clone(),
                chosen: chosen_index.and_then(|index| question.options.get(index).cloned()),
                correct: chosen_index == Some(question.correct_answer),
                correct_text: question.correct_option().to_string(),
                other_options,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_bank;

    #[test]
    fn test_review_follows_selection_order() {
        let bank = test_bank(4);
        let selected: Vec<String> = bank.keys().rev().cloned().collect();
        let answers = HashMap::new();

        let review = build_review(&answers, &selected, &bank);

        let ids: Vec<_> = review.iter().map(|entry| entry.question_id.clone()).collect();
        assert_eq!(ids, selected);
    }

    #[test]
    fn test_correct_and_incorrect_entries() {
        let bank = test_bank(2);
        let selected: Vec<String> = bank.keys().cloned().collect();

        let mut answers = HashMap::new();
        answers.insert(selected[0].clone(), bank[&selected[0]].correct_answer);
        let wrong = (bank[&selected[1]].correct_answer + 1) % bank[&selected[1]].options.len();
        answers.insert(selected[1].clone(), wrong);

        let review = build_review(&answers, &selected, &bank);

        assert!(review[0].correct);
        assert_eq!(review[0].chosen.as_deref(), Some(review[0].correct_text.as_str()));

        assert!(!review[1].correct);
        assert_eq!(
            review[1].chosen.as_deref(),
            Some(bank[&selected[1]].options[wrong].as_str())
        );
        assert_eq!(review[1].correct_text, bank[&selected[1]].correct_option());
    }

    #[test]
    fn test_unanswered_entry_has_no_chosen_text() {
        let bank = test_bank(1);
        let selected: Vec<String> = bank.keys().cloned().collect();

        let review = build_review(&HashMap::new(), &selected, &bank);

        assert_eq!(review.len(), 1);
        assert!(review[0].chosen.is_none());
        assert!(!review[0].correct);
    }

    #[test]
    fn test_other_options_exclude_chosen_and_correct_and_are_capped() {
        let bank = test_bank(1);
        let id = bank.keys().next().unwrap().clone();
        let question = &bank[&id];
        assert!(question.options.len() >= 6);

        let chosen = (question.correct_answer + 1) % question.options.len();
        let mut answers = HashMap::new();
        answers.insert(id.clone(), chosen);

        let review = build_review(&answers, &[id], &bank);
        let entry = &review[0];

        assert_eq!(entry.other_options.len(), 3);
        assert!(!entry.other_options.contains(&entry.correct_text));
        assert!(!entry.other_options.contains(entry.chosen.as_ref().unwrap()));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let bank = test_bank(1);
        let mut selected: Vec<String> = bank.keys().cloned().collect();
        selected.push("ghost".to_string());

        let review = build_review(&HashMap::new(), &selected, &bank);
        assert_eq!(review.len(), 1);
    }
}
