use std::collections::{BTreeMap, HashMap};

use crate::models::domain::{Question, ScoreTier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct_count: usize,
    pub total: usize,
    pub tier: ScoreTier,
}

/// Counts how many selected questions were answered correctly and maps the
/// result to a tier. Unanswered questions and ids missing from the bank
/// count as incorrect.
pub fn score_answers(
    answers: &HashMap<String, usize>,
    selected: &[String],
    bank: &BTreeMap<String, Question>,
) -> ScoreSummary {
    let correct_count = selected
        .iter()
        .filter(|id| match (answers.get(id.as_str()), bank.get(id.as_str())) {
            (Some(chosen), Some(question)) => *chosen == question.correct_answer,
            _ => false,
        })
        .count();

    ScoreSummary {
        correct_count,
        total: selected.len(),
        tier: classify(correct_count, selected.len()),
    }
}

/// Tier thresholds over the correct-answer ratio. The full-score check runs
/// before the ratio branches so 100% is never classified as merely VeryGood.
/// An empty selection scores as ratio 0.
pub fn classify(correct_count: usize, total: usize) -> ScoreTier {
    if total > 0 && correct_count == total {
        return ScoreTier::Excellent;
    }

    let ratio = if total == 0 {
        0.0
    } else {
        correct_count as f64 / total as f64
    };

    if ratio >= 0.75 {
        ScoreTier::VeryGood
    } else if ratio >= 0.5 {
        ScoreTier::Good
    } else if ratio >= 0.25 {
        ScoreTier::NeedsImprovement
    } else {
        ScoreTier::Beginner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_bank;

    fn answer_first_n_correctly(
        bank: &BTreeMap<String, Question>,
        selected: &[String],
        n: usize,
    ) -> HashMap<String, usize> {
        let mut answers = HashMap::new();
        for (i, id) in selected.iter().enumerate() {
            let question = &bank[id];
            let chosen = if i < n {
                question.correct_answer
            } else {
                // Any index other than the correct one.
                (question.correct_answer + 1) % question.options.len()
            };
            answers.insert(id.clone(), chosen);
        }
        answers
    }

    #[test]
    fn test_tier_table_for_four_questions() {
        let bank = test_bank(4);
        let selected: Vec<String> = bank.keys().cloned().collect();

        let cases = [
            (4, ScoreTier::Excellent),
            (3, ScoreTier::VeryGood),
            (2, ScoreTier::Good),
            (1, ScoreTier::NeedsImprovement),
            (0, ScoreTier::Beginner),
        ];

        for (correct, expected) in cases {
            let answers = answer_first_n_correctly(&bank, &selected, correct);
            let summary = score_answers(&answers, &selected, &bank);
            assert_eq!(summary.correct_count, correct);
            assert_eq!(summary.total, 4);
            assert_eq!(summary.tier, expected, "{}/4 correct", correct);
        }
    }

    #[test]
    fn test_unanswered_questions_count_as_incorrect() {
        let bank = test_bank(4);
        let selected: Vec<String> = bank.keys().cloned().collect();

        // Only one answer recorded, and it is correct.
        let mut answers = HashMap::new();
        let first = &selected[0];
        answers.insert(first.clone(), bank[first].correct_answer);

        let summary = score_answers(&answers, &selected, &bank);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.tier, ScoreTier::NeedsImprovement);
    }

    #[test]
    fn test_answers_for_unknown_ids_are_ignored() {
        let bank = test_bank(2);
        let selected: Vec<String> = bank.keys().cloned().collect();

        let mut answers = answer_first_n_correctly(&bank, &selected, 2);
        answers.insert("ghost".to_string(), 0);

        let summary = score_answers(&answers, &selected, &bank);
        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.tier, ScoreTier::Excellent);
    }

    #[test]
    fn test_empty_selection_scores_beginner() {
        let bank = test_bank(4);
        let answers = HashMap::new();

        let summary = score_answers(&answers, &[], &bank);
        assert_eq!(summary.correct_count, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.tier, ScoreTier::Beginner);
    }

    #[test]
    fn test_tier_is_monotone_in_correct_count() {
        for total in 1..=8usize {
            let mut previous = classify(0, total);
            for correct in 1..=total {
                let current = classify(correct, total);
                assert!(
                    current >= previous,
                    "{}/{} ranked below {}/{}",
                    correct,
                    total,
                    correct - 1,
                    total
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_exact_boundaries() {
        // 3/4 sits exactly on the 0.75 boundary.
        assert_eq!(classify(3, 4), ScoreTier::VeryGood);
        // 2/4 sits exactly on the 0.5 boundary.
        assert_eq!(classify(2, 4), ScoreTier::Good);
        // 1/4 sits exactly on the 0.25 boundary.
        assert_eq!(classify(1, 4), ScoreTier::NeedsImprovement);
        // A full score on a single question is Excellent, not VeryGood.
        assert_eq!(classify(1, 1), ScoreTier::Excellent);
    }
}
