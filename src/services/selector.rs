use std::collections::BTreeMap;

use rand::Rng;

use crate::models::domain::Question;

/// How many questions a session asks by default.
pub const DEFAULT_QUESTION_COUNT: usize = 4;

/// Draws `count` question ids from the bank uniformly at random, without
/// replacement. Asking for more than the bank holds clamps to the bank size.
///
/// The returned order is the draw order, and it matters: it is the order in
/// which the questions are later unlocked and answered.
pub fn select_questions<R: Rng + ?Sized>(
    bank: &BTreeMap<String, Question>,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<&String> = bank.keys().collect();
    let take = count.min(pool.len());

    let mut selected = Vec::with_capacity(take);
    for _ in 0..take {
        let slot = rng.gen_range(0..pool.len());
        selected.push(pool.remove(slot).clone());
    }
    selected
}
