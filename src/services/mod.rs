pub mod randomizer;
pub mod review;
pub mod scorer;
pub mod selector;

pub use randomizer::{build_display, DEFAULT_DISTRACTOR_COUNT};
pub use review::{build_review, ReviewEntry};
pub use scorer::{score_answers, ScoreSummary};
pub use selector::{select_questions, DEFAULT_QUESTION_COUNT};
