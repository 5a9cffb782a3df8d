pub mod display;
pub mod story;
pub mod summary;

pub use display::{DisplayOption, DisplayQuestion};
pub use story::{Question, StoryDocument, StoryPage};
pub use summary::{FeedbackSet, ScoreTier, StorySummary};
