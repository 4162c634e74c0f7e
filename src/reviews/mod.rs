pub mod card;
pub mod confirmation;
pub mod format;
pub mod score;

pub use card::{CategoryRow, ReviewCard, TimingLabel};
pub use confirmation::{just_submitted, strip_submitted};
pub use format::{format_reviewer_name, relative_submitted};
pub use score::{mini_stars_string, overall_score, stars_string};
