pub mod club_suggestion;
pub mod feedback;
pub mod listing;
pub mod review;
pub mod vote;

pub use club_suggestion::NewClubSuggestion;
pub use feedback::NewFeedback;
pub use review::{Category, CoachTiming, NewReview, ReviewRecord, TimeAgo};
pub use vote::{VoteChoice, VoteState};

/// Tables the hosted store exposes to this site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Reviews,
    ClubSuggestions,
    Feedback,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Reviews => "review_form",
            Table::ClubSuggestions => "club_suggestion_form",
            Table::Feedback => "feedback_form",
        }
    }
}
