pub mod club;
pub mod feedback;
pub mod fields;
pub mod review;
pub mod submission;

pub use club::ClubSuggestionForm;
pub use feedback::FeedbackForm;
pub use fields::{FieldPresence, time_ago_field};
pub use review::ReviewForm;
pub use submission::{FormSubmission, SubmissionFlow, SubmissionState, SubmissionTokens};
