pub mod feedback_form;
pub mod pages;
pub mod review_form;
pub mod reviews;

pub use feedback_form::{
    get_feedback_form_handler, submit_club_suggestion_handler, submit_feedback_handler,
};
pub use pages::{
    health_handler, home_handler, not_found_handler, terms_handler, thank_you_club_handler,
    thank_you_feedback_handler, thank_you_review_handler,
};
pub use review_form::{get_review_form_handler, submit_review_handler};
pub use reviews::{expand_handler, get_reviews_handler, vote_handler};

use crate::errors::SubmitError;

/// Text shown above a form whose submission failed. `what` names the thing
/// being submitted, e.g. "your review".
pub fn failure_message(what: &str, err: &SubmitError) -> String {
    match err {
        SubmitError::Invalid(msg) => msg.clone(),
        SubmitError::AlreadySubmitting => err.to_string(),
        SubmitError::Rejected(msg) | SubmitError::Unexpected(msg) => {
            format!("There was a problem submitting {what}:\n\n{msg}")
        }
    }
}
