use serde::Deserialize;
use uuid::Uuid;

use crate::{
    forms::{
        fields::{optional, required},
        submission::FormSubmission,
    },
    models::{NewFeedback, Table},
};

pub const MISSING_FEEDBACK_FIELDS: &str = "Please fill out the required fields.";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedbackForm {
    #[serde(rename = "ratingCriteria")]
    pub rating_criteria: String,
    #[serde(rename = "featureIdeas")]
    pub feature_ideas: String,
    #[serde(rename = "generalFeedback")]
    pub general_feedback: String,
    #[serde(rename = "feedbackEmail")]
    pub feedback_email: String,
    #[serde(rename = "submissionToken")]
    pub submission_token: String,
}

impl FeedbackForm {
    pub fn token(&self) -> Option<Uuid> {
        Uuid::parse_str(self.submission_token.trim()).ok()
    }
}

impl FormSubmission for FeedbackForm {
    type Row = NewFeedback;

    const TABLE: Table = Table::Feedback;
    const CONFIRMATION_PATH: &'static str = "/thankyou_feedback";

    fn validate(&self) -> Result<NewFeedback, String> {
        Ok(NewFeedback {
            criteria: required(&self.rating_criteria, MISSING_FEEDBACK_FIELDS)?,
            features: required(&self.feature_ideas, MISSING_FEEDBACK_FIELDS)?,
            other: optional(&self.general_feedback),
            email: optional(&self.feedback_email),
        })
    }
}
