use serde::Deserialize;
use uuid::Uuid;

use crate::{
    forms::{
        fields::{optional, required},
        submission::FormSubmission,
    },
    models::{NewClubSuggestion, Table},
};

pub const MISSING_CLUB_FIELDS: &str = "Please fill out at least the club name and state/location.";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClubSuggestionForm {
    #[serde(rename = "clubName")]
    pub club_name: String,
    #[serde(rename = "clubLocation")]
    pub club_location: String,
    #[serde(rename = "clubCity")]
    pub club_city: String,
    #[serde(rename = "clubEmail")]
    pub club_email: String,
    #[serde(rename = "clubNotes")]
    pub club_notes: String,
    #[serde(rename = "submissionToken")]
    pub submission_token: String,
}

impl ClubSuggestionForm {
    pub fn token(&self) -> Option<Uuid> {
        Uuid::parse_str(self.submission_token.trim()).ok()
    }
}

impl FormSubmission for ClubSuggestionForm {
    type Row = NewClubSuggestion;

    const TABLE: Table = Table::ClubSuggestions;
    const CONFIRMATION_PATH: &'static str = "/thankyou_clubsug";

    fn validate(&self) -> Result<NewClubSuggestion, String> {
        Ok(NewClubSuggestion {
            club_name: required(&self.club_name, MISSING_CLUB_FIELDS)?,
            state: required(&self.club_location, MISSING_CLUB_FIELDS)?,
            city: optional(&self.club_city),
            email: optional(&self.club_email),
            additional_notes: optional(&self.club_notes),
        })
    }
}
