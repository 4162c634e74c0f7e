use serde::Deserialize;
use uuid::Uuid;

use crate::{
    forms::{
        fields::{AGE_GROUPS, TEAM_GENDERS, club_region, is_option, optional, required},
        submission::FormSubmission,
    },
    models::{Category, CoachTiming, NewReview, Table, TimeAgo},
};

pub const MISSING_CONTACT: &str =
    "Please provide at least one contact method (email or phone) for verification.";
pub const MISSING_RATINGS: &str = "Please rate all categories before submitting.";

/// Raw review form fields exactly as posted. Every field is kept as entered so
/// a failed submission can be re-rendered unchanged.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReviewForm {
    #[serde(rename = "reviewerName")]
    pub reviewer_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "coachTiming")]
    pub coach_timing: String,
    #[serde(rename = "timeAgo")]
    pub time_ago: String,
    #[serde(rename = "clubName")]
    pub club_name: String,
    #[serde(rename = "coachName")]
    pub coach_name: String,
    #[serde(rename = "teamGender")]
    pub team_gender: String,
    #[serde(rename = "ageGroup")]
    pub age_group: String,

    #[serde(rename = "rating-technical")]
    pub rating_technical: String,
    #[serde(rename = "rating-communication")]
    pub rating_communication: String,
    #[serde(rename = "rating-development")]
    pub rating_development: String,
    #[serde(rename = "rating-attitude")]
    pub rating_attitude: String,
    #[serde(rename = "rating-organization")]
    pub rating_organization: String,

    #[serde(rename = "explanation-technical")]
    pub explanation_technical: String,
    #[serde(rename = "explanation-communication")]
    pub explanation_communication: String,
    #[serde(rename = "explanation-development")]
    pub explanation_development: String,
    #[serde(rename = "explanation-attitude")]
    pub explanation_attitude: String,
    #[serde(rename = "explanation-organization")]
    pub explanation_organization: String,

    #[serde(rename = "reviewText")]
    pub review_text: String,

    #[serde(rename = "submissionToken")]
    pub submission_token: String,
}

impl ReviewForm {
    pub fn coach_timing(&self) -> Option<CoachTiming> {
        CoachTiming::parse(&self.coach_timing)
    }

    pub fn raw_rating(&self, category: Category) -> &str {
        match category {
            Category::Technical => &self.rating_technical,
            Category::Communication => &self.rating_communication,
            Category::Development => &self.rating_development,
            Category::Attitude => &self.rating_attitude,
            Category::Professionalism => &self.rating_organization,
        }
    }

    pub fn explanation(&self, category: Category) -> &str {
        match category {
            Category::Technical => &self.explanation_technical,
            Category::Communication => &self.explanation_communication,
            Category::Development => &self.explanation_development,
            Category::Attitude => &self.explanation_attitude,
            Category::Professionalism => &self.explanation_organization,
        }
    }

    /// A rating is present only when it parses to a whole number in 1..=5.
    pub fn rating(&self, category: Category) -> Option<u8> {
        self.raw_rating(category)
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|r| (1..=5).contains(r))
    }

    pub fn token(&self) -> Option<Uuid> {
        Uuid::parse_str(self.submission_token.trim()).ok()
    }
}

impl FormSubmission for ReviewForm {
    type Row = NewReview;

    const TABLE: Table = Table::Reviews;
    const CONFIRMATION_PATH: &'static str = "/thankyou_review";

    fn validate(&self) -> Result<NewReview, String> {
        let email = optional(&self.email);
        let phone_number = optional(&self.phone);
        if email.is_none() && phone_number.is_none() {
            return Err(MISSING_CONTACT.to_string());
        }

        let [technical, communication, development, attitude, professionalism] =
            Category::ALL.map(|c| self.rating(c));
        let (
            Some(technical_rating),
            Some(communication_rating),
            Some(development_rating),
            Some(attitude_rating),
            Some(professionalism_rating),
        ) = (technical, communication, development, attitude, professionalism)
        else {
            return Err(MISSING_RATINGS.to_string());
        };

        let reviewer_full_name = required(&self.reviewer_name, "Please enter your full name.")?;

        let coach_timing = self.coach_timing().ok_or_else(|| {
            "Please tell us whether this is your child's current or past coach.".to_string()
        })?;

        // Only past coaches carry a time bucket; anything sent for a current coach is dropped.
        let time_ago = match coach_timing {
            CoachTiming::Current => None,
            CoachTiming::Past => Some(TimeAgo::parse(&self.time_ago).ok_or_else(|| {
                "Please select how long ago this coach worked with your child.".to_string()
            })?),
        };

        let club_name = required(&self.club_name, "Please select a club.")?;
        let coach_name = required(&self.coach_name, "Please enter the coach's name.")?;

        let team_gender = self.team_gender.trim();
        if !is_option(TEAM_GENDERS, team_gender) {
            return Err("Please select the team gender.".to_string());
        }
        let age_group = self.age_group.trim();
        if !is_option(AGE_GROUPS, age_group) {
            return Err("Please select an age group.".to_string());
        }

        let overall_review = required(&self.review_text, "Please write your review.")?;

        Ok(NewReview {
            reviewer_full_name,
            coach_timing,
            time_ago,
            state: club_region(&club_name).map(str::to_string),
            club_name,
            coach_name,
            team_gender: team_gender.to_string(),
            age_group: age_group.to_string(),
            technical_rating,
            communication_rating,
            development_rating,
            attitude_rating,
            professionalism_rating,
            overall_review,
            email,
            phone_number,
            technical_comment: optional(&self.explanation_technical),
            communication_comment: optional(&self.explanation_communication),
            development_comment: optional(&self.explanation_development),
            attitude_comment: optional(&self.explanation_attitude),
            professionalism_comment: optional(&self.explanation_organization),
        })
    }
}
