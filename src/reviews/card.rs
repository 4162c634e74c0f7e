use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{Category, CoachTiming, ReviewRecord},
    reviews::{
        format::{format_reviewer_name, pretty_state, relative_submitted},
        score::{format_rating, format_score, mini_stars_string, overall_score, stars_string},
    },
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub label: &'static str,
    pub stars: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingLabel {
    pub text: String,
    pub current: bool,
}

impl TimingLabel {
    pub fn for_record(record: &ReviewRecord) -> Self {
        match record.coach_timing {
            Some(CoachTiming::Current) => Self {
                text: "My child's current coach".to_string(),
                current: true,
            },
            Some(CoachTiming::Past) => {
                let extra = record
                    .time_ago
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(|t| format!(" ({})", t.replace('-', " ")))
                    .unwrap_or_default();
                Self {
                    text: format!("My child's past coach{extra}"),
                    current: false,
                }
            }
            None => Self {
                text: "Coach relationship not specified".to_string(),
                current: false,
            },
        }
    }
}

/// Everything the listing page shows for one record, computed at render time.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    pub id: String,
    pub coach_name: String,
    pub club_line: String,
    pub submitted: String,
    pub reviewer: String,
    pub overall: Option<f64>,
    pub overall_stars: String,
    pub overall_text: String,
    pub categories: Vec<CategoryRow>,
    pub timing: TimingLabel,
    pub body: String,
}

impl ReviewCard {
    pub fn from_record(record: &ReviewRecord, now: DateTime<Utc>) -> Self {
        let overall = overall_score(&record.ratings());

        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let rating = record.rating(category);
                CategoryRow {
                    label: category.card_label(),
                    stars: mini_stars_string(rating),
                    value: format_rating(rating),
                }
            })
            .collect();

        Self {
            id: record.review_id.clone(),
            coach_name: non_blank(record.coach_name.as_deref())
                .unwrap_or("Unknown Coach")
                .to_string(),
            club_line: club_line(record),
            submitted: relative_submitted(record.created_at.as_deref(), now),
            reviewer: format_reviewer_name(record.reviewer_full_name.as_deref()),
            overall,
            overall_stars: stars_string(overall),
            overall_text: format_score(overall),
            categories,
            timing: TimingLabel::for_record(record),
            body: non_blank(record.overall_review.as_deref())
                .unwrap_or("No written review provided.")
                .to_string(),
        }
    }

    pub fn meta_line(&self) -> String {
        format!("{} • by {}", self.submitted, self.reviewer)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn club_line(record: &ReviewRecord) -> String {
    let team = [record.age_group.as_deref(), record.team_gender.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    [
        pretty_state(record.state.as_deref()),
        Some(
            non_blank(record.club_name.as_deref())
                .unwrap_or("Unknown Club")
                .to_string(),
        ),
        Some(team),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> ReviewRecord {
        ReviewRecord {
            review_id: "r1".to_string(),
            created_at: Some("2025-05-01T12:00:00+00:00".to_string()),
            reviewer_full_name: Some("Jordan Smith".to_string()),
            coach_timing: Some(CoachTiming::Past),
            time_ago: Some("1-2-years".to_string()),
            state: Some("utah".to_string()),
            club_name: Some("La Roca FC".to_string()),
            coach_name: Some("Alex Morgan".to_string()),
            team_gender: Some("girls".to_string()),
            age_group: Some("U12".to_string()),
            technical_rating: Some(5.0),
            communication_rating: Some(4.0),
            development_rating: None,
            attitude_rating: Some(3.0),
            professionalism_rating: Some(5.0),
            overall_review: Some("Great season.".to_string()),
        }
    }

    #[test]
    fn card_collects_derived_fields() {
        let now = Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap();
        let card = ReviewCard::from_record(&record(), now);

        assert_eq!(card.coach_name, "Alex Morgan");
        assert_eq!(card.club_line, "Utah | La Roca FC | U12 girls");
        assert_eq!(card.meta_line(), "Submitted 3 days ago • by Jordan S.");
        assert_eq!(card.overall, Some(4.3));
        assert_eq!(card.overall_stars, "★★★★☆");
        assert_eq!(card.overall_text, "4.3");
        assert_eq!(card.categories[2].value, "—");
        assert_eq!(card.categories[2].stars, "☆☆☆☆☆");
        assert_eq!(card.timing.text, "My child's past coach (1 2 years)");
        assert!(!card.timing.current);
        assert_eq!(card.body, "Great season.");
    }

    #[test]
    fn empty_record_uses_placeholders() {
        let empty = ReviewRecord {
            review_id: "r2".to_string(),
            ..Default::default()
        };
        let card = ReviewCard::from_record(&empty, Utc::now());

        assert_eq!(card.coach_name, "Unknown Coach");
        assert_eq!(card.club_line, "Unknown Club");
        assert_eq!(card.reviewer, "Anonymous");
        assert_eq!(card.submitted, "Submitted recently");
        assert_eq!(card.overall, None);
        assert_eq!(card.overall_text, "—");
        assert_eq!(card.timing.text, "Coach relationship not specified");
        assert_eq!(card.body, "No written review provided.");
    }
}
