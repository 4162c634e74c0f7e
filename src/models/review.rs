use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Columns requested when listing reviews.
pub const REVIEW_COLUMNS: &str = "review_id,created_at,reviewer_full_name,coach_timing,time_ago,\
state,club_name,coach_name,team_gender,age_group,technical_rating,communication_rating,\
development_rating,attitude_rating,professionalism_rating,overall_review";

/// One stored review as read back from the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    #[serde(deserialize_with = "id_string")]
    pub review_id: String,
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub reviewer_full_name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub coach_timing: Option<CoachTiming>,
    #[serde(default)]
    pub time_ago: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub coach_name: Option<String>,
    #[serde(default)]
    pub team_gender: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub technical_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub communication_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub development_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub attitude_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub professionalism_rating: Option<f64>,

    #[serde(default)]
    pub overall_review: Option<String>,
}

impl ReviewRecord {
    pub fn rating(&self, category: Category) -> Option<f64> {
        match category {
            Category::Technical => self.technical_rating,
            Category::Communication => self.communication_rating,
            Category::Development => self.development_rating,
            Category::Attitude => self.attitude_rating,
            Category::Professionalism => self.professionalism_rating,
        }
    }

    pub fn ratings(&self) -> [Option<f64>; 5] {
        Category::ALL.map(|c| self.rating(c))
    }
}

// Values of the wrong shape decode as absent instead of failing the whole listing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "review_id must be a string or number, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoachTiming {
    Current,
    Past,
}

impl CoachTiming {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "current" => Some(CoachTiming::Current),
            "past" => Some(CoachTiming::Past),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoachTiming::Current => "current",
            CoachTiming::Past => "past",
        }
    }
}

/// How long ago a past coach coached the reviewer's child.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeAgo {
    #[serde(rename = "within-1-year")]
    WithinOneYear,
    #[serde(rename = "1-2-years")]
    OneToTwoYears,
    #[serde(rename = "2-3-years")]
    TwoToThreeYears,
    #[serde(rename = "3-plus-years")]
    ThreePlusYears,
}

impl TimeAgo {
    pub const ALL: [TimeAgo; 4] = [
        TimeAgo::WithinOneYear,
        TimeAgo::OneToTwoYears,
        TimeAgo::TwoToThreeYears,
        TimeAgo::ThreePlusYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeAgo::WithinOneYear => "within-1-year",
            TimeAgo::OneToTwoYears => "1-2-years",
            TimeAgo::TwoToThreeYears => "2-3-years",
            TimeAgo::ThreePlusYears => "3-plus-years",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeAgo::WithinOneYear => "Within the last year",
            TimeAgo::OneToTwoYears => "1-2 years ago",
            TimeAgo::TwoToThreeYears => "2-3 years ago",
            TimeAgo::ThreePlusYears => "3+ years ago",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

/// The five rated aspects of a coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technical,
    Communication,
    Development,
    Attitude,
    Professionalism,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Communication,
        Category::Development,
        Category::Attitude,
        Category::Professionalism,
    ];

    /// Suffix used by the review form's `rating-*` and `explanation-*` fields.
    pub fn form_key(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Communication => "communication",
            Category::Development => "development",
            Category::Attitude => "attitude",
            Category::Professionalism => "organization",
        }
    }

    pub fn form_label(&self) -> &'static str {
        match self {
            Category::Technical => "Coaching Ability / Technical Skills",
            Category::Communication => "Communication with Parents",
            Category::Development => "Player Development",
            Category::Attitude => "Attitude / Positivity",
            Category::Professionalism => "Organization / Professionalism",
        }
    }

    pub fn card_label(&self) -> &'static str {
        match self {
            Category::Technical => "Coaching Ability",
            Category::Communication => "Communication",
            Category::Development => "Player Development",
            Category::Attitude => "Attitude",
            Category::Professionalism => "Professionalism",
        }
    }
}

/// Row inserted into the reviews table. `None` goes out as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewReview {
    pub reviewer_full_name: String,
    pub coach_timing: CoachTiming,
    pub time_ago: Option<TimeAgo>,
    pub state: Option<String>,
    pub club_name: String,
    pub coach_name: String,
    pub team_gender: String,
    pub age_group: String,
    pub technical_rating: u8,
    pub communication_rating: u8,
    pub development_rating: u8,
    pub attitude_rating: u8,
    pub professionalism_rating: u8,
    pub overall_review: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub technical_comment: Option<String>,
    pub communication_comment: Option<String>,
    pub development_comment: Option<String>,
    pub attitude_comment: Option<String>,
    pub professionalism_comment: Option<String>,
}
