use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewClubSuggestion {
    pub club_name: String,
    pub state: String,
    pub city: Option<String>,
    pub email: Option<String>,
    pub additional_notes: Option<String>,
}
