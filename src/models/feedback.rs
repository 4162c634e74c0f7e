use serde::Serialize;

/// Product feedback row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewFeedback {
    pub criteria: String,
    pub features: String,
    pub other: Option<String>,
    pub email: Option<String>,
}
