use crate::models::CoachTiming;

/// Clubs offered on the review form, grouped by the region stored with the review.
pub const CLUB_DIRECTORY: &[(&str, &[&str])] = &[
    (
        "Utah",
        &[
            "La Roca FC",
            "RSL Academy",
            "Forza FC",
            "Impact United Soccer Club",
            "Utah Avalanche Soccer Club",
            "Utah Arsenal FC",
        ],
    ),
    (
        "Arizona",
        &[
            "Phoenix Rising FC Youth",
            "RSL-AZ",
            "Arizona Arsenal SC",
            "FC Tucson Youth Soccer",
            "Arizona Soccer Club (AZSC)",
            "FC Arizona",
            "Soccer Club Del Sol",
            "Phoenix Rush SC",
        ],
    ),
];

pub const TEAM_GENDERS: &[(&str, &str)] = &[("boys", "Boys"), ("girls", "Girls"), ("both", "Both")];

pub const AGE_GROUPS: &[(&str, &str)] = &[
    ("U6", "U6 (Under 6)"),
    ("U8", "U8 (Under 8)"),
    ("U10", "U10 (Under 10)"),
    ("U12", "U12 (Under 12)"),
    ("U14", "U14 (Under 14)"),
    ("U16", "U16 (Under 16)"),
    ("U18", "U18 (Under 18)"),
    ("U19+", "U19+ (Under 19 and older)"),
];

pub fn club_region(club_name: &str) -> Option<&'static str> {
    CLUB_DIRECTORY
        .iter()
        .find(|(_, clubs)| clubs.contains(&club_name))
        .map(|(region, _)| *region)
}

pub fn is_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(v, _)| *v == value)
}

/// Trimmed value, or `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn required(value: &str, message: &str) -> Result<String, String> {
    optional(value).ok_or_else(|| message.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPresence {
    pub visible: bool,
    pub required: bool,
}

/// The "how long ago" select exists only for past coaches.
pub fn time_ago_field(coach_timing: Option<CoachTiming>) -> FieldPresence {
    let past = coach_timing == Some(CoachTiming::Past);
    FieldPresence {
        visible: past,
        required: past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ago_follows_coach_timing() {
        assert_eq!(
            time_ago_field(Some(CoachTiming::Past)),
            FieldPresence {
                visible: true,
                required: true
            }
        );
        assert!(!time_ago_field(Some(CoachTiming::Current)).visible);
        assert!(!time_ago_field(None).required);
    }

    #[test]
    fn clubs_map_to_regions() {
        assert_eq!(club_region("RSL-AZ"), Some("Arizona"));
        assert_eq!(club_region("La Roca FC"), Some("Utah"));
        assert_eq!(club_region("Nowhere United"), None);
    }

    #[test]
    fn blank_optionals_are_absent() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" a@b.co "), Some("a@b.co".to_string()));
    }
}
