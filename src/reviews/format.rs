use chrono::{DateTime, NaiveDateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Accepts RFC 3339 timestamps and naive ones, which are read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Coarse age of a review. There is no month or year bucket.
pub fn relative_submitted(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(created) = created_at.and_then(parse_timestamp) else {
        return "Submitted recently".to_string();
    };

    let days = (now - created).num_milliseconds().div_euclid(MILLIS_PER_DAY);

    if days <= 0 {
        return "Submitted today".to_string();
    }
    if days == 1 {
        return "Submitted 1 day ago".to_string();
    }
    if days < 7 {
        return format!("Submitted {days} days ago");
    }

    let weeks = days / 7;
    if weeks == 1 {
        "Submitted 1 week ago".to_string()
    } else {
        format!("Submitted {weeks} weeks ago")
    }
}

/// First name plus last initial, so full names are never shown.
pub fn format_reviewer_name(full_name: Option<&str>) -> String {
    let parts: Vec<&str> = full_name.unwrap_or_default().split_whitespace().collect();
    match parts.as_slice() {
        [] => "Anonymous".to_string(),
        [only] => only.to_string(),
        [first, .., last] => {
            let initial: String = last.chars().take(1).flat_map(char::to_uppercase).collect();
            format!("{first} {initial}.")
        }
    }
}

/// `"utah"` -> `"Utah"`. Blank input gives `None`.
pub fn pretty_state(state: Option<&str>) -> Option<String> {
    let state = state?.trim();
    let mut chars = state.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_timestamps_are_utc() {
        let parsed = parse_timestamp("2025-03-01T10:00:00.123456").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-01T10:00:00.123456+00:00");
        assert!(parse_timestamp("2025-03-01 10:00:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn state_is_capitalized() {
        assert_eq!(pretty_state(Some("  aRIZONA ")), Some("Arizona".to_string()));
        assert_eq!(pretty_state(Some("   ")), None);
        assert_eq!(pretty_state(None), None);
    }

    #[test]
    fn middle_names_are_dropped() {
        assert_eq!(
            format_reviewer_name(Some("  mary  ann   jones ")),
            "mary J."
        );
    }
}
