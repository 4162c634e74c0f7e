use url::form_urlencoded;

const SUBMITTED_PARAM: &str = "submitted";

/// True when the query carries `submitted=1`.
pub fn just_submitted(query: Option<&str>) -> bool {
    form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .any(|(k, v)| k == SUBMITTED_PARAM && v == "1")
}

/// Address of the listing with the `submitted` flag removed and every other
/// parameter kept, so the flag is only acted on once.
pub fn strip_submitted(path: &str, query: Option<&str>) -> String {
    let remaining: Vec<(String, String)> =
        form_urlencoded::parse(query.unwrap_or_default().as_bytes())
            .filter(|(k, _)| k != SUBMITTED_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

    if remaining.is_empty() {
        return path.to_string();
    }

    let qs = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(remaining)
        .finish();
    format!("{path}?{qs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_detected_only_when_set_to_one() {
        assert!(just_submitted(Some("submitted=1")));
        assert!(just_submitted(Some("sort=new&submitted=1")));
        assert!(!just_submitted(Some("submitted=0")));
        assert!(!just_submitted(None));
    }

    #[test]
    fn other_parameters_survive() {
        assert_eq!(strip_submitted("/reviews", Some("submitted=1")), "/reviews");
        assert_eq!(
            strip_submitted("/reviews", Some("submitted=1&club=La+Roca")),
            "/reviews?club=La+Roca"
        );
        assert_eq!(strip_submitted("/reviews", None), "/reviews");
    }
}
