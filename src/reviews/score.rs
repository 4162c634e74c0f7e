pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';
pub const NO_SCORE: &str = "—";

/// Rounds to the nearest integer with halves going up (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Mean of the present, finite ratings rounded to one decimal place.
/// Returns `None` when nothing usable remains.
pub fn overall_score(ratings: &[Option<f64>]) -> Option<f64> {
    let valid: Vec<f64> = ratings
        .iter()
        .flatten()
        .copied()
        .filter(|r| r.is_finite())
        .collect();

    if valid.is_empty() {
        return None;
    }

    let mean = valid.iter().sum::<f64>() / valid.len() as f64;
    Some(round_half_up(mean * 10.0) / 10.0)
}

/// Five glyphs for an overall score; the score is rounded before filling.
pub fn stars_string(score: Option<f64>) -> String {
    let full = match score {
        Some(s) if s.is_finite() => round_half_up(s),
        _ => return EMPTY_STAR.to_string().repeat(5),
    };
    (1..=5)
        .map(|i| if f64::from(i) <= full { FILLED_STAR } else { EMPTY_STAR })
        .collect()
}

/// Five glyphs for a single category rating, compared against the raw value.
pub fn mini_stars_string(rating: Option<f64>) -> String {
    let rating = match rating {
        Some(r) if r.is_finite() && r != 0.0 => r,
        _ => return EMPTY_STAR.to_string().repeat(5),
    };
    (1..=5)
        .map(|i| if f64::from(i) <= rating { FILLED_STAR } else { EMPTY_STAR })
        .collect()
}

/// One-decimal display of a score, or the placeholder dash.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{s:.1}"),
        _ => NO_SCORE.to_string(),
    }
}

/// Category ratings of zero show the placeholder, like missing ones.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 => format_score(Some(r)),
        _ => NO_SCORE.to_string(),
    }
}
