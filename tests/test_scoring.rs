use chrono::{Duration, TimeZone, Utc};
use coach_reviews::{
    models::{VoteChoice, VoteState, listing::ListingSession},
    reviews::{
        format_reviewer_name, mini_stars_string, overall_score, relative_submitted, stars_string,
    },
};

#[test]
fn test_overall_score_skips_missing_ratings() {
    assert_eq!(
        overall_score(&[Some(5.0), Some(4.0), None, Some(3.0), Some(5.0)]),
        Some(4.3)
    );
    assert_eq!(overall_score(&[Some(4.0); 5]), Some(4.0));
    assert_eq!(overall_score(&[None; 5]), None);
    assert_eq!(overall_score(&[]), None);
}

#[test]
fn test_overall_score_ignores_non_finite_values() {
    assert_eq!(overall_score(&[Some(f64::NAN), Some(2.0), Some(3.0)]), Some(2.5));
}

#[test]
fn test_stars_always_have_five_glyphs() {
    assert_eq!(stars_string(Some(4.3)), "★★★★☆");
    assert_eq!(stars_string(Some(4.5)), "★★★★★");
    assert_eq!(stars_string(None), "☆☆☆☆☆");

    for score in [0.0, 1.2, 2.5, 3.7, 5.0] {
        assert_eq!(stars_string(Some(score)).chars().count(), 5);
        assert_eq!(mini_stars_string(Some(score)).chars().count(), 5);
    }
}

#[test]
fn test_mini_stars() {
    assert_eq!(mini_stars_string(Some(3.0)), "★★★☆☆");
    assert_eq!(mini_stars_string(Some(0.0)), "☆☆☆☆☆");
    assert_eq!(mini_stars_string(None), "☆☆☆☆☆");
}

#[test]
fn test_relative_submitted_buckets() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let ago = |d: Duration| (now - d).to_rfc3339();

    assert_eq!(
        relative_submitted(Some(&ago(Duration::hours(3))), now),
        "Submitted today"
    );
    assert_eq!(
        relative_submitted(Some(&ago(Duration::days(1))), now),
        "Submitted 1 day ago"
    );
    assert_eq!(
        relative_submitted(Some(&ago(Duration::days(3))), now),
        "Submitted 3 days ago"
    );
    assert_eq!(
        relative_submitted(Some(&ago(Duration::days(8))), now),
        "Submitted 1 week ago"
    );
    assert_eq!(relative_submitted(Some("not a date"), now), "Submitted recently");
    assert_eq!(relative_submitted(None, now), "Submitted recently");
}

#[test]
fn test_reviewer_names() {
    assert_eq!(format_reviewer_name(None), "Anonymous");
    assert_eq!(format_reviewer_name(Some("   ")), "Anonymous");
    assert_eq!(format_reviewer_name(Some("Jordan")), "Jordan");
    assert_eq!(format_reviewer_name(Some("Jordan Smith")), "Jordan S.");
}

#[test]
fn test_vote_toggling() {
    let mut votes = VoteState::default();

    votes.toggle(VoteChoice::Like);
    assert_eq!(
        votes,
        VoteState { like: 1, dislike: 0, my_vote: Some(VoteChoice::Like) }
    );
    votes.toggle(VoteChoice::Like);
    assert_eq!(votes, VoteState::default());

    votes.toggle(VoteChoice::Like);
    votes.toggle(VoteChoice::Dislike);
    assert_eq!(
        votes,
        VoteState { like: 0, dislike: 1, my_vote: Some(VoteChoice::Dislike) }
    );
}

#[test]
fn test_votes_are_kept_per_card() {
    let mut session = ListingSession::new();

    session.vote("r1", VoteChoice::Like);
    assert_eq!(session.votes_for("r1").like, 1);
    assert_eq!(session.votes_for("r2"), VoteState::default());
}
