use uuid::Uuid;

use crate::{
    forms::{
        ReviewForm,
        fields::{AGE_GROUPS, CLUB_DIRECTORY, TEAM_GENDERS, time_ago_field},
    },
    models::{Category, TimeAgo},
    pages::layout::{attr, render_page, text},
};

fn selected(current: &str, value: &str) -> &'static str {
    if current.trim() == value { " selected" } else { "" }
}

fn checked(current: &str, value: &str) -> &'static str {
    if current.trim() == value { " checked" } else { "" }
}

fn options(current: &str, placeholder: &str, choices: &[(&str, &str)]) -> String {
    let mut html = format!("<option value=\"\">{}</option>", text(placeholder));
    for (value, label) in choices {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            attr(value),
            selected(current, value),
            text(label)
        ));
    }
    html
}

fn club_options(current: &str) -> String {
    let mut html = "<option value=\"\">Select a club</option>".to_string();
    for (region, clubs) in CLUB_DIRECTORY {
        html.push_str(&format!("<optgroup label=\"{} Clubs\">", attr(region)));
        for club in *clubs {
            html.push_str(&format!(
                "<option value=\"{v}\"{s}>{t}</option>",
                v = attr(club),
                s = selected(current, club),
                t = text(club)
            ));
        }
        html.push_str("</optgroup>");
    }
    html
}

fn rating_block(form: &ReviewForm, category: Category) -> String {
    let key = category.form_key();
    let current = form.raw_rating(category);
    let choices: String = (1..=5)
        .map(|n| {
            let value = n.to_string();
            format!(
                "<label><input type=\"radio\" name=\"rating-{key}\" value=\"{value}\"{c} required> {stars}</label>",
                c = checked(current, &value),
                stars = "★".repeat(n),
            )
        })
        .collect();

    format!(
        r#"<div class="rating"><label>{label} *</label><div class="choices">{choices}</div>
<textarea name="explanation-{key}" placeholder="Optional: Explain the rating you gave">{explanation}</textarea></div>"#,
        label = text(category.form_label()),
        explanation = text(form.explanation(category)),
    )
}

/// Renders the review form with `form`'s values filled in.
pub fn render(form: &ReviewForm, error: Option<&str>, token: Uuid) -> String {
    let error_html = error
        .map(|msg| format!("<div class=\"error\">{}</div>", text(msg)))
        .unwrap_or_default();

    let past = time_ago_field(form.coach_timing());
    let time_ago_choices: Vec<(&str, &str)> =
        TimeAgo::ALL.iter().map(|t| (t.as_str(), t.label())).collect();
    let time_ago_class = if past.visible { "" } else { " class=\"hidden\"" };
    let time_ago_required = if past.required { " required" } else { "" };

    let ratings: String = Category::ALL
        .iter()
        .map(|&c| rating_block(form, c))
        .collect();

    let body = format!(
        r#"<section class="panel">
<p><a href="/">← Back to Home</a></p>
<h1>Leave a Coach Review</h1>
<p class="hint">Help other parents make informed decisions about their child's soccer coach</p>
{error_html}
<form method="post" action="/review_form" id="reviewForm">
<input type="hidden" name="submissionToken" value="{token}">
<h2>Your Information</h2>
<label>Full Name *</label>
<input type="text" name="reviewerName" value="{reviewer_name}" placeholder="Your name will be displayed publicly" required>
<label>Email</label>
<input type="email" name="email" value="{email}" placeholder="your@email.com">
<label>Phone Number</label>
<input type="tel" name="phone" value="{phone}" placeholder="(123) 456-7890">
<p class="hint">* At least one contact method required for verification</p>

<h2>Coach &amp; Team Information</h2>
<label>Is this your child's current coach or a past coach? *</label>
<label><input type="radio" name="coachTiming" value="current"{current_checked} required> Current Coach</label>
<label><input type="radio" name="coachTiming" value="past"{past_checked}> Past Coach</label>
<div id="pastCoachTime"{time_ago_class}>
<label>How long ago? *</label>
<select name="timeAgo" id="timeAgo"{time_ago_required}>{time_ago_options}</select>
</div>
<label>Club Name *</label>
<select name="clubName" required>{club_options}</select>
<p class="hint"><a href="/feedback_form">Don't see your club? Suggest it here</a></p>
<label>Coach Name *</label>
<input type="text" name="coachName" value="{coach_name}" placeholder="First and Last Name" required>
<label>Team Gender *</label>
<select name="teamGender" required>{gender_options}</select>
<label>Age Group *</label>
<select name="ageGroup" required>{age_options}</select>

<h2>Rate the Coach</h2>
<p class="hint">Rate each category from 1-5 stars. Your overall rating will be the average of these categories.</p>
{ratings}

<label>Your Review *</label>
<textarea name="reviewText" placeholder="Share your experience with this coach..." required>{review_text}</textarea>
<p style="margin-top:24px"><button class="btn" type="submit" id="submitButton">Submit Review</button></p>
</form>
<p class="hint">By submitting you agree to our <a href="/terms">Terms of Service</a>.</p>
</section>
<script>
document.querySelectorAll('input[name=coachTiming]').forEach(function (radio) {{
  radio.addEventListener('change', function () {{
    var past = radio.value === 'past' && radio.checked;
    document.getElementById('pastCoachTime').classList.toggle('hidden', !past);
    document.getElementById('timeAgo').required = past;
  }});
}});
document.getElementById('reviewForm').addEventListener('submit', function () {{
  var button = document.getElementById('submitButton');
  button.disabled = true;
  button.textContent = 'Submitting...';
}});
</script>"#,
        reviewer_name = attr(&form.reviewer_name),
        email = attr(&form.email),
        phone = attr(&form.phone),
        current_checked = checked(&form.coach_timing, "current"),
        past_checked = checked(&form.coach_timing, "past"),
        time_ago_options = options(&form.time_ago, "Select timeframe", &time_ago_choices),
        club_options = club_options(&form.club_name),
        coach_name = attr(&form.coach_name),
        gender_options = options(&form.team_gender, "Select option", TEAM_GENDERS),
        age_options = options(&form.age_group, "Select age group", AGE_GROUPS),
        review_text = text(&form.review_text),
    );

    render_page("Leave a Coach Review", "/review_form", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_bucket_is_hidden_for_current_coach() {
        let form = ReviewForm {
            coach_timing: "current".into(),
            ..Default::default()
        };
        let html = render(&form, None, Uuid::nil());
        assert!(html.contains("<div id=\"pastCoachTime\" class=\"hidden\">"));
        assert!(html.contains("<select name=\"timeAgo\" id=\"timeAgo\">"));
    }

    #[test]
    fn retained_values_are_escaped() {
        let form = ReviewForm {
            coach_timing: "past".into(),
            coach_name: "Sam \"Coach\" Lee".into(),
            club_name: "RSL-AZ".into(),
            rating_attitude: "4".into(),
            review_text: "<b>great</b>".into(),
            ..Default::default()
        };
        let html = render(&form, Some("Please rate all categories before submitting."), Uuid::nil());

        assert!(html.contains("<div id=\"pastCoachTime\">"));
        assert!(html.contains("id=\"timeAgo\" required"));
        assert!(html.contains("value=\"Sam &quot;Coach&quot; Lee\""));
        assert!(html.contains("<option value=\"RSL-AZ\" selected>"));
        assert!(html.contains("name=\"rating-attitude\" value=\"4\" checked"));
        assert!(html.contains("&lt;b&gt;great&lt;/b&gt;"));
        assert!(html.contains("Please rate all categories before submitting."));
    }
}
