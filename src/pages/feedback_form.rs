use uuid::Uuid;

use crate::{
    forms::{ClubSuggestionForm, FeedbackForm},
    pages::layout::{attr, render_page, text},
};

/// State of both forms on the page; only the one that was posted carries an error.
#[derive(Debug, Clone, Default)]
pub struct FeedbackPage {
    pub club: ClubSuggestionForm,
    pub club_error: Option<String>,
    pub club_token: Uuid,
    pub feedback: FeedbackForm,
    pub feedback_error: Option<String>,
    pub feedback_token: Uuid,
}

impl FeedbackPage {
    pub fn fresh() -> Self {
        Self {
            club_token: Uuid::new_v4(),
            feedback_token: Uuid::new_v4(),
            ..Default::default()
        }
    }
}

fn error_box(error: Option<&str>) -> String {
    error
        .map(|msg| format!("<div class=\"error\">{}</div>", text(msg)))
        .unwrap_or_default()
}

pub fn render(page: &FeedbackPage) -> String {
    let club = &page.club;
    let feedback = &page.feedback;

    let body = format!(
        r#"<section class="panel">
<p><a href="/">← Back to Home</a></p>
<h1>Suggest a Club</h1>
<p class="hint">Don't see your club listed? Let us know and we'll add it.</p>
{club_error}
<form method="post" action="/feedback_form/club" id="clubForm">
<input type="hidden" name="submissionToken" value="{club_token}">
<label>Club Name *</label>
<input type="text" name="clubName" value="{club_name}" placeholder="Enter the club name" required>
<label>State/Location *</label>
<input type="text" name="clubLocation" value="{club_location}" placeholder="e.g., Utah, Arizona, California" required>
<label>City <span class="hint">(Optional)</span></label>
<input type="text" name="clubCity" value="{club_city}" placeholder="What city is this club based in?">
<label>Your Email <span class="hint">(Optional - if we need to follow up)</span></label>
<input type="email" name="clubEmail" value="{club_email}" placeholder="your@email.com">
<label>Additional Notes <span class="hint">(Optional)</span></label>
<textarea name="clubNotes" placeholder="Anything else we should know about this club?">{club_notes}</textarea>
<p style="margin-top:20px"><button class="btn" type="submit">Submit Club Suggestion</button></p>
</form>
</section>
<section class="panel">
<h1>Share Your Feedback</h1>
<p class="hint">Help us build the platform parents actually need.</p>
{feedback_error}
<form method="post" action="/feedback_form/feedback" id="feedbackForm">
<input type="hidden" name="submissionToken" value="{feedback_token}">
<label>What other criteria would you like to see when rating coaches? *</label>
<textarea name="ratingCriteria" placeholder="e.g., Punctuality, Game Strategy, Conflict Resolution, etc." required>{criteria}</textarea>
<label>What features would make this platform most useful to you? *</label>
<textarea name="featureIdeas" placeholder="e.g., Coach response to reviews, Parent discussion forums, Team size information, etc." required>{features}</textarea>
<label>Any other feedback or suggestions? <span class="hint">(Optional)</span></label>
<textarea name="generalFeedback" placeholder="Share any other thoughts, concerns, or ideas...">{general}</textarea>
<label>Your Email <span class="hint">(Optional - if you'd like us to follow up)</span></label>
<input type="email" name="feedbackEmail" value="{feedback_email}" placeholder="your@email.com">
<p style="margin-top:20px"><button class="btn" type="submit">Submit Feedback</button></p>
</form>
</section>
<script>
document.querySelectorAll('form').forEach(function (form) {{
  form.addEventListener('submit', function () {{
    form.querySelector('button[type=submit]').disabled = true;
  }});
}});
</script>"#,
        club_error = error_box(page.club_error.as_deref()),
        club_token = page.club_token,
        club_name = attr(&club.club_name),
        club_location = attr(&club.club_location),
        club_city = attr(&club.club_city),
        club_email = attr(&club.club_email),
        club_notes = text(&club.club_notes),
        feedback_error = error_box(page.feedback_error.as_deref()),
        feedback_token = page.feedback_token,
        criteria = text(&feedback.rating_criteria),
        features = text(&feedback.feature_ideas),
        general = text(&feedback.general_feedback),
        feedback_email = attr(&feedback.feedback_email),
    );

    render_page("Suggest a Club & Feedback", "/feedback_form", &body)
}
