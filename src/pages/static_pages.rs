use crate::pages::layout::{SITE_NAME, render_page, text};

pub fn home() -> String {
    let problems = [
        (
            "No Accountability",
            "Coaches operate without transparent feedback systems. There's no easy way to know if a coach is skilled, communicative, or supportive until your child is already on the team.",
        ),
        (
            "Parents Are Silent",
            "Fear of retaliation keeps parents quiet. Concerned about playing time or team dynamics, parents rarely speak up, even when coaching is problematic.",
        ),
        (
            "Kids Pay the Price",
            "The right coach can build confidence and skills. The wrong coach can crush a child's love for the game. Parents deserve to make informed decisions.",
        ),
    ];
    let problems: String = problems
        .iter()
        .map(|(title, body)| format!("<h3>{}</h3><p>{}</p>", text(title), text(body)))
        .collect();

    let body = format!(
        r#"<section class="panel">
<h1>Your Child Deserves a Great Coach</h1>
<p>Bringing transparency and accountability to youth sports coaching. Starting with soccer, expanding to all youth sports as we grow.</p>
<p><a class="btn" href="/review_form">Review a Coach</a></p>
</section>
<section class="panel">
<h2>The Problem</h2>
<p>Parents invest thousands of dollars annually in club sports, yet have no way to evaluate coaches before committing.</p>
{problems}
</section>
<section class="panel">
<h2>The Solution</h2>
<p>{SITE_NAME} creates transparency in youth sports by giving parents a platform to share honest, constructive feedback about coaches.</p>
<p>Our platform isn't about tearing coaches down. It's about celebrating great coaching and providing constructive feedback that helps everyone improve.</p>
</section>
<section class="panel">
<h2>Start Making an Impact Today</h2>
<p>Review a coach. Share your feedback. Help us build the platform that youth sports parents need.</p>
<p><a class="btn" href="/review_form">Review a Coach</a> <a class="btn btn-secondary" href="/feedback_form">Give Feedback</a></p>
<p class="hint">Currently accepting soccer coach reviews from Utah and Arizona clubs. More sports and locations coming soon!</p>
</section>"#
    );

    render_page("Bringing Accountability to Youth Sports", "/", &body)
}

const TERMS_SECTIONS: &[(&str, &str)] = &[
    (
        "1. Acceptance of Terms",
        "By accessing and using the Platform you accept and agree to be bound by these Terms of Service. If you do not agree to these terms, you must not use the Platform.",
    ),
    (
        "2. Description of Service",
        "The Platform allows parents and guardians to share reviews and ratings of youth sports coaches. We are not responsible for the accuracy, completeness, or truthfulness of user-generated content.",
    ),
    (
        "3. Age Requirement",
        "The Platform is intended for users who are 18 years of age or older. We do not knowingly collect personal information from individuals under the age of 18.",
    ),
    (
        "4. Minors and Privacy",
        "You must not include any personally identifiable information about any minor in content you post. Reviews must focus solely on coaches, coaching methods, programs, and team management.",
    ),
    (
        "5. User-Generated Content",
        "You are solely responsible for all content you post and represent that it is truthful and based on your personal experience as a parent or guardian.",
    ),
    (
        "6. Limitation of Liability",
        "The Platform acts solely as an intermediary for user-generated content and is provided \"as is\" without warranties of any kind.",
    ),
    (
        "7. Indemnification",
        "You agree to indemnify and hold harmless the Platform from claims arising from your use of the Platform or any content you post.",
    ),
    (
        "8. Content Moderation and Removal",
        "We may request verification of your relationship to the coach or program being reviewed, and may refuse to publish or remove any content at any time.",
    ),
    (
        "9. No Guarantee of Publication",
        "Submitting a review does not guarantee that it will be published, and published content may be removed.",
    ),
    (
        "10. Privacy and Data Collection",
        "Contact details supplied with a review are used only for verification and are never displayed publicly.",
    ),
    (
        "11. Intellectual Property",
        "You grant the Platform a license to display content you submit. Platform content may not be copied or reverse engineered.",
    ),
    (
        "12. Prohibited Uses",
        "You may not use the Platform to harass, defame, or impersonate others, or to post spam or promotional content.",
    ),
    (
        "13. Disclaimers",
        "Reviews reflect the opinions of individual users. Nothing on the Platform is professional advice.",
    ),
    (
        "14. Dispute Resolution & Arbitration",
        "Disputes are resolved through binding individual arbitration, except where the law provides otherwise.",
    ),
    (
        "15. Termination",
        "We may suspend or terminate access to the Platform at any time.",
    ),
    (
        "16. Changes to Terms",
        "We may update these terms. Continued use of the Platform means you accept the updated terms.",
    ),
    (
        "17. Governing Law",
        "These terms are governed by the laws of the State of Utah.",
    ),
    (
        "18. Severability",
        "If any provision is found unenforceable, the remaining provisions stay in effect.",
    ),
    (
        "19. Contact Information",
        "Questions about these terms can be sent through the feedback form.",
    ),
];

pub fn terms() -> String {
    let sections: String = TERMS_SECTIONS
        .iter()
        .map(|(heading, body)| format!("<h2>{}</h2><p>{}</p>", text(heading), text(body)))
        .collect();

    let body = format!(
        r#"<section class="panel">
<p><a href="/">← Back to Home</a></p>
<h1>Terms of Service</h1>
{sections}
<p><strong>BY USING {upper}, YOU ACKNOWLEDGE THAT YOU HAVE READ, UNDERSTOOD, AND AGREE TO BE BOUND BY THESE TERMS OF SERVICE.</strong></p>
</section>"#,
        upper = SITE_NAME.to_uppercase(),
    );

    render_page("Terms of Service", "/terms", &body)
}

/// Which confirmation page to show after a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThankYou {
    Review,
    ClubSuggestion,
    Feedback,
}

pub fn thank_you(kind: ThankYou) -> String {
    let message = match kind {
        ThankYou::Review => {
            "We've received your review and truly appreciate you taking the time to share your experience. \
We're currently manually reviewing and collecting reviews as we build out the platform."
        }
        ThankYou::ClubSuggestion => {
            "Thanks for suggesting a club. We'll look into adding it to the list of clubs you can review."
        }
        ThankYou::Feedback => {
            "Thanks for your feedback. It directly shapes what we build next."
        }
    };

    let body = format!(
        r#"<section class="panel" style="text-align:center">
<h1>✓ Thank You!</h1>
<p>{message}</p>
<p style="margin:24px 0">
<a class="btn" href="/review_form">Leave Another Review</a>
<a class="btn btn-secondary" href="/feedback_form">Suggest a Club</a>
<a class="btn btn-secondary" href="/reviews">Browse Reviews</a>
</p>
<h3>Help Us Grow</h3>
<p>The more parents who contribute, the more valuable this resource becomes. Please share {SITE_NAME} with other soccer parents in your community!</p>
<p><a href="/">← Back to Home</a></p>
</section>"#,
        message = text(message),
    );

    render_page("Thank You", "", &body)
}

pub fn not_found() -> String {
    render_page(
        "Not Found",
        "",
        r#"<section class="panel"><h1>Page not found</h1><p><a href="/">← Back to Home</a></p></section>"#,
    )
}
