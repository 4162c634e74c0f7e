use crate::{
    models::{VoteChoice, listing::ListingSession},
    pages::layout::{attr, render_page, text},
    reviews::ReviewCard,
};

/// What the listing page shows above the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus<'a> {
    Loaded,
    Failed(&'a str),
}

fn vote_button(choice: VoteChoice, count: u32, mine: bool) -> String {
    let (name, active, icon) = match choice {
        VoteChoice::Like => ("like", "active-like", "👍"),
        VoteChoice::Dislike => ("dislike", "active-dislike", "👎"),
    };
    let class = if mine { format!("vote-btn {active}") } else { "vote-btn".to_string() };
    format!(
        "<button class=\"{class}\" type=\"button\" data-vote=\"{name}\"><span class=\"vote-icon\">{icon}</span> <span class=\"vote-count\">{count}</span></button>"
    )
}

fn render_card(card: &ReviewCard, session: &ListingSession) -> String {
    let expanded = if session.is_expanded(&card.id) { " expanded" } else { "" };
    let votes = session.votes_for(&card.id);

    let categories: String = card
        .categories
        .iter()
        .map(|row| {
            format!(
                "<div class=\"category\"><div class=\"category-name\">{}</div><div class=\"category-rating\"><span class=\"mini-stars\">{}</span> <span>{}</span></div></div>",
                text(row.label),
                row.stars,
                text(&row.value)
            )
        })
        .collect();

    let timing_class = if card.timing.current { "coaching-status current" } else { "coaching-status" };

    format!(
        r#"<div class="review-card{expanded}" data-id="{id}">
<div class="review-header"><div class="coach-info"><h3>{coach}</h3>
<div class="club-name">{club_line}</div><div class="review-meta">{meta}</div></div>
<div class="rating-badge"><span class="stars">{stars}</span> <span class="rating-number">{overall}</span></div></div>
<div class="review-footer"><span class="helpful-label">Was this helpful?</span><div class="vote-buttons">{like}{dislike}</div></div>
<div class="expand-indicator">▼ Click to see full review</div>
<div class="review-categories">{categories}</div>
<div class="{timing_class}">{timing}</div>
<div class="review-text">{body}</div>
</div>"#,
        id = attr(&card.id),
        coach = text(&card.coach_name),
        club_line = text(&card.club_line),
        meta = text(&card.meta_line()),
        stars = card.overall_stars,
        overall = text(&card.overall_text),
        like = vote_button(VoteChoice::Like, votes.like, votes.my_vote == Some(VoteChoice::Like)),
        dislike = vote_button(
            VoteChoice::Dislike,
            votes.dislike,
            votes.my_vote == Some(VoteChoice::Dislike)
        ),
        timing = text(&card.timing.text),
        body = text(&card.body),
    )
}

const LISTING_SCRIPT: &str = r#"<script>
(function () {
  function post(url, payload) {
    return fetch(url, {
      method: 'POST',
      credentials: 'same-origin',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload || {})
    }).then(function (res) { return res.ok ? res.json() : null; });
  }
  document.querySelectorAll('.review-card').forEach(function (card) {
    var id = encodeURIComponent(card.dataset.id);
    card.addEventListener('click', function () {
      post('/reviews/session/' + id + '/expand').then(function (state) {
        if (state) card.classList.toggle('expanded', state.expanded);
      });
    });
    card.querySelectorAll('[data-vote]').forEach(function (button) {
      button.addEventListener('click', function (event) {
        event.stopPropagation();
        post('/reviews/session/' + id + '/vote', { choice: button.dataset.vote }).then(function (state) {
          if (!state) return;
          card.querySelectorAll('[data-vote]').forEach(function (b) {
            var kind = b.dataset.vote;
            b.querySelector('.vote-count').textContent = state[kind];
            b.classList.toggle('active-' + kind, state.myVote === kind);
          });
        });
      });
    });
  });
  var modal = document.getElementById('thankYouModal');
  if (modal) {
    var close = function () {
      modal.classList.add('hidden');
      history.replaceState(null, '', modal.dataset.cleanUrl);
    };
    modal.addEventListener('click', function (event) { if (event.target === modal) close(); });
    modal.querySelectorAll('[data-close]').forEach(function (el) { el.addEventListener('click', close); });
  }
})();
</script>"#;

fn modal(clean_url: &str) -> String {
    format!(
        r#"<div class="modal-overlay" id="thankYouModal" data-clean-url="{clean_url}">
<div class="modal"><button class="vote-btn" type="button" data-close aria-label="Close">×</button>
<h2>Thank You!</h2>
<p>Your review has been successfully submitted. We appreciate you taking the time to help other parents make informed decisions about their children's coaches.</p>
<p style="margin-top:20px"><a class="btn" href="/review_form" data-close>Leave Another Review</a>
<a class="btn btn-secondary" href="/feedback_form" data-close>Suggest a Club</a>
<a class="btn btn-secondary" href="/feedback_form" data-close>Leave Feedback</a></p>
</div></div>"#,
        clean_url = attr(clean_url),
    )
}

/// Renders the listing. `confirmation` carries the cleaned address when the
/// visitor just submitted a review.
pub fn render(
    cards: &[ReviewCard],
    session: &ListingSession,
    status: ListingStatus<'_>,
    confirmation: Option<&str>,
) -> String {
    let content = match status {
        ListingStatus::Failed(msg) => format!(
            "<div class=\"error\" style=\"text-align:center\">{}</div>",
            text(msg)
        ),
        ListingStatus::Loaded if cards.is_empty() => {
            "<p style=\"text-align:center\">No reviews yet. Be the first to <a href=\"/review_form\">leave a review</a>.</p>"
                .to_string()
        }
        ListingStatus::Loaded => cards.iter().map(|c| render_card(c, session)).collect(),
    };

    let body = format!(
        r#"{modal}<div style="text-align:center;margin-bottom:40px"><h1>Parent Reviews</h1><p>Real reviews from real parents</p></div>
<div class="reviews-container">{content}</div>
{LISTING_SCRIPT}"#,
        modal = confirmation.map(modal).unwrap_or_default(),
    );

    render_page("Parent Reviews", "/reviews", &body)
}
