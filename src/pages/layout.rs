use html_escape::{encode_double_quoted_attribute, encode_text};

pub const SITE_NAME: &str = "Rate My Kids Coach";

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/review_form", "Leave a Review"),
    ("/reviews", "Browse Reviews"),
    ("/feedback_form", "Suggest a Club"),
    ("/terms", "Terms"),
];

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: "Poppins", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; background: #ede6db; color: #1a1a1a; }
nav { display: flex; gap: 18px; padding: 14px 24px; background: #fff; border-bottom: 1px solid #e2e8f0; }
nav a { color: #4a4a4a; text-decoration: none; font-weight: 500; }
nav a.active { color: #a8bca1; }
main { max-width: 900px; margin: 0 auto; padding: 40px 20px; }
.panel { background: #fff; padding: 40px; border-radius: 2px; box-shadow: 0 4px 20px rgba(0,0,0,0.08); margin-bottom: 30px; }
h1 { font-size: 2.2em; margin-bottom: 12px; }
h2 { font-size: 1.3em; margin: 24px 0 14px; }
label { display: block; font-weight: 500; margin: 16px 0 8px; font-size: 0.95em; }
input[type=text], input[type=email], input[type=tel], select, textarea { width: 100%; padding: 12px 14px; border: 1.5px solid #d4d4d4; border-radius: 2px; background: #fafafa; font: inherit; }
textarea { min-height: 90px; }
.hint { font-size: 0.8em; color: #6b6b6b; }
.error { background: #fce8e8; color: #8b2e2e; padding: 14px 18px; border-left: 3px solid #e8b4b4; margin-bottom: 20px; white-space: pre-wrap; }
.btn { display: inline-block; padding: 12px 22px; border: none; border-radius: 2px; background: #a8bca1; color: #fff; text-decoration: none; font-weight: 600; cursor: pointer; }
.btn-secondary { background: #b79973; }
.rating { padding: 16px 20px; background: #f9f7f4; border-left: 3px solid #a8bca1; margin: 14px 0; }
.rating .choices { display: flex; gap: 10px; }
.hidden { display: none; }
.review-card { background: #fff; padding: 25px; border-left: 4px solid #b79973; margin-bottom: 20px; cursor: pointer; }
.review-header { display: flex; justify-content: space-between; gap: 15px; }
.club-name, .review-meta { color: #4a4a4a; font-size: 0.9em; margin-top: 5px; }
.stars, .mini-stars { color: #b79973; letter-spacing: 1px; }
.review-categories, .coaching-status, .review-text { display: none; margin-top: 15px; }
.review-card.expanded .review-categories { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 12px; }
.review-card.expanded .coaching-status, .review-card.expanded .review-text { display: block; }
.review-card.expanded .expand-indicator { display: none; }
.coaching-status.current { background: #d4e0cf; color: #2d5016; }
.review-footer { display: flex; justify-content: space-between; margin-top: 12px; padding-top: 12px; border-top: 1px solid #f0f0f0; }
.vote-btn { padding: 6px 12px; background: #f9f7f4; border: 1px solid #e2e8f0; cursor: pointer; }
.vote-btn.active-like { background: #d4e0cf; }
.vote-btn.active-dislike { background: #fce8e8; }
.modal-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; }
.modal-overlay.hidden { display: none; }
.modal { background: #fff; padding: 40px; max-width: 500px; text-align: center; }
"#;

pub fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

pub fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

fn nav(active_path: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let class = if *href == active_path { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();
    format!("<nav>{links}</nav>")
}

/// Wraps `body` (already escaped HTML) in the shared document shell.
pub fn render_page(title: &str, active_path: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} - {SITE_NAME}</title><style>{STYLE}</style></head>\
<body>{nav}<main>{body}</main></body></html>",
        title = text(title),
        nav = nav(active_path),
    )
}
