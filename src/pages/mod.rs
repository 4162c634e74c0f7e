pub mod feedback_form;
pub mod layout;
pub mod review_form;
pub mod reviews;
pub mod static_pages;

pub use layout::{attr, render_page, text};
