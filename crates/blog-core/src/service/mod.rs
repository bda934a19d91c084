//! Application services - validation and status resolution on top of the ports.

mod outcome;
mod post_service;
mod rules;

pub use outcome::Outcome;
pub use post_service::PostService;
pub use rules::{PostRules, TITLE_MAX_LEN};
