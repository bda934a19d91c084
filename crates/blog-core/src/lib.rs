//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate holds the post validation and status-resolution rules and the
//! storage ports they run against. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{RepoError, ValidationError};
pub use service::{Outcome, PostRules, PostService, TITLE_MAX_LEN};
