//! Error response body (RFC 7807).

use serde::{Deserialize, Serialize};

/// The failure classes the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// The request is malformed or breaks a post rule.
    InvalidRequest,
    /// The addressed post does not exist.
    PostNotFound,
    /// The write collided with a uniqueness rule.
    Conflict,
    /// Storage or another dependency failed.
    Internal,
}

impl ProblemKind {
    pub fn status(self) -> u16 {
        match self {
            ProblemKind::InvalidRequest => 400,
            ProblemKind::PostNotFound => 404,
            ProblemKind::Conflict => 409,
            ProblemKind::Internal => 500,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ProblemKind::InvalidRequest => "Bad Request",
            ProblemKind::PostNotFound => "Not Found",
            ProblemKind::Conflict => "Conflict",
            ProblemKind::Internal => "Internal Server Error",
        }
    }

    /// Relative URI naming the problem type.
    pub fn type_uri(self) -> &'static str {
        match self {
            ProblemKind::InvalidRequest => "/problems/invalid-request",
            ProblemKind::PostNotFound => "/problems/post-not-found",
            ProblemKind::Conflict => "/problems/conflict",
            ProblemKind::Internal => "about:blank",
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,

    pub title: String,

    pub status: u16,

    /// What went wrong with this particular request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(kind: ProblemKind) -> Self {
        Self {
            error_type: kind.type_uri().to_string(),
            title: kind.title().to_string(),
            status: kind.status(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
