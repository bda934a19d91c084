use crate::error::ValidationError;

/// Longest title a post may carry, in characters.
pub const TITLE_MAX_LEN: usize = 20;

/// Tunable validation rules applied to incoming posts.
#[derive(Debug, Clone)]
pub struct PostRules {
    /// Maximum title length, counted in characters.
    pub max_title_len: usize,
    /// Reject posts whose category reference does not resolve.
    pub require_known_category: bool,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            max_title_len: TITLE_MAX_LEN,
            require_known_category: false,
        }
    }
}

impl PostRules {
    pub fn check_title(&self, title: &str) -> Result<(), ValidationError> {
        let len = title.chars().count();
        if len > self.max_title_len {
            return Err(ValidationError::TitleTooLong {
                len,
                max: self.max_title_len,
            });
        }
        Ok(())
    }
}
