use crate::error::ValidationError;

/// Result of a service operation, independent of any transport.
///
/// Storage failures are not an outcome; they travel separately as `RepoError`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Succeeded with a payload.
    Success(T),
    /// Succeeded with nothing to return.
    Done,
    /// The request was well-formed but the record does not exist.
    NotFound,
    /// The request was rejected before storage was consulted for the record.
    BadRequest(ValidationError),
}

impl<T> Outcome<T> {
    /// The payload of a `Success`, if any.
    pub fn payload(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_yields_payload() {
        assert_eq!(Outcome::Success(3u64).payload(), Some(3));
    }

    #[test]
    fn test_other_outcomes_have_no_payload() {
        assert_eq!(Outcome::<u64>::Done.payload(), None);
        assert_eq!(Outcome::<u64>::NotFound.payload(), None);
        assert_eq!(
            Outcome::<u64>::BadRequest(ValidationError::MissingId).payload(),
            None
        );
    }
}
