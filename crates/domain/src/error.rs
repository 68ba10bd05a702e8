//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LocboxError`]
//! via `#[from]` (or `From` impls for boxed adapter errors).

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum LocboxError {
    /// The client supplied something the domain refuses.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No free key could be found for a new record.
    #[error("no unused key after {attempts} attempts")]
    KeyExhausted { attempts: usize },

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections of client input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The location document is not syntactically valid JSON.
    #[error("location is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_locbox_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LocboxError = ValidationError::from(json_err).into();
        assert!(matches!(
            err,
            LocboxError::Validation(ValidationError::InvalidJson(_))
        ));
    }

    #[test]
    fn should_mention_attempts_when_keys_exhausted() {
        let err = LocboxError::KeyExhausted { attempts: 3 };
        assert_eq!(err.to_string(), "no unused key after 3 attempts");
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("disk on fire");
        let err = LocboxError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
