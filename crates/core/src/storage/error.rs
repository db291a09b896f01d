use thiserror::Error;

/// Errors produced while building or parsing table keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid todo id: {0:?}")]
    InvalidTodoId(String),
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),
    #[error("Unknown sort key: {0:?}")]
    UnknownSortKey(String),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// The table did not reflect a write that just succeeded.
    #[error("{entity_type} {id} is inconsistent: {reason}")]
    Inconsistent {
        entity_type: &'static str,
        id: String,
        reason: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Credential error: {0}")]
    Credential(String),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_display() {
        assert_eq!(
            KeyError::InvalidTodoId("a#b".to_string()).to_string(),
            "Invalid todo id: \"a#b\""
        );
        assert_eq!(
            KeyError::UnknownSortKey("note#1".to_string()).to_string(),
            "Unknown sort key: \"note#1\""
        );
    }

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Todo not found: abc-123");
    }

    #[test]
    fn test_repository_error_inconsistent_display() {
        let error = RepositoryError::Inconsistent {
            entity_type: "User",
            id: "email#a@x.com".to_string(),
            reason: "identity row missing after write".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "User email#a@x.com is inconsistent: identity row missing after write"
        );
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_from_key_error_is_transparent() {
        let error: RepositoryError = KeyError::InvalidUserId("bob".to_string()).into();
        assert_eq!(error.to_string(), "Invalid user id: \"bob\"");
    }
}
