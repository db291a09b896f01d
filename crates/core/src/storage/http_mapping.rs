//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Key` / `InvalidData` -> 400 (Bad Request)
/// - everything else -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todotable_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Todo",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::Key(_) | RepositoryError::InvalidData(_) => 400,
        RepositoryError::Inconsistent { .. }
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Credential(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "todo-123".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_query_and_credential_failures_map_to_500() {
        let error = RepositoryError::QueryFailed("throttled".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
        let error = RepositoryError::Credential("missing password attribute".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("table unreachable".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_inconsistent_maps_to_500() {
        let error = RepositoryError::Inconsistent {
            entity_type: "User",
            id: "email#a@x.com".to_string(),
            reason: "missing".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_key_error_maps_to_400() {
        let error = RepositoryError::Key(KeyError::InvalidTodoId("".to_string()));
        assert_eq!(repository_error_to_status_code(&error), 400);
    }
}
