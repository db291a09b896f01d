use super::ValidationError;

/// Where users land after signing in when no safe target was given.
pub const DEFAULT_REDIRECT: &str = "/todos";

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validates redirect_to URL to prevent open redirects.
///
/// Returns the URL if it is a safe relative path, `DEFAULT_REDIRECT` otherwise.
///
/// # Security
///
/// A safe URL:
/// - Starts with a single `/` (relative path)
/// - Does not start with `//` (protocol-relative URLs like `//evil.com`)
/// - Does not contain control characters (potential injection)
/// - Does not contain `://` (absolute URLs with schemes like `https://`, `javascript:`)
///
/// # Examples
///
/// ```
/// use todotable_core::auth::validate_redirect_to;
///
/// assert_eq!(validate_redirect_to(Some("/todos/123")), "/todos/123");
/// assert_eq!(validate_redirect_to(Some("//evil.com")), "/todos");
/// assert_eq!(validate_redirect_to(None), "/todos");
/// ```
pub fn validate_redirect_to(url: Option<&str>) -> &str {
    match url {
        Some(url)
            if url.starts_with('/')
                && !url.starts_with("//")
                && !url.chars().any(|c| c.is_control())
                && !url.contains("://") =>
        {
            url
        }
        _ => DEFAULT_REDIRECT,
    }
}

/// Minimal email shape check: longer than 3 characters and contains `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > 3 && email.contains('@') {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)
}

pub fn validate_todo_fields(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== validate_redirect_to tests ====================

    #[test]
    fn accepts_relative_paths() {
        assert_eq!(validate_redirect_to(Some("/todos/abc")), "/todos/abc");
        assert_eq!(validate_redirect_to(Some("/")), "/");
        assert_eq!(validate_redirect_to(Some("/search?q=x")), "/search?q=x");
    }

    #[test]
    fn rejects_unsafe_targets() {
        assert_eq!(validate_redirect_to(Some("//evil.com")), DEFAULT_REDIRECT);
        assert_eq!(validate_redirect_to(Some("https://evil.com")), DEFAULT_REDIRECT);
        assert_eq!(validate_redirect_to(Some("todos")), DEFAULT_REDIRECT);
        assert_eq!(validate_redirect_to(Some("/a\nb")), DEFAULT_REDIRECT);
        assert_eq!(validate_redirect_to(Some("/x?u=http://e")), DEFAULT_REDIRECT);
        assert_eq!(validate_redirect_to(None), DEFAULT_REDIRECT);
    }

    // ==================== credential tests ====================

    #[test]
    fn email_must_look_like_an_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert_eq!(validate_email("a@x"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("abcdef"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn password_rules() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn credentials_check_email_first() {
        assert_eq!(
            validate_credentials("bad", ""),
            Err(ValidationError::InvalidEmail)
        );
        assert!(validate_credentials("a@x.com", "password1").is_ok());
    }

    #[test]
    fn todo_fields_are_required() {
        assert_eq!(
            validate_todo_fields("  ", "body"),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate_todo_fields("Buy milk", ""),
            Err(ValidationError::DescriptionRequired)
        );
        assert!(validate_todo_fields("Buy milk", "2 liters").is_ok());
    }
}
