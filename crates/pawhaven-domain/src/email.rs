//! Email format validation.

/// Validate an email address shape: exactly one `@` with a non-empty local
/// part and a domain containing at least one dot, no whitespace.
///
/// This is deliberately a shape check, not RFC 5322 — the source of truth for
/// deliverability is the mail system, not this service.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
