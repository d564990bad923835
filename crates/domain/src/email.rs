use crate::errors::DomainError;

/// Syntactic shape check for `local@domain`: exactly one `@`, no whitespace,
/// a non-empty local part, and a dot inside the domain part with at least one
/// character on each side. Deliberately permissive — this gates domain
/// extraction, it does not guarantee deliverability.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = input.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain_has_inner_dot(domain)
}

/// The substring after the first `@`, lowercased. Callers are expected to
/// run `is_valid_email` first.
pub fn extract_domain(email: &str) -> Result<String, DomainError> {
    email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .ok_or_else(|| DomainError::InvalidEmail(email.to_string()))
}

fn domain_has_inner_dot(domain: &str) -> bool {
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}
