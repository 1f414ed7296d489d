//! String utilities for the domain layer.

/// Uppercase the first character and lowercase the rest.
///
/// `"user"` becomes `"User"`, `"ASSISTANT"` becomes `"Assistant"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Mask a secret for display, keeping only the last four characters.
///
/// Empty secrets render as `"<unset>"`.
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    let count = secret.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{}", tail)
}
