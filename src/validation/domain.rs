/// Returns the part of `email` after the last `@`.
///
/// Syntax is not checked here. An input without any `@` is returned whole,
/// so `"localhost"` yields `"localhost"`.
pub fn extract_domain(email: &str) -> &str {
    match email.rfind('@') {
        Some(index) => &email[index + 1..],
        None => email,
    }
}
