//! Log sanitization helpers
//!
//! Response bodies can be large (the whole config table) and request
//! headers carry the admin token; neither goes into the log verbatim.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters left visible by [`mask_secret`].
const VISIBLE_PREFIX: usize = 4;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones are cut on a
/// char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Mask a secret, keeping only a short prefix.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= VISIBLE_PREFIX * 2 {
        return "*".repeat(secret.chars().count());
    }
    let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("[]"), "[]");
    }

    #[test]
    fn body_at_limit_unchanged() {
        let s = "x".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_with_length() {
        let s = "x".repeat(TRUNCATE_LIMIT * 4);
        let out = truncate_for_log(&s);
        assert!(out.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 4)));
        assert!(out.len() < s.len());
    }

    #[test]
    fn truncation_respects_multibyte_chars() {
        let s = "配置".repeat(100);
        let out = truncate_for_log(&s);
        assert!(out.contains("[truncated"));
    }

    #[test]
    fn secret_keeps_prefix_only() {
        assert_eq!(mask_secret("abcd1234efgh"), "abcd****");
    }

    #[test]
    fn short_secret_fully_masked() {
        assert_eq!(mask_secret("abc"), "***");
    }
}
