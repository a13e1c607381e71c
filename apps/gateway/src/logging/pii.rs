use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled patterns used when scrubbing log output.
pub struct PiiPatterns;

impl PiiPatterns {
    pub fn email() -> &'static Regex {
        static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL
    }

    /// Bearer tokens, token hashes and similar opaque words of 16+ characters.
    pub fn opaque_token() -> &'static Regex {
        static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
        });
        &TOKEN
    }
}

/// Masks emails (first local character kept, domain kept) and opaque tokens.
///
/// Emails are handled first so their domains are never mistaken for tokens.
pub fn redact(input: &str) -> String {
    let emails_masked = PiiPatterns::email().replace_all(input, |caps: &regex::Captures| {
        let matched = &caps[0];
        match matched.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                format!("{}***@{domain}", &local[..1])
            }
            _ => matched.to_string(),
        }
    });

    // Tokens always carry digits; slash-joined words such as URL paths do not.
    PiiPatterns::opaque_token()
        .replace_all(&emails_masked, |caps: &regex::Captures| {
            let matched = &caps[0];
            if matched.bytes().any(|b| b.is_ascii_digit()) {
                "[REDACTED_TOKEN]".to_string()
            } else {
                matched.to_string()
            }
        })
        .into_owned()
}

/// Display wrapper that redacts its contents.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
