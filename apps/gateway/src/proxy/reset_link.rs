//! Token-hash extraction from the auth provider's generated recovery link.

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

/// Path of the site's reset-password page.
pub const RESET_PASSWORD_PATH: &str = "/auth/reset-password";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetLink {
    pub token_hash: String,
    pub link: String,
}

/// The `token_hash` query parameter of `properties.action_link`, falling back
/// to `properties.hashed_token`. Top-level fields are accepted too.
pub fn extract_token_hash(reply: &Value) -> Option<String> {
    let properties = reply.get("properties").unwrap_or(reply);

    let from_link = properties
        .get("action_link")
        .and_then(Value::as_str)
        .and_then(|link| Url::parse(link).ok())
        .and_then(|url| {
            url.query_pairs()
                .find(|(name, _)| name == "token_hash")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|token| !token.is_empty());

    from_link.or_else(|| {
        properties
            .get("hashed_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    })
}

/// `{site_url}/auth/reset-password?token_hash=<token>&type=recovery`
pub fn build_reset_link(site_url: &str, token_hash: &str) -> Option<String> {
    let base = site_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}{RESET_PASSWORD_PATH}")).ok()?;
    url.query_pairs_mut()
        .append_pair("token_hash", token_hash)
        .append_pair("type", "recovery");
    Some(url.into())
}

/// Extract the token from a provider reply and build the site link for it.
pub fn reset_link_from_reply(site_url: &str, reply: &Value) -> Option<ResetLink> {
    let token_hash = extract_token_hash(reply)?;
    let link = build_reset_link(site_url, &token_hash)?;
    Some(ResetLink { token_hash, link })
}
