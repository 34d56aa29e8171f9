//! Contact email derivation
//!
//! Maps a target URL to the synthetic address used when filling signup
//! forms: `news-{host}@plugilo.news`, with scheme, path, and a leading
//! `www.` label stripped from the host.

use url::Url;

const EMAIL_DOMAIN: &str = "plugilo.news";

/// Derive the signup email for a target URL.
///
/// Never fails: when the URL cannot be parsed the same stripping rules are
/// applied to the raw string. Identical input always yields identical
/// output.
pub fn derive_email(url: &str) -> String {
    format!("news-{}@{}", host_token(url), EMAIL_DOMAIN)
}

fn host_token(raw: &str) -> String {
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    if let Ok(parsed) = Url::parse(&candidate) {
        if let Some(host) = parsed.host_str() {
            if !host.is_empty() {
                return strip_www(host).to_string();
            }
        }
    }

    // Fallback: strip scheme and path segments from the raw string
    let no_scheme = raw
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let host = no_scheme.split('/').next().unwrap_or("");
    strip_www(host).to_string()
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
