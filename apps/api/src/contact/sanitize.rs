use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static SCRIPT_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid script scheme regex"));

/// Strips `<...>` tags, removes `javascript:` in any casing, then trims.
///
/// Removal can splice a new tag or scheme together from the leftovers
/// (`javajavascript:script:`), so passes repeat until nothing changes.
/// Each pass only shrinks the string, which bounds the loop.
pub fn sanitize_text(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let without_tags = TAG_RE.replace_all(&current, "");
        let next = SCRIPT_SCHEME_RE.replace_all(&without_tags, "").into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}

/// Lower-cases and trims an email address. Does not validate it.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}
