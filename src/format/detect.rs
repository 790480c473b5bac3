//! String shape detection: URLs, e-mail addresses and highlighted keywords.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use richline_bbparser::StyleRegistry;

/// Glyph for links whose host is not in [`DOMAIN_ICONS`].
pub const LINK_ICON: &str = "🔗";

/// Glyph prefixed to e-mail addresses.
pub const MAIL_ICON: &str = "✉";

/// Host suffix → icon. The longest matching suffix wins.
pub const DOMAIN_ICONS: &[(&str, &str)] = &[
    ("github.com", "🐙"),
    ("gist.github.com", "📝"),
    ("gitlab.com", "🦊"),
    ("t.me", "✈"),
    ("telegram.me", "✈"),
    ("twitter.com", "🐦"),
    ("x.com", "🐦"),
    ("linkedin.com", "💼"),
    ("youtube.com", "▶"),
    ("youtu.be", "▶"),
    ("stackoverflow.com", "📚"),
    ("crates.io", "📦"),
    ("docs.rs", "📖"),
];

/// Keyword → registry style used to highlight it inside plain strings.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("success", "green"),
    ("error", "red"),
    ("warning", "yellow"),
    ("info", "cyan"),
];

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://\S+|www\.\S+|(?:[a-z0-9-]+\.)+[a-z]{2,}/\S*)$")
        .expect("URL pattern is valid")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("e-mail pattern is valid")
});

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(success|error|warning|info)\b").expect("keyword pattern is valid")
});

/// What a string value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringShape {
    Url { icon: &'static str },
    Email,
    Plain,
}

/// Classifies a string value.
pub fn classify(text: &str) -> StringShape {
    if EMAIL.is_match(text) {
        StringShape::Email
    } else if URL.is_match(text) {
        StringShape::Url {
            icon: icon_for(text),
        }
    } else {
        StringShape::Plain
    }
}

/// Picks the icon for a URL from its host.
pub fn icon_for(url: &str) -> &'static str {
    let host = host_of(url);
    DOMAIN_ICONS
        .iter()
        .filter(|(domain, _)| {
            host == *domain
                || host
                    .strip_suffix(*domain)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
        .max_by_key(|(domain, _)| domain.len())
        .map(|(_, icon)| *icon)
        .unwrap_or(LINK_ICON)
}

fn host_of(url: &str) -> String {
    let lower = url.to_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(lower.as_str());
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = host.split(':').next().unwrap_or(host);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Wraps each keyword in its color, followed by a full reset.
pub fn highlight_keywords(text: &str, registry: &StyleRegistry) -> String {
    KEYWORD
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            let style = KEYWORDS
                .iter()
                .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
                .map(|(_, style)| *style)
                .unwrap_or("reset");
            format!("{}{}\x1b[0m", registry.escape(style), word)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_email() {
        assert_eq!(classify("me@example.com"), StringShape::Email);
        assert_eq!(classify("first.last+tag@mail.co.uk"), StringShape::Email);
    }

    #[test]
    fn test_classify_urls() {
        assert_eq!(
            classify("https://github.com/rust-lang"),
            StringShape::Url { icon: "🐙" }
        );
        assert_eq!(classify("t.me/someone"), StringShape::Url { icon: "✈" });
        assert_eq!(
            classify("www.example.org"),
            StringShape::Url { icon: LINK_ICON }
        );
    }

    #[test]
    fn test_classify_plain() {
        assert_eq!(classify("hello world"), StringShape::Plain);
        assert_eq!(classify("1.90"), StringShape::Plain);
        assert_eq!(classify("Cargo.toml"), StringShape::Plain);
        assert_eq!(classify(""), StringShape::Plain);
    }

    #[test]
    fn test_icon_longest_suffix_wins() {
        assert_eq!(icon_for("https://gist.github.com/abc"), "📝");
        assert_eq!(icon_for("https://www.github.com/abc"), "🐙");
    }

    #[test]
    fn test_icon_requires_label_boundary() {
        // "dropbox.com" ends with "x.com" but is a different domain.
        assert_eq!(icon_for("https://dropbox.com/s/1"), LINK_ICON);
        assert_eq!(icon_for("https://x.com/someone"), "🐦");
    }

    #[test]
    fn test_icon_ignores_port_and_case() {
        assert_eq!(icon_for("HTTPS://GitHub.com:443/x"), "🐙");
    }

    #[test]
    fn test_highlight_keywords() {
        let registry = StyleRegistry::global();
        assert_eq!(
            highlight_keywords("an Error occurred", registry),
            "an \x1b[31mError\x1b[0m occurred"
        );
        assert_eq!(
            highlight_keywords("success and info", registry),
            "\x1b[32msuccess\x1b[0m and \x1b[36minfo\x1b[0m"
        );
    }

    #[test]
    fn test_highlight_keywords_whole_words_only() {
        let registry = StyleRegistry::global();
        assert_eq!(
            highlight_keywords("errors informed", registry),
            "errors informed"
        );
    }
}
