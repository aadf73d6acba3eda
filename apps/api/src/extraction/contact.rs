//! Contact-field extractors: email, name, location, and current title.
//!
//! Every extractor either finds a match or yields nothing; there is no
//! error path. Location and title follow the ordered-pattern-list idiom:
//! patterns are tried in sequence against the whole raw text and the first
//! acceptable match wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::keywords::ROLE_KEYWORDS;
use crate::extraction::non_empty_lines;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

/// A word shaped like a proper noun: one capital, then lowercase letters.
static NAME_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+").unwrap());

// The phrase patterns use [ \t] rather than \s between words so a capture
// never bleeds across a line break: "start of line" means one line.
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "San Francisco, CA" at a line start
        Regex::new(r"(?m)^([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*,[ \t]*[A-Z]{2})").unwrap(),
        // "Berlin, Germany" at a line start
        Regex::new(r"(?m)^([A-Z][a-z]+,[ \t]*[A-Z][a-z]+)").unwrap(),
        Regex::new(r"(?i)Location:[ \t]*([^\n]+)").unwrap(),
        Regex::new(r"(?i)Based in:[ \t]*([^\n]+)").unwrap(),
    ]
});

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let roles = ROLE_KEYWORDS.join("|");
    vec![
        // A line of capitalized words ending in a recognized role keyword
        Regex::new(&format!(
            r"(?m)^([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*[ \t]+(?:{roles}))"
        ))
        .unwrap(),
        Regex::new(r"(?i)Title:[ \t]*([^\n]+)").unwrap(),
        Regex::new(r"(?i)Position:[ \t]*([^\n]+)").unwrap(),
        Regex::new(r"(?i)Role:[ \t]*([^\n]+)").unwrap(),
    ]
});

/// Names are assumed to appear near the top of a resume.
const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_LINE_CHARS: usize = 50;
/// Guards against capturing a whole paragraph when a role keyword appears
/// mid-sentence.
const MAX_TITLE_CHARS: usize = 100;

/// First substring shaped like `local@domain.tld`. Purely syntactic, no
/// deliverability check.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Scans the first few non-empty lines for one that reads like a person's
/// name: 2–4 proper-noun-shaped words, short, and not an email/URL line.
/// Returns the matching words joined by single spaces, which drops stray
/// tokens (all-caps words, initials) from the source line.
pub fn extract_name(text: &str) -> Option<String> {
    for line in non_empty_lines(text).take(NAME_SCAN_LINES) {
        let capitalized: Vec<&str> = line
            .split_whitespace()
            .filter(|word| NAME_WORD_RE.is_match(word))
            .collect();

        if (2..=4).contains(&capitalized.len())
            && line.chars().count() < MAX_NAME_LINE_CHARS
            && !line.contains('@')
            && !line.contains("http")
            && !line.contains("www")
        {
            return Some(capitalized.join(" "));
        }
    }
    None
}

/// First match across the ordered location pattern list. "City, ST" beats a
/// later-listed `Location:` label even when the label appears earlier in the
/// text: ordering is by pattern, not by position.
pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text).map(|caps| caps[1].trim().to_string()))
}

/// First acceptable match across the ordered title pattern list. An
/// over-long capture is rejected and the next pattern is tried.
pub fn extract_title(text: &str) -> Option<String> {
    for pattern in TITLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let title = caps[1].trim();
            if title.chars().count() < MAX_TITLE_CHARS {
                return Some(title.to_string());
            }
        }
    }
    None
}
