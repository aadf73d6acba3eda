//! Labeled-block extractors for the free-text resume sections.
//!
//! A block is a heading line from the field's header-variant list followed
//! by everything up to the next heading from the *other* categories (or end
//! of text). Header variants are tried in order; the first one whose trimmed
//! capture is non-empty wins. Work experience additionally has a line-scan
//! fallback; the other sections are simply left unset when no block matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::keywords::{
    COMPANY_SUFFIXES, EDUCATION_HEADERS, EDUCATION_STOPS, EXPERIENCE_HEADERS, EXPERIENCE_STOPS,
    PROJECT_HEADERS, PROJECT_STOPS, SKILL_HEADERS, SKILL_STOPS,
};

static EXPERIENCE: LazyLock<SectionMatcher> =
    LazyLock::new(|| SectionMatcher::new(EXPERIENCE_HEADERS, EXPERIENCE_STOPS));
static PROJECTS: LazyLock<SectionMatcher> =
    LazyLock::new(|| SectionMatcher::new(PROJECT_HEADERS, PROJECT_STOPS));
static SKILLS: LazyLock<SectionMatcher> =
    LazyLock::new(|| SectionMatcher::new(SKILL_HEADERS, SKILL_STOPS));
static EDUCATION: LazyLock<SectionMatcher> =
    LazyLock::new(|| SectionMatcher::new(EDUCATION_HEADERS, EDUCATION_STOPS));

/// A year, optionally extended into a range ending in a year or
/// "Present"/"Current".
static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{4}\s*(?:[-–]\s*(?:\d{4}|Present|Current))?").unwrap()
});

static COMPANY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", COMPANY_SUFFIXES.join("|"))).unwrap()
});

/// Ordered header patterns plus a guard for a stop heading sitting directly
/// under the header. The body pattern consumes the newline in front of an
/// in-body stop heading, so a stop on the very first body line needs the
/// separate anchored check.
struct SectionMatcher {
    patterns: Vec<Regex>,
    leading_stop: Regex,
}

impl SectionMatcher {
    fn new(headers: &[&str], stops: &[&str]) -> Self {
        let stop_alternation = stops.join("|");
        let patterns = headers
            .iter()
            .map(|header| {
                // The regex crate has no lookahead, so the stop heading is
                // consumed outside the capture group instead.
                Regex::new(&format!(
                    r"(?is){header}[:\s]*\n(.*?)(?:\n(?:{stop_alternation})|$)"
                ))
                .expect("section pattern must compile")
            })
            .collect();
        let leading_stop = Regex::new(&format!(r"(?i)^(?:{stop_alternation})"))
            .expect("stop pattern must compile");
        Self {
            patterns,
            leading_stop,
        }
    }

    fn extract(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            pattern.captures(text).and_then(|caps| {
                let body = caps[1].trim();
                if body.is_empty() || self.leading_stop.is_match(body) {
                    None
                } else {
                    Some(body.to_string())
                }
            })
        })
    }
}

/// Labeled experience block, falling back to a scan for lines that carry a
/// year or a company-suffix keyword (in original order, newline-joined).
pub fn extract_experience(text: &str) -> Option<String> {
    EXPERIENCE
        .extract(text)
        .or_else(|| experience_fallback(text))
}

pub fn extract_projects(text: &str) -> Option<String> {
    PROJECTS.extract(text)
}

pub fn extract_skills(text: &str) -> Option<String> {
    SKILLS.extract(text)
}

pub fn extract_education(text: &str) -> Option<String> {
    EDUCATION.extract(text)
}

fn experience_fallback(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| YEAR_RANGE_RE.is_match(line) || COMPANY_SUFFIX_RE.is_match(line))
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
