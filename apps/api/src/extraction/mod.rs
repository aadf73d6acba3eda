//! Resume auto-fill: heuristic extraction of structured profile fields from
//! loosely-structured plain text.
//!
//! The pipeline is pure computation over an in-memory string: no I/O, no
//! shared state between invocations. Each extractor runs independently and
//! either finds a value or leaves the field unset; degenerate input (empty
//! text, binary garbage decoded best-effort) simply extracts nothing.
//! Extraction is advisory: the caller's profile stays human-overridable and
//! the merge step decides what sticks.

pub mod contact;
pub mod handlers;
pub mod keywords;
pub mod merge;
pub mod sections;
pub mod validation;

use crate::models::profile::ExtractedProfile;

/// Runs every field extractor over the raw text and assembles the result.
/// Extractors are order-insensitive with respect to each other; ordering
/// only matters inside a single field's pattern list.
pub fn auto_fill_profile(resume_text: &str) -> ExtractedProfile {
    ExtractedProfile {
        full_name: contact::extract_name(resume_text),
        current_title: contact::extract_title(resume_text),
        email: contact::extract_email(resume_text),
        location: contact::extract_location(resume_text),
        work_experience: sections::extract_experience(resume_text),
        projects: sections::extract_projects(resume_text),
        skills: sections::extract_skills(resume_text),
        education: sections::extract_education(resume_text),
        resume_text: resume_text.to_string(),
    }
}

/// Trimmed, non-empty lines of the raw text.
pub(crate) fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::merge::merge_profile;
    use super::validation::validate_profile;
    use super::*;
    use crate::models::profile::Profile;

    const SAMPLE_RESUME: &str = "\
John Michael Doe
Senior Software Engineer
john.doe@example.com
San Francisco, CA

EXPERIENCE:
Acme Inc - built the widget pipeline
2019 - 2021 kept it running

PROJECTS:
wrote a resume parser

SKILLS:
Rust, SQL, patience

EDUCATION:
BSc in Computing, State University
";

    #[test]
    fn test_full_resume_extracts_every_field() {
        let extracted = auto_fill_profile(SAMPLE_RESUME);
        assert_eq!(extracted.full_name.as_deref(), Some("John Michael Doe"));
        assert_eq!(
            extracted.current_title.as_deref(),
            Some("Senior Software Engineer")
        );
        assert_eq!(extracted.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(extracted.location.as_deref(), Some("San Francisco, CA"));
        assert_eq!(
            extracted.work_experience.as_deref(),
            Some("Acme Inc - built the widget pipeline\n2019 - 2021 kept it running")
        );
        assert_eq!(extracted.projects.as_deref(), Some("wrote a resume parser"));
        assert_eq!(extracted.skills.as_deref(), Some("Rust, SQL, patience"));
        assert_eq!(
            extracted.education.as_deref(),
            Some("BSc in Computing, State University")
        );
        assert_eq!(extracted.resume_text, SAMPLE_RESUME);
    }

    #[test]
    fn test_extract_merge_validate_round_trip() {
        let extracted = auto_fill_profile(SAMPLE_RESUME);
        let merged = merge_profile(&Profile::default(), &extracted);
        let validation = validate_profile(&merged);
        assert!(validation.is_valid, "missing: {:?}", validation.missing_fields);
    }

    #[test]
    fn test_empty_input_extracts_nothing() {
        let extracted = auto_fill_profile("");
        assert_eq!(extracted.full_name, None);
        assert_eq!(extracted.current_title, None);
        assert_eq!(extracted.email, None);
        assert_eq!(extracted.location, None);
        assert_eq!(extracted.work_experience, None);
        assert_eq!(extracted.projects, None);
        assert_eq!(extracted.skills, None);
        assert_eq!(extracted.education, None);
        assert_eq!(extracted.resume_text, "");
    }

    #[test]
    fn test_binary_garbage_does_not_panic() {
        let garbage = "\u{0}\u{fffd}\u{1}@@@@\n1234\n\u{2}";
        let extracted = auto_fill_profile(garbage);
        assert_eq!(extracted.full_name, None);
        assert_eq!(extracted.email, None);
        // "1234" satisfies the year heuristic of the experience fallback.
        assert_eq!(extracted.work_experience.as_deref(), Some("1234"));
    }

    #[test]
    fn test_non_empty_lines_trims_and_filters() {
        let lines: Vec<&str> = non_empty_lines("  a  \n\n\t\nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
