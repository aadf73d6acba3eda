//! Completeness check over the assembled profile.
//!
//! Purely informational: the result drives a user-facing message and never
//! blocks the merge.

use crate::models::profile::{Profile, ValidationResult};

/// Required fields in the fixed checking order. `education` is intentionally
/// excluded; it is optional for downstream content generation.
pub const REQUIRED_FIELDS: &[&str] = &[
    "fullName",
    "email",
    "location",
    "currentTitle",
    "workExperience",
    "projects",
    "skills",
];

fn field_value<'a>(profile: &'a Profile, field: &str) -> &'a str {
    match field {
        "fullName" => &profile.full_name,
        "email" => &profile.email,
        "location" => &profile.location,
        "currentTitle" => &profile.current_title,
        "workExperience" => &profile.work_experience,
        "projects" => &profile.projects,
        "skills" => &profile.skills,
        _ => "",
    }
}

pub fn validate_profile(profile: &Profile) -> ValidationResult {
    let missing_fields: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| field_value(profile, field).is_empty())
        .map(|field| field.to_string())
        .collect();

    ValidationResult {
        is_valid: missing_fields.is_empty(),
        missing_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> Profile {
        Profile {
            full_name: "Jane Doe".into(),
            current_title: "Engineer".into(),
            email: "jane@x.com".into(),
            location: "Berlin".into(),
            work_experience: "x".into(),
            projects: "y".into(),
            skills: "z".into(),
            education: String::new(),
            resume_text: String::new(),
        }
    }

    #[test]
    fn test_complete_profile_is_valid() {
        let result = validate_profile(&complete_profile());
        assert!(result.is_valid);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_education_not_required() {
        let mut profile = complete_profile();
        profile.education = String::new();
        assert!(validate_profile(&profile).is_valid);
    }

    #[test]
    fn test_empty_profile_lists_all_required_fields_in_order() {
        let result = validate_profile(&Profile::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_fields,
            vec![
                "fullName",
                "email",
                "location",
                "currentTitle",
                "workExperience",
                "projects",
                "skills"
            ]
        );
    }

    #[test]
    fn test_single_missing_field_reported() {
        let mut profile = complete_profile();
        profile.projects = String::new();
        let result = validate_profile(&profile);
        assert_eq!(result.missing_fields, vec!["projects"]);
    }

    #[test]
    fn test_filling_a_field_never_grows_missing_list() {
        let mut profile = Profile::default();
        let before = validate_profile(&profile).missing_fields.len();
        profile.email = "jane@x.com".into();
        let after = validate_profile(&profile).missing_fields.len();
        assert!(after < before);
    }
}
