//! Merge policy for folding one upload's extraction into the caller's
//! profile.

use crate::models::profile::{ExtractedProfile, Profile};

/// The extracted value wins when it holds text; the existing value survives
/// only when extraction found nothing. One shared rule for every field,
/// with no per-field branches.
fn coalesce(extracted: Option<&String>, existing: &str) -> String {
    match extracted {
        Some(value) if !value.is_empty() => value.clone(),
        _ => existing.to_string(),
    }
}

/// Produces the updated profile. `resume_text` is always replaced with the
/// newly processed raw text; it is a cache of the last source, not a
/// user-edited field. `education` ends up as an empty string when neither
/// side has it, never as a missing value.
pub fn merge_profile(current: &Profile, extracted: &ExtractedProfile) -> Profile {
    Profile {
        full_name: coalesce(extracted.full_name.as_ref(), &current.full_name),
        current_title: coalesce(extracted.current_title.as_ref(), &current.current_title),
        email: coalesce(extracted.email.as_ref(), &current.email),
        location: coalesce(extracted.location.as_ref(), &current.location),
        work_experience: coalesce(extracted.work_experience.as_ref(), &current.work_experience),
        projects: coalesce(extracted.projects.as_ref(), &current.projects),
        skills: coalesce(extracted.skills.as_ref(), &current.skills),
        education: coalesce(extracted.education.as_ref(), &current.education),
        resume_text: extracted.resume_text.clone(),
    }
}
