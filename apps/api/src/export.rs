//! Plain-text export: assembles downloadable artifacts from generated
//! content. The caller turns these into an actual file download.

use serde::Serialize;

use crate::models::content::ResumeContent;
use crate::models::profile::Profile;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

pub fn resume_export(profile: &Profile, resume: &ResumeContent) -> ExportFile {
    let content = format!(
        "{}\n{} | {}\n\nPROFESSIONAL SUMMARY\n{}\n\nWORK EXPERIENCE\n{}\n\nPROJECTS\n{}\n\nSKILLS\n{}\n\nEDUCATION\n{}",
        profile.full_name,
        profile.email,
        profile.location,
        resume.professional_summary,
        resume.experience,
        resume.projects,
        resume.skills,
        resume.education,
    );
    ExportFile {
        filename: format!("{}_Resume.txt", file_stem(&profile.full_name)),
        content,
    }
}

pub fn cover_letter_export(profile: &Profile, content: &str) -> ExportFile {
    ExportFile {
        filename: format!("{}_CoverLetter.txt", file_stem(&profile.full_name)),
        content: content.to_string(),
    }
}

pub fn linkedin_export(profile: &Profile, headline: &str, about: &str) -> ExportFile {
    let content = format!(
        "LinkedIn Profile Content for {}\n\nHEADLINE\n{}\n\nABOUT\n{}",
        profile.full_name, headline, about,
    );
    ExportFile {
        filename: format!("{}_LinkedIn.txt", file_stem(&profile.full_name)),
        content,
    }
}

/// Profile name with whitespace runs replaced by underscores.
fn file_stem(full_name: &str) -> String {
    full_name.split_whitespace().collect::<Vec<_>>().join("_")
}
