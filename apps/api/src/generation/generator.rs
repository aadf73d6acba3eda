//! Content generation — builds prompts from the profile, calls the
//! generative backend, and parses the response leniently.
//!
//! Malformed or missing JSON in a model response is never an error: each
//! generator falls back to deterministic content derived from its inputs,
//! so only transport-level failure surfaces to the caller. The local
//! extraction engine populates the profile these prompts are built from and
//! runs regardless of backend availability.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts::{
    BEHAVIORAL_EVALUATION_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE,
    COVER_LETTER_SYSTEM, INTERVIEW_SYSTEM, LINKEDIN_PROMPT_TEMPLATE, LINKEDIN_SYSTEM,
    RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM, TECHNICAL_EVALUATION_PROMPT_TEMPLATE,
};
use crate::llm_client::TextGenerator;
use crate::models::content::{
    CoverLetterContent, GenerationOptions, InterviewEvaluation, LinkedInContent, QuestionType,
    ResumeContent,
};
use crate::models::profile::Profile;

/// LinkedIn headlines are capped on every path.
const MAX_HEADLINE_CHARS: usize = 120;
/// Strengths/improvements lists are capped on every path.
const MAX_FEEDBACK_ITEMS: usize = 3;
/// Fallback summary length when the response has no usable JSON.
const FALLBACK_SUMMARY_CHARS: usize = 300;

pub async fn generate_resume(
    llm: &dyn TextGenerator,
    profile: &Profile,
    options: &GenerationOptions,
) -> Result<ResumeContent, AppError> {
    let prompt = fill_template(RESUME_PROMPT_TEMPLATE, profile, options);
    let response = llm
        .complete(&prompt, RESUME_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(resume_from_response(&response, profile))
}

pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    profile: &Profile,
    options: &GenerationOptions,
    job_description: &str,
) -> Result<CoverLetterContent, AppError> {
    let prompt = fill_template(COVER_LETTER_PROMPT_TEMPLATE, profile, options)
        .replace("{job_description}", job_description);
    let response = llm
        .complete(&prompt, COVER_LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(cover_letter_from_response(&response))
}

pub async fn generate_linkedin_content(
    llm: &dyn TextGenerator,
    profile: &Profile,
    options: &GenerationOptions,
) -> Result<LinkedInContent, AppError> {
    let prompt = fill_template(LINKEDIN_PROMPT_TEMPLATE, profile, options);
    let response = llm
        .complete(&prompt, LINKEDIN_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(linkedin_from_response(&response, profile, options))
}

pub async fn evaluate_interview_answer(
    llm: &dyn TextGenerator,
    question: &str,
    answer: &str,
    profile: &Profile,
    question_type: QuestionType,
) -> Result<InterviewEvaluation, AppError> {
    let template = match question_type {
        QuestionType::Behavioral => BEHAVIORAL_EVALUATION_PROMPT_TEMPLATE,
        QuestionType::Technical => TECHNICAL_EVALUATION_PROMPT_TEMPLATE,
    };
    let prompt = template
        .replace("{question}", question)
        .replace("{answer}", answer)
        .replace("{profile}", &profile_block(profile));
    let response = llm
        .complete(&prompt, INTERVIEW_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(evaluation_from_response(&response, answer))
}

fn fill_template(template: &str, profile: &Profile, options: &GenerationOptions) -> String {
    template
        .replace("{target_role}", &options.target_role)
        .replace("{tone}", options.tone.as_str())
        .replace("{profile}", &profile_block(profile))
}

/// The profile as the bulleted block every prompt embeds.
fn profile_block(profile: &Profile) -> String {
    let mut block = format!(
        "- Name: {}\n- Current Title: {}\n- Email: {}\n- Location: {}\n\
         - Work Experience: {}\n- Projects: {}\n- Skills: {}",
        profile.full_name,
        profile.current_title,
        profile.email,
        profile.location,
        profile.work_experience,
        profile.projects,
        profile.skills,
    );
    if !profile.education.is_empty() {
        block.push_str(&format!("\n- Education: {}", profile.education));
    }
    if !profile.resume_text.is_empty() {
        block.push_str(&format!(
            "\n\nAdditional Resume Content:\n{}",
            profile.resume_text
        ));
    }
    block
}

/// Locates a JSON object in free text (first `{` to last `}`) and
/// deserializes it. Tolerates code fences and prose around the object.
fn parse_json_object<T: DeserializeOwned>(response: &str) -> Option<T> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&response[start..=end]).ok()
}

fn resume_from_response(response: &str, profile: &Profile) -> ResumeContent {
    if let Some(content) = parse_json_object::<ResumeContent>(response) {
        if !content.professional_summary.is_empty()
            && !content.experience.is_empty()
            && !content.projects.is_empty()
            && !content.skills.is_empty()
        {
            return content;
        }
    }
    warn!("resume response had no usable JSON, falling back to profile fields");
    ResumeContent {
        professional_summary: first_paragraph(response, FALLBACK_SUMMARY_CHARS),
        experience: profile.work_experience.clone(),
        projects: profile.projects.clone(),
        skills: profile.skills.clone(),
        education: profile.education.clone(),
    }
}

fn cover_letter_from_response(response: &str) -> CoverLetterContent {
    if let Some(content) = parse_json_object::<CoverLetterContent>(response) {
        if !content.content.is_empty() {
            return content;
        }
    }
    warn!("cover letter response had no usable JSON, using raw text as content");
    CoverLetterContent {
        content: response.to_string(),
        key_achievements: Vec::new(),
    }
}

fn linkedin_from_response(
    response: &str,
    profile: &Profile,
    options: &GenerationOptions,
) -> LinkedInContent {
    if let Some(content) = parse_json_object::<LinkedInContent>(response) {
        if !content.headline.is_empty() && !content.about.is_empty() {
            return LinkedInContent {
                headline: truncate_chars(&content.headline, MAX_HEADLINE_CHARS),
                about: content.about,
            };
        }
    }
    warn!("linkedin response had no usable JSON, building headline from profile");
    LinkedInContent {
        headline: truncate_chars(
            &format!("{} | {}", profile.current_title, options.target_role),
            MAX_HEADLINE_CHARS,
        ),
        about: response.to_string(),
    }
}

fn evaluation_from_response(response: &str, answer: &str) -> InterviewEvaluation {
    if let Some(evaluation) = parse_json_object::<InterviewEvaluation>(response) {
        if !evaluation.strengths.is_empty() && !evaluation.improvements.is_empty() {
            let mut evaluation = evaluation;
            evaluation.score = evaluation.score.clamp(0.0, 10.0);
            evaluation.strengths.truncate(MAX_FEEDBACK_ITEMS);
            evaluation.improvements.truncate(MAX_FEEDBACK_ITEMS);
            if evaluation.rewritten_answer.is_empty() {
                evaluation.rewritten_answer = answer.to_string();
            }
            return evaluation;
        }
    }
    warn!("evaluation response had no usable JSON, returning neutral feedback");
    InterviewEvaluation {
        score: 5.0,
        strengths: vec![
            "Answer provided".to_string(),
            "Attempted to address the question".to_string(),
        ],
        improvements: vec![
            "Unable to evaluate the answer properly. Please try again.".to_string(),
            "Ensure your answer is clear and detailed.".to_string(),
            "Consider using specific examples.".to_string(),
        ],
        rewritten_answer: answer.to_string(),
    }
}

/// First double-newline-separated paragraph, or a truncated prefix when the
/// response is one long run.
fn first_paragraph(response: &str, max_chars: usize) -> String {
    let first = response.split("\n\n").next().unwrap_or("").trim();
    if first.is_empty() {
        truncate_chars(response.trim(), max_chars)
    } else {
        truncate_chars(first, max_chars)
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::models::content::Tone;
    use async_trait::async_trait;

    struct CannedBackend(String);

    #[async_trait]
    impl TextGenerator for CannedBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl TextGenerator for FailingBackend {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn profile() -> Profile {
        Profile {
            full_name: "Jane Doe".into(),
            current_title: "Senior Engineer".into(),
            email: "jane@x.com".into(),
            location: "Berlin".into(),
            work_experience: "built pipelines".into(),
            projects: "parser project".into(),
            skills: "Rust".into(),
            education: "BSc".into(),
            resume_text: String::new(),
        }
    }

    fn options() -> GenerationOptions {
        GenerationOptions {
            target_role: "Staff Engineer".into(),
            tone: Tone::Confident,
        }
    }

    #[test]
    fn test_parse_json_object_plain() {
        let parsed: ResumeContent =
            parse_json_object(r#"{"professionalSummary": "s"}"#).unwrap();
        assert_eq!(parsed.professional_summary, "s");
    }

    #[test]
    fn test_parse_json_object_with_fences_and_prose() {
        let response = "Here you go:\n```json\n{\"content\": \"letter\"}\n```\nEnjoy!";
        let parsed: CoverLetterContent = parse_json_object(response).unwrap();
        assert_eq!(parsed.content, "letter");
    }

    #[test]
    fn test_parse_json_object_rejects_garbage() {
        assert!(parse_json_object::<ResumeContent>("no json here").is_none());
        assert!(parse_json_object::<ResumeContent>("{broken").is_none());
    }

    #[test]
    fn test_resume_parses_complete_response() {
        let response = r#"{
            "professionalSummary": "Seasoned engineer.",
            "experience": "• did things",
            "projects": "• built things",
            "skills": "Technical: Rust",
            "education": "BSc, 2015"
        }"#;
        let content = resume_from_response(response, &profile());
        assert_eq!(content.professional_summary, "Seasoned engineer.");
        assert_eq!(content.education, "BSc, 2015");
    }

    #[test]
    fn test_resume_falls_back_to_profile_fields() {
        let response = "The model wrote prose instead.\n\nMore prose.";
        let content = resume_from_response(response, &profile());
        assert_eq!(content.professional_summary, "The model wrote prose instead.");
        assert_eq!(content.experience, "built pipelines");
        assert_eq!(content.projects, "parser project");
        assert_eq!(content.skills, "Rust");
        assert_eq!(content.education, "BSc");
    }

    #[test]
    fn test_resume_incomplete_json_falls_back() {
        // Parses, but misses required fields.
        let response = r#"{"professionalSummary": "only a summary"}"#;
        let content = resume_from_response(response, &profile());
        assert_eq!(content.experience, "built pipelines");
    }

    #[test]
    fn test_cover_letter_fallback_uses_raw_response() {
        let content = cover_letter_from_response("Dear hiring manager, ...");
        assert_eq!(content.content, "Dear hiring manager, ...");
        assert!(content.key_achievements.is_empty());
    }

    #[test]
    fn test_cover_letter_parses_achievements() {
        let response = r#"{"content": "Dear...", "keyAchievements": ["a", "b"]}"#;
        let content = cover_letter_from_response(response);
        assert_eq!(content.key_achievements, vec!["a", "b"]);
    }

    #[test]
    fn test_linkedin_headline_clamped_when_parsed() {
        let long = "x".repeat(200);
        let response = format!(r#"{{"headline": "{long}", "about": "about text"}}"#);
        let content = linkedin_from_response(&response, &profile(), &options());
        assert_eq!(content.headline.chars().count(), 120);
        assert_eq!(content.about, "about text");
    }

    #[test]
    fn test_linkedin_fallback_builds_headline_from_profile() {
        let content = linkedin_from_response("prose answer", &profile(), &options());
        assert_eq!(content.headline, "Senior Engineer | Staff Engineer");
        assert_eq!(content.about, "prose answer");
    }

    #[test]
    fn test_evaluation_clamps_score_and_caps_lists() {
        let response = r#"{
            "score": 14,
            "strengths": ["a", "b", "c", "d", "e"],
            "improvements": ["x", "y", "z", "w"],
            "rewrittenAnswer": "better answer"
        }"#;
        let evaluation = evaluation_from_response(response, "original");
        assert_eq!(evaluation.score, 10.0);
        assert_eq!(evaluation.strengths.len(), 3);
        assert_eq!(evaluation.improvements.len(), 3);
        assert_eq!(evaluation.rewritten_answer, "better answer");
    }

    #[test]
    fn test_evaluation_defaults_rewritten_answer() {
        let response = r#"{"score": 6, "strengths": ["a"], "improvements": ["b"]}"#;
        let evaluation = evaluation_from_response(response, "my answer");
        assert_eq!(evaluation.rewritten_answer, "my answer");
    }

    #[test]
    fn test_evaluation_fallback_is_neutral() {
        let evaluation = evaluation_from_response("not json", "my answer");
        assert_eq!(evaluation.score, 5.0);
        assert_eq!(evaluation.rewritten_answer, "my answer");
        assert!(!evaluation.strengths.is_empty());
        assert!(!evaluation.improvements.is_empty());
    }

    #[test]
    fn test_profile_block_omits_empty_optional_parts() {
        let mut p = profile();
        p.education = String::new();
        let block = profile_block(&p);
        assert!(!block.contains("- Education:"));
        assert!(!block.contains("Additional Resume Content:"));
        assert!(block.contains("- Name: Jane Doe"));
    }

    #[test]
    fn test_profile_block_includes_resume_text_when_present() {
        let mut p = profile();
        p.resume_text = "raw resume".into();
        let block = profile_block(&p);
        assert!(block.contains("Additional Resume Content:\nraw resume"));
    }

    #[tokio::test]
    async fn test_generate_resume_end_to_end_with_canned_backend() {
        let backend = CannedBackend(
            r#"{"professionalSummary": "s", "experience": "e", "projects": "p", "skills": "k", "education": ""}"#
                .to_string(),
        );
        let content = generate_resume(&backend, &profile(), &options())
            .await
            .unwrap();
        assert_eq!(content.professional_summary, "s");
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_llm_error() {
        let result = generate_resume(&FailingBackend, &profile(), &options()).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_evaluate_uses_question_type_prompt() {
        let backend = CannedBackend("not json".to_string());
        let evaluation = evaluate_interview_answer(
            &backend,
            "Design a cache",
            "I would...",
            &profile(),
            QuestionType::Technical,
        )
        .await
        .unwrap();
        assert_eq!(evaluation.score, 5.0);
    }
}
