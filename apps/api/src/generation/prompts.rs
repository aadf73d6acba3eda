// All LLM prompt constants for the Generation module. Each template is
// filled with `{placeholder}` replacement before sending; every prompt
// demands a JSON-only response in the exact schema the clients consume.

pub const RESUME_SYSTEM: &str = "You are an expert resume writer producing \
    ATS-friendly content. You MUST respond with ONLY a valid JSON object, \
    no additional text before or after. Do NOT use markdown code fences.";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter \
    writer. You MUST respond with ONLY a valid JSON object, no additional \
    text before or after. Do NOT use markdown code fences.";

pub const LINKEDIN_SYSTEM: &str = "You are a LinkedIn profile optimization \
    expert. You MUST respond with ONLY a valid JSON object, no additional \
    text before or after. Do NOT use markdown code fences.";

pub const INTERVIEW_SYSTEM: &str = "You are an expert interview coach. You \
    MUST respond with ONLY a valid JSON object, no additional text before \
    or after. Do NOT use markdown code fences.";

/// Resume generation template. Placeholders: `{target_role}`, `{tone}`,
/// `{profile}`.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create an ATS-friendly resume based on the following profile for a {target_role} position. Use a {tone} tone.

Profile:
{profile}

Respond with this exact JSON structure:
{
  "professionalSummary": "2-3 sentence summary highlighting key qualifications",
  "experience": "Formatted work experience with bullet points using the • symbol",
  "projects": "Formatted projects with bullet points using the • symbol",
  "skills": "Categorized skills list (e.g., Technical: JavaScript, Python | Soft Skills: Leadership, Communication)",
  "education": "Education details with degree, institution, and year"
}

Make sure the content is ATS-friendly, uses action verbs, and quantifies achievements where possible."#;

/// Cover letter template. Placeholders: `{target_role}`, `{tone}`,
/// `{profile}`, `{job_description}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Create a tailored cover letter for a {target_role} position using a {tone} tone.

Profile:
{profile}

Job Description:
{job_description}

Respond with this exact JSON structure:
{
  "content": "Full cover letter text with proper formatting and paragraphs",
  "keyAchievements": ["Achievement 1 that matches job requirements", "Achievement 2 that demonstrates relevant skills", "Achievement 3 that shows impact"]
}

The cover letter should:
1. Be personalized to the job description
2. Highlight 2-3 key achievements that match the role
3. Show enthusiasm and cultural fit
4. Be concise and impactful (3-4 paragraphs)"#;

/// LinkedIn template. Placeholders: `{target_role}`, `{tone}`, `{profile}`.
pub const LINKEDIN_PROMPT_TEMPLATE: &str = r#"Create optimized LinkedIn content for a {target_role} using a {tone} tone.

Profile:
{profile}

Respond with this exact JSON structure:
{
  "headline": "Compelling headline under 120 characters",
  "about": "Engaging About section with 3 paragraphs separated by double line breaks"
}

The content should:
1. Be keyword-optimized for searchability
2. Showcase unique value proposition
3. Include specific achievements
4. Be engaging and authentic
5. Headline must be under 120 characters"#;

/// Behavioral answer evaluation. Placeholders: `{question}`, `{answer}`,
/// `{profile}`.
pub const BEHAVIORAL_EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this behavioral interview answer using the STAR format (Situation, Task, Action, Result).

Question: {question}
Answer: {answer}

Candidate Profile:
{profile}

Respond with this exact JSON structure:
{
  "score": 8,
  "strengths": ["Specific strength 1", "Specific strength 2", "Specific strength 3"],
  "improvements": ["Actionable improvement 1", "Actionable improvement 2", "Actionable improvement 3"],
  "rewrittenAnswer": "Improved version of the answer using STAR format with clear Situation, Task, Action, and Result sections"
}

Score should be 0-10. Provide specific, actionable feedback based on STAR format completeness."#;

/// Technical answer evaluation. Placeholders: `{question}`, `{answer}`,
/// `{profile}`.
pub const TECHNICAL_EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this system design or technical interview answer.

Question: {question}
Answer: {answer}

Candidate Profile:
{profile}

Respond with this exact JSON structure:
{
  "score": 8,
  "strengths": ["Technical strength 1", "Technical strength 2", "Technical strength 3"],
  "improvements": ["Technical improvement 1", "Technical improvement 2", "Technical improvement 3"],
  "rewrittenAnswer": "Improved version with better technical depth, scalability considerations, and clear communication"
}

Score should be 0-10. Focus on technical accuracy, scalability considerations, and communication clarity."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_systems_demand_json_only() {
        for system in [
            RESUME_SYSTEM,
            COVER_LETTER_SYSTEM,
            LINKEDIN_SYSTEM,
            INTERVIEW_SYSTEM,
        ] {
            assert!(system.contains("ONLY a valid JSON object"), "{system}");
        }
    }

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(RESUME_PROMPT_TEMPLATE.contains("{target_role}"));
        assert!(RESUME_PROMPT_TEMPLATE.contains("{tone}"));
        assert!(RESUME_PROMPT_TEMPLATE.contains("{profile}"));
        assert!(COVER_LETTER_PROMPT_TEMPLATE.contains("{job_description}"));
        assert!(LINKEDIN_PROMPT_TEMPLATE.contains("{profile}"));
        for template in [
            BEHAVIORAL_EVALUATION_PROMPT_TEMPLATE,
            TECHNICAL_EVALUATION_PROMPT_TEMPLATE,
        ] {
            assert!(template.contains("{question}"));
            assert!(template.contains("{answer}"));
            assert!(template.contains("{profile}"));
        }
    }
}
