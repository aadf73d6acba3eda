//! Fixed keyword tables driving the heuristic extractors.
//!
//! These are data, not logic: the matching code in `contact` and `sections`
//! compiles its patterns from what is declared here, so the vocabularies can
//! be extended and tested without touching the matchers.

/// Seniority/role suffixes a standalone title line must end with.
pub const ROLE_KEYWORDS: &[&str] = &[
    "Engineer",
    "Developer",
    "Manager",
    "Designer",
    "Analyst",
    "Consultant",
    "Specialist",
    "Architect",
    "Lead",
    "Director",
    "VP",
    "President",
    "CEO",
    "CTO",
    "CFO",
];

/// Company-suffix tokens used by the work-experience line fallback.
pub const COMPANY_SUFFIXES: &[&str] = &["Company", "Corporation", "Inc", "LLC", "Ltd"];

// Section heading vocabularies. Header entries are regex fragments tried in
// order; stop entries terminate the captured block. Each stop set omits the
// field's own header family, so a block keeps capturing across repeated
// same-category headings.

pub const EXPERIENCE_HEADERS: &[&str] = &[
    r"(?:WORK\s+)?EXPERIENCE",
    r"(?:PROFESSIONAL\s+)?EXPERIENCE",
    r"EMPLOYMENT\s+HISTORY",
];
pub const EXPERIENCE_STOPS: &[&str] = &["EDUCATION", "PROJECTS", "SKILLS", "CERTIFICATIONS"];

pub const PROJECT_HEADERS: &[&str] = &[r"PROJECTS?", r"KEY\s+PROJECTS?"];
pub const PROJECT_STOPS: &[&str] = &["EDUCATION", "SKILLS", "CERTIFICATIONS", "EXPERIENCE"];

pub const SKILL_HEADERS: &[&str] = &[r"SKILLS?", r"TECHNICAL\s+SKILLS?", r"CORE\s+COMPETENCIES"];
pub const SKILL_STOPS: &[&str] = &["EDUCATION", "PROJECTS", "CERTIFICATIONS", "EXPERIENCE"];

pub const EDUCATION_HEADERS: &[&str] = &["EDUCATION", r"ACADEMIC\s+BACKGROUND"];
pub const EDUCATION_STOPS: &[&str] = &["EXPERIENCE", "PROJECTS", "SKILLS", "CERTIFICATIONS"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_sets_exclude_own_family() {
        assert!(!EXPERIENCE_STOPS.contains(&"EXPERIENCE"));
        assert!(!PROJECT_STOPS.contains(&"PROJECTS"));
        assert!(!SKILL_STOPS.contains(&"SKILLS"));
        assert!(!EDUCATION_STOPS.contains(&"EDUCATION"));
    }

    #[test]
    fn test_every_stop_set_halts_on_certifications() {
        for stops in [EXPERIENCE_STOPS, PROJECT_STOPS, SKILL_STOPS, EDUCATION_STOPS] {
            assert!(stops.contains(&"CERTIFICATIONS"));
        }
    }

    #[test]
    fn test_role_keywords_include_executive_titles() {
        for kw in ["CEO", "CTO", "CFO", "VP"] {
            assert!(ROLE_KEYWORDS.contains(&kw), "missing {kw}");
        }
    }
}
