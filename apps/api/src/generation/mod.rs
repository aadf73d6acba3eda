// Generative content: resume, cover letter, LinkedIn, interview coaching.
// All LLM calls go through llm_client — no direct API calls here. Model
// output is parsed leniently and every generator has a deterministic
// fallback, so a misbehaving model degrades the content, never the request.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod questions;
