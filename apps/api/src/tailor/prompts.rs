// LLM prompt constants for the tailoring module.

/// System prompt for resume tailoring — plain text out, no invention.
pub const TAILOR_SYSTEM: &str = "You are an expert resume writer. \
    Rewrite resumes to match a specific job description and target role. \
    Respond with the tailored resume text only. \
    Do NOT use markdown code fences. \
    Do NOT add commentary before or after the resume. \
    Do NOT invent employers, dates, numbers, or skills that are not in the base resume.";

/// Tailoring prompt template.
/// Replace: `{language}`, `{target}`, `{aggressiveness}`, `{job_description}`,
/// `{base_resume}` before sending.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Tailor the base resume below to the job description.

Output language: {language}
Target role: {target}
Rewrite aggressiveness (1=minimal, 2=balanced, 3=aggressive): {aggressiveness}

Rules:
- Keep every fact truthful to the base resume: no new employers, dates, metrics, or skills.
- Reorder and reword experience so the most relevant items for the target role come first.
- Mirror terminology from the job description where the base resume genuinely supports it.
- Write naturally; avoid buzzwords such as "leverage", "utilize", "synergy".
- At aggressiveness 1 only adjust emphasis; at 3 rewrite sentences freely within the facts.

JOB DESCRIPTION:
{job_description}

BASE RESUME:
{base_resume}"#;
