// Keyword coverage analysis: extraction, set scoring, and the HTTP surface.
// Pure functions over text — no DB, no LLM, safe to call from any handler.

pub mod coverage;
pub mod handlers;
pub mod keywords;
