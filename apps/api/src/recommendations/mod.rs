// Recommendation engine: prompt → model → lenient extraction → link repair → six records.
// All model calls go through llm_client, never direct Gemini calls here.

pub mod extract;
pub mod fallback;
pub mod filter;
pub mod handlers;
pub mod links;
pub mod models;
pub mod pipeline;
pub mod prompts;
