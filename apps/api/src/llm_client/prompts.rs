// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Output instruction for prompts that expect a bare JSON array back.
/// Gemini has no system slot in the request shape we use, so this is inlined.
pub const JSON_ARRAY_ONLY: &str = "\
    Return ONLY a JSON array. \
    Do NOT include any text outside the JSON array. \
    Do NOT include explanations or apologies.";
