//! Prompt suggestions shown under the prompt field

/// Built-in prompt suggestions, in display order
pub const PROMPT_SUGGESTIONS: &[&str] = &[
    "A beautiful glacier",
    "A city view with clouds",
    "A forest at sunrise",
    "A starry night over the sea",
    "Neon lights in the rain",
];

/// Suggestion at `index`, if any
pub fn get(index: usize) -> Option<&'static str> {
    PROMPT_SUGGESTIONS.get(index).copied()
}

pub fn count() -> usize {
    PROMPT_SUGGESTIONS.len()
}
