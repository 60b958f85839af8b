/// Prompt text used on provider requests.

/// System prompt sent on OpenAI-compatible requests.
///
/// Anthropic and Google requests carry the user message alone; their wire
/// shapes here have no system slot.
pub fn tutor_system_prompt() -> &'static str {
    "You are a helpful and friendly AI learning assistant for students. \
     Provide clear, educational, and encouraging responses."
}
