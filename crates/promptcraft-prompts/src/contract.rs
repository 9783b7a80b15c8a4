use promptcraft_core::SectionLabel;

/// Append the output format the reply must follow.
///
/// Headings come from [`SectionLabel::header`], the same text the
/// sectionizer matches on.
pub fn append_instructions(prompt: &mut String) {
    prompt.push_str("IMPORTANT: Structure your response EXACTLY like this:\n\n");
    for label in SectionLabel::ALL {
        prompt.push_str(label.header());
        prompt.push_str(":\n");
        prompt.push_str(placeholder(*label));
        prompt.push_str("\n\n");
    }
    prompt.push_str(
        "Make sure the prompt template is practical, effective, and ready to use.",
    );
}

fn placeholder(label: SectionLabel) -> &'static str {
    match label {
        SectionLabel::DetectedIntent => "[Analyze what the user wants to achieve]",
        SectionLabel::SuggestedPromptType => "[Type of prompt needed]",
        SectionLabel::PromptTemplate => {
            "[The actual prompt template with placeholders in curly braces]"
        }
        SectionLabel::UsageTips => "[Practical tips for using this prompt]",
    }
}
