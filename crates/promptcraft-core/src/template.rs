/// A named starter pattern the user can drop into the need field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickTemplate {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const QUICK_TEMPLATES: &[QuickTemplate] = &[
    QuickTemplate {
        name: "Creative Writing",
        pattern: "Write a creative story about {topic}",
    },
    QuickTemplate {
        name: "Code Generation",
        pattern: "Generate {language} code for {task}",
    },
    QuickTemplate {
        name: "Content Analysis",
        pattern: "Analyze this {content_type} about {topic}",
    },
    QuickTemplate {
        name: "Research Assistant",
        pattern: "Research {topic} and summarize key points",
    },
    QuickTemplate {
        name: "Business Plan",
        pattern: "Create a business plan for {business_idea}",
    },
    QuickTemplate {
        name: "Learning Guide",
        pattern: "Explain {concept} to {audience}",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_templates_with_unique_names() {
        assert_eq!(QUICK_TEMPLATES.len(), 6);
        for (i, a) in QUICK_TEMPLATES.iter().enumerate() {
            for b in &QUICK_TEMPLATES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
