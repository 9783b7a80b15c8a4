use promptcraft_core::{SectionLabel, SectionedResponse};

pub const UNPARSED_NOTICE: &str = "Could not parse response format. Showing raw output:";

/// Plain-text rendering of a reply for the non-interactive mode.
///
/// Non-empty sections are printed under their display titles. When nothing
/// was recognized, the raw reply is printed after a notice.
pub fn render_plain(sections: &SectionedResponse, raw: &str) -> String {
    if sections.is_empty() {
        return format!("{UNPARSED_NOTICE}\n\n{}\n", raw.trim_end());
    }

    let mut out = String::new();
    for (label, _) in sections.iter().filter(|(_, text)| !text.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("== {} ==\n", label.display_name()));
        out.push_str(sections.trimmed(label));
        out.push('\n');
    }
    out
}

/// Only the copy-pasteable template, or `None` when the reply had none.
pub fn template_only(sections: &SectionedResponse) -> Option<&str> {
    let t = sections.trimmed(SectionLabel::PromptTemplate);
    (!t.is_empty()).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptcraft_core::sectionize;

    #[test]
    fn unparsed_reply_shows_raw() {
        let out = render_plain(&SectionedResponse::default(), "free text\n\n");
        assert!(out.starts_with(UNPARSED_NOTICE));
        assert!(out.ends_with("free text\n"));
    }

    #[test]
    fn only_non_empty_sections_printed() {
        let s = sectionize("DETECTED INTENT:\nFoo\n\nUSAGE TIPS:\nBar\n");
        let out = render_plain(&s, "ignored");
        assert_eq!(out, "== Detected Intent ==\nFoo\n\n== Usage Tips ==\nBar\n");
        assert!(!out.contains("Prompt Template"));
    }

    #[test]
    fn template_only_extracts_template() {
        let s = sectionize("COPY-PASTEABLE PROMPT TEMPLATE:\nWrite {x}\n");
        assert_eq!(template_only(&s), Some("Write {x}"));
        assert_eq!(template_only(&SectionedResponse::default()), None);
    }
}
