use crate::section::{SectionLabel, SectionedResponse};

/// Split a free-text reply into the four labelled sections.
///
/// Lines are trimmed and blank lines skipped. A heading line switches the
/// active section and contributes no text of its own; every other line is
/// appended, with a trailing line break, to the active section. Text before
/// the first heading is dropped. A heading that appears again re-activates
/// its section and further lines keep accumulating.
///
/// Never fails: input with no recognizable heading yields an empty
/// [`SectionedResponse`].
pub fn sectionize(text: &str) -> SectionedResponse {
    let mut sections = SectionedResponse::default();
    let mut current: Option<SectionLabel> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(label) = SectionLabel::classify(line) {
            current = Some(label);
            continue;
        }

        if let Some(label) = current {
            let body = sections.get_mut(label);
            body.push_str(line);
            body.push('\n');
        }
    }

    sections
}
