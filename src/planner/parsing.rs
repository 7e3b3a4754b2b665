use super::types::WeekSection;

const WEEK_MARKER: &str = "Week ";

/// Best-effort split of free-form model output into `Week N:` sections.
///
/// Text before the first marker is discarded, the label runs up to the first
/// `:` and is kept verbatim, and sections whose trimmed content is empty are
/// dropped. Output without any marker yields an empty list. Because the split
/// is purely textual, a literal "Week " inside a section body also starts a
/// new section.
pub fn parse_weeks(raw: &str) -> Vec<WeekSection> {
    raw.split(WEEK_MARKER)
        .skip(1)
        .filter_map(|segment| {
            let (label, content) = segment.split_once(':').unwrap_or((segment, ""));
            let content = content.trim();
            if content.is_empty() {
                return None;
            }
            Some(WeekSection {
                week_number: label.to_string(),
                content: content.to_string(),
            })
        })
        .collect()
}
