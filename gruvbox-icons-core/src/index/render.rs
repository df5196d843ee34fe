use super::entry::Entry;
use crate::config::index::Settings;

/// Renders the `index.theme` document of a theme.
///
/// `entries` must already be in descriptor order; their sections are written
/// in that order and listed in the same order in `Directories=`.
pub fn render(theme_name: &str, entries: &[Entry], settings: &Settings) -> String {
    let directories = entries
        .iter()
        .map(Entry::section)
        .collect::<Vec<_>>()
        .join(";");

    let mut lines = vec![
        "[Icon Theme]".to_owned(),
        format!("Name={}", theme_name),
        format!("Comment={}", settings.comment),
        format!("Inherits={}", settings.inherits),
        format!("Directories={}", directories),
        String::new(),
    ];

    for entry in entries {
        lines.push(format!("[{}]", entry.section()));
        lines.push(format!("Size={}", entry.size));
        lines.push(format!("Type={}", entry.kind));
        if let Some(min_size) = entry.min_size {
            lines.push(format!("MinSize={}", min_size));
        }
        if let Some(max_size) = entry.max_size {
            lines.push(format!("MaxSize={}", max_size));
        }
        if let Some(scale) = entry.scale {
            lines.push(format!("Scale={}", scale));
        }
        lines.push(format!("Context={}", entry.label));
        lines.push(String::new());
    }

    let mut document = lines.join("\n").trim_end().to_owned();
    document.push('\n');
    document
}
