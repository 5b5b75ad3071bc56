// src/utils/html_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::extractors::entity::EntityKind;
use crate::extractors::record::RecordAssembler;
use crate::utils::error::AppError;

/// Saves extracted text as HTML with the given byte ranges highlighted.
/// Overlapping highlights are skipped; the earlier one wins.
pub fn save_debug_html(text: &str, path: &Path, highlights: &[(usize, usize, &str)]) -> Result<(), AppError> {
    let mut file = File::create(path)?;

    // Add debug styling in head
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");

    // CSS for highlight colors
    debug_html.push_str("pre { white-space: pre-wrap; }\n");
    debug_html.push_str(".highlight-header { background-color: #FFFF00; font-weight: bold; }\n");
    debug_html.push_str(".highlight-name { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-email { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-phone { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n<pre>\n");

    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0); // Sort by position

    for (start, end, highlight_type) in sorted_highlights {
        if start < last_pos || end > text.len() || start >= end {
            tracing::trace!("Skipping highlight {}-{} ({})", start, end, highlight_type);
            continue;
        }

        // Add content before the highlight
        debug_html.push_str(&escape_html(&text[last_pos..start]));

        let css_class = match highlight_type {
            "header" => "highlight-header",
            "name" => "highlight-name",
            "email" => "highlight-email",
            "phone" => "highlight-phone",
            _ => "highlight-custom",
        };

        debug_html.push_str(&format!("<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, highlight_type));
        debug_html.push_str(&escape_html(&text[start..end]));
        debug_html.push_str("</span>");

        last_pos = end;
    }

    // Add any remaining content
    debug_html.push_str(&escape_html(&text[last_pos..]));
    debug_html.push_str("\n</pre>\n</body>\n</html>");

    file.write_all(debug_html.as_bytes())?;

    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

/// Highlights every header line and entity the assembler's extractors detect in `text`.
pub fn create_debug_html(text: &str, path: &Path, assembler: &RecordAssembler) -> Result<(), AppError> {
    let mut highlights: Vec<(usize, usize, &str)> = assembler
        .sections()
        .headers(text)
        .into_iter()
        .map(|h| (h.start, h.end, "header"))
        .collect();

    highlights.extend(assembler.entities().spans(text).into_iter().map(|s| {
        let label = match s.kind {
            EntityKind::Name => "name",
            EntityKind::Email => "email",
            EntityKind::Phone => "phone",
            EntityKind::Link => "link",
        };
        (s.start, s.end, label)
    }));

    save_debug_html(text, path, &highlights)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
