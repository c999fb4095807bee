//! UI helper functions

use std::path::Path;

use crate::models::Catalog;

/// Truncate text to `max_width` characters, ending with "..." when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{}...", kept)
}

/// Pad or truncate text to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let len = truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(width.saturating_sub(len)))
}

/// Plain text listing of the catalog, marking clips missing from `sounds_dir`
pub fn catalog_listing(catalog: &Catalog, sounds_dir: &Path) -> String {
    if catalog.is_empty() {
        return "No sounds in catalog\n".to_string();
    }

    let mut out = String::new();
    for group in catalog.groups() {
        out.push_str(&format!(
            "[{}] {} (avatar: {})\n",
            group.avatar.monogram, group.display_name, group.avatar.resource
        ));
        for entry in &group.entries {
            let missing = if sounds_dir.join(entry.resource_id).is_file() {
                ""
            } else {
                "  (missing)"
            };
            out.push_str(&format!(
                "    {:<24} {}{}\n",
                entry.label, entry.resource_id, missing
            ));
        }
    }
    out
}
