//! Unified diff rendering for --diff

use colored::Colorize;
use similar::TextDiff;

/// Render a colored unified diff between `old` and `new`.
pub fn render(old: &str, new: &str, old_name: &str, new_name: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header(old_name, new_name)
        .to_string();

    let mut out = String::with_capacity(unified.len());
    for line in unified.split_inclusive('\n') {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&styled);
    }
    out
}
