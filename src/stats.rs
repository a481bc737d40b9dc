//! Cancellation statistics table

use crate::rules::ContextRule;

const NAME_HEADER: &str = "Context";
const COUNT_HEADER: &str = "Canceled Commands";
const PADDING: usize = 4;

/// Render a table of cancellation counts, most canceled first.
///
/// Rules with equal counts keep their stored order.
pub fn render(rules: &[ContextRule]) -> String {
    if rules.is_empty() {
        return "No contexts found.\n".to_string();
    }

    let mut sorted: Vec<&ContextRule> = rules.iter().collect();
    sorted.sort_by(|a, b| b.canceled_count().cmp(&a.canceled_count()));

    let name_width = sorted
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max(NAME_HEADER.len())
        + PADDING;
    let separator = "-".repeat(name_width + COUNT_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!("{NAME_HEADER:<name_width$}{COUNT_HEADER}\n"));
    out.push_str(&separator);
    out.push('\n');
    for rule in sorted {
        out.push_str(&format!(
            "{:<name_width$}{}\n",
            rule.name,
            rule.canceled_count()
        ));
    }
    out.push_str(&separator);
    out.push('\n');
    out
}
