//! Rendering of a [`ParsedSchedule`] for stdout.

use ce_domain::config::{OutputConfig, OutputFormat};

use crate::expression::ParsedSchedule;

/// One line per field, then the command:
///
/// ```text
/// minute         0 15 30 45
/// hour           0
/// ...
/// command        /usr/bin/find
/// ```
///
/// Labels are left-justified in a `column_width` column followed by one space.
pub fn render_text(schedule: &ParsedSchedule, column_width: usize) -> String {
    let mut out = String::new();
    for (kind, values) in schedule.fields() {
        out.push_str(&format!("{:<column_width$} {values}\n", kind.name()));
    }
    out.push_str(&format!(
        "{:<column_width$} {}\n",
        "command",
        schedule.command()
    ));
    out
}

/// Pretty-printed JSON object keyed by field, plus `command`.
pub fn render_json(schedule: &ParsedSchedule) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(schedule)?;
    json.push('\n');
    Ok(json)
}

/// Render according to the configured output format.
pub fn render(schedule: &ParsedSchedule, output: &OutputConfig) -> serde_json::Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(schedule, output.column_width)),
        OutputFormat::Json => render_json(schedule),
    }
}
