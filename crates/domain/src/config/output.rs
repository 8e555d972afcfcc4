use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Output rendering
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Widest label the text renderer prints in the name column.
pub const WIDEST_LABEL: &str = "day of month";

/// How a parsed schedule is written to stdout.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned `name values` lines, one per field, then the command.
    #[default]
    Text,
    /// A single pretty-printed JSON object.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Width of the left-justified name column in text output.
    #[serde(default = "d_column_width")]
    pub column_width: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            column_width: d_column_width(),
            format: OutputFormat::default(),
        }
    }
}

fn d_column_width() -> usize {
    14
}
