use serde::Serialize;

/// Structured trace events emitted across all cronexpand crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ConfigLoaded {
        path: String,
        from_file: bool,
        issues: usize,
    },
    ScheduleParsed {
        expression_tokens: usize,
        total_values: usize,
        command_chars: usize,
    },
    ScheduleRejected {
        reason: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "ce_event");
    }
}
