//! Whole-expression parsing: five schedule fields followed by a command.

use serde::Serialize;
use tracing::debug;

use ce_domain::trace::TraceEvent;

use crate::error::{Result, ScheduleError};
use crate::field::{expand, ExpandedField, FieldDomain, FieldKind};

/// Schedule fields plus at least one command token.
const MIN_TOKENS: usize = FieldKind::ALL.len() + 1;

/// The fully expanded result of one successful parse.
///
/// Built only when every field is valid; there is no partially filled
/// schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedSchedule {
    minute: ExpandedField,
    hour: ExpandedField,
    day_of_month: ExpandedField,
    month: ExpandedField,
    day_of_week: ExpandedField,
    command: String,
}

impl ParsedSchedule {
    pub fn get(&self, kind: FieldKind) -> &ExpandedField {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// Fields in canonical order: minute, hour, day of month, month, day of week.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, &ExpandedField)> + '_ {
        FieldKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Command tokens joined by single spaces.
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Splits an expression into fields and expands each against its domain.
#[derive(Clone, Debug)]
pub struct ExpressionParser {
    domains: Vec<(FieldKind, FieldDomain)>,
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::with_domains(FieldKind::ALL.into_iter().map(|k| (k, k.domain())).collect())
    }
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_domains(domains: Vec<(FieldKind, FieldDomain)>) -> Self {
        Self { domains }
    }

    fn domain_for(&self, kind: FieldKind) -> Result<FieldDomain> {
        self.domains
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, d)| *d)
            .ok_or(ScheduleError::UnknownFieldKind(kind.name()))
    }

    /// Parse `expression` into a [`ParsedSchedule`].
    ///
    /// Tokens are separated by runs of whitespace. The first failing field
    /// aborts the parse and its error is returned unchanged.
    pub fn parse(&self, expression: &str) -> Result<ParsedSchedule> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        let result = self.parse_tokens(&tokens);

        match &result {
            Ok(schedule) => TraceEvent::ScheduleParsed {
                expression_tokens: tokens.len(),
                total_values: schedule.fields().map(|(_, f)| f.len()).sum(),
                command_chars: schedule.command.len(),
            }
            .emit(),
            Err(e) => TraceEvent::ScheduleRejected {
                reason: e.to_string(),
            }
            .emit(),
        }

        result
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<ParsedSchedule> {
        if tokens.len() < MIN_TOKENS {
            return Err(ScheduleError::Structure {
                found: tokens.len(),
            });
        }

        let field = |kind: FieldKind| -> Result<ExpandedField> {
            let token = tokens[kind.position()];
            let values = expand(token, self.domain_for(kind)?)?;
            debug!(field = kind.name(), token, values = values.len(), "field expanded");
            Ok(values)
        };

        // Struct fields evaluate in source order, so the first bad field wins.
        Ok(ParsedSchedule {
            minute: field(FieldKind::Minute)?,
            hour: field(FieldKind::Hour)?,
            day_of_month: field(FieldKind::DayOfMonth)?,
            month: field(FieldKind::Month)?,
            day_of_week: field(FieldKind::DayOfWeek)?,
            command: tokens[FieldKind::ALL.len()..].join(" "),
        })
    }
}

/// Parse with the standard five-field domain table.
pub fn parse(expression: &str) -> Result<ParsedSchedule> {
    ExpressionParser::default().parse(expression)
}
