//! Field kinds, their integer domains, and expansion of a single field token.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{Result, ScheduleError};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field kinds & domains
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The five schedule fields, in the order they appear in an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All kinds in expression (and output) order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Human-readable label used in text output.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }

    /// Zero-based token index within an expression.
    pub fn position(self) -> usize {
        match self {
            FieldKind::Minute => 0,
            FieldKind::Hour => 1,
            FieldKind::DayOfMonth => 2,
            FieldKind::Month => 3,
            FieldKind::DayOfWeek => 4,
        }
    }

    pub fn domain(self) -> FieldDomain {
        match self {
            FieldKind::Minute => FieldDomain::new(0, 59),
            FieldKind::Hour => FieldDomain::new(0, 23),
            FieldKind::DayOfMonth => FieldDomain::new(1, 31),
            FieldKind::Month => FieldDomain::new(1, 12),
            FieldKind::DayOfWeek => FieldDomain::new(0, 6),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive `[min, max]` bounds for one field kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDomain {
    pub min: u32,
    pub max: u32,
}

impl FieldDomain {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of integers in the domain; zero when `min > max`.
    pub fn count(self) -> usize {
        if self.min > self.max {
            return 0;
        }
        (self.max - self.min) as usize + 1
    }

    pub fn values(self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Expanded values
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The explicit integers a field token denotes.
///
/// Ascending for wildcard, step and range tokens; list tokens keep the
/// order they were written in, duplicates included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpandedField(Vec<u32>);

impl ExpandedField {
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u32> for ExpandedField {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Space-separated, no brackets: `0 15 30 45`.
impl fmt::Display for ExpandedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Expansion
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Expand one field token against its domain.
///
/// Forms are tried in a fixed order and the first one that matches the
/// token's shape decides; a token is never retried as a later form.
///
/// 1. `*`: every value in the domain
/// 2. `*/N`: every Nth value starting at the domain minimum (N ≥ 1)
/// 3. anything containing `-`: an inclusive `a-b` range
/// 4. anything containing `,`: a list of literals, order preserved
/// 5. otherwise: a single literal
pub fn expand(token: &str, domain: FieldDomain) -> Result<ExpandedField> {
    if token == "*" {
        return Ok(domain.values().collect());
    }

    if let Some(step) = token.strip_prefix("*/") {
        let step: usize = step
            .parse()
            .map_err(|_| ScheduleError::InvalidStep(token.to_owned()))?;
        if step == 0 {
            return Err(ScheduleError::InvalidStep(token.to_owned()));
        }
        return Ok(domain.values().step_by(step).collect());
    }

    if token.contains('-') {
        return expand_range(token, domain);
    }

    if token.contains(',') {
        return token
            .split(',')
            .map(|entry| {
                parse_in_domain(entry, domain)
                    .ok_or_else(|| ScheduleError::ListValue(entry.to_owned()))
            })
            .collect();
    }

    parse_in_domain(token, domain)
        .map(|v| ExpandedField(vec![v]))
        .ok_or_else(|| ScheduleError::LiteralValue(token.to_owned()))
}

fn expand_range(token: &str, domain: FieldDomain) -> Result<ExpandedField> {
    let parts: Vec<&str> = token.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(ScheduleError::RangeFormat(token.to_owned()));
    };

    match (start.parse::<u32>(), end.parse::<u32>()) {
        (Ok(start), Ok(end))
            if start <= end && domain.contains(start) && domain.contains(end) =>
        {
            Ok((start..=end).collect())
        }
        _ => Err(ScheduleError::RangeValue(token.to_owned())),
    }
}

fn parse_in_domain(s: &str, domain: FieldDomain) -> Option<u32> {
    s.parse::<u32>().ok().filter(|v| domain.contains(*v))
}
