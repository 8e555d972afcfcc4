//! Cron expression expansion: five schedule fields plus a command.
//!
//! Split into submodules:
//! - [`field`]: Field kinds, their domains, and single-token expansion
//! - [`expression`]: Whole-expression parsing into a [`ParsedSchedule`]
//! - [`format`]: Text and JSON rendering of a parsed schedule
//! - [`error`]: The [`ScheduleError`] taxonomy

pub mod error;
pub mod expression;
pub mod field;
pub mod format;

pub use error::{Result, ScheduleError};
pub use expression::{parse, ExpressionParser, ParsedSchedule};
pub use field::{expand, ExpandedField, FieldDomain, FieldKind};
pub use format::{render, render_json, render_text};
