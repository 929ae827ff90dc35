//! # lintconv_diagnostic
//!
//! Canonical diagnostic records shared by every lintconv parser.
//!
//! - [`Diagnostic`]: one finding with a location and a message
//! - [`CheckResult`]: a diagnostic plus the raw lines it came from

mod diagnostic;
mod position;
mod result;

pub use diagnostic::{Code, Diagnostic, Severity, Source, Suggestion};
pub use position::{Location, Position, Range};
pub use result::CheckResult;
