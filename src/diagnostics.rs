//! Unified diagnostics for the ASAP2 core.
//!
//! Two channels exist side by side:
//!
//! - **Hard errors** are values of [`ValidationError`], [`DuplicateName`] or
//!   [`MergeError`]. They unwind to the caller of validate/merge via
//!   `Result` and abort the current pass. The core performs no retries; a
//!   caller wanting best-effort multi-document processing catches per
//!   document and continues explicitly.
//! - **Soft findings** (warnings and information) are delivered through the
//!   [`ErrorReporter`] collaborator as formatted message strings and never
//!   interrupt control flow. There are no structured codes at this layer.

use std::io::Write as _;

use miette::Diagnostic;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use thiserror::Error;

use crate::location::Location;

// ============================================================================
// REPORTING - the soft-finding collaborator
// ============================================================================

/// Severity of a reported finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
    Information,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Information => "Information",
        }
    }
}

/// Receiver for findings produced while building, validating or merging a
/// document. The front end reports lexical and grammar errors on the same
/// channel before aborting its own pass.
pub trait ErrorReporter {
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
    fn information(&mut self, message: &str);
}

/// Formats a validation warning with the standard location prefix and hands
/// it to the reporter.
pub fn report_warning(reporter: &mut dyn ErrorReporter, location: &Location, message: &str) {
    reporter.warning(&format!("{location} : ValidationWarning : {message}"));
}

/// Formats a validation information finding with the standard location prefix.
pub fn report_information(reporter: &mut dyn ErrorReporter, location: &Location, message: &str) {
    reporter.information(&format!("{location} : ValidationInformation : {message}"));
}

/// Formats the message of a hard finding, reports it, and returns the
/// [`ValidationError`] for the caller to propagate.
pub fn report_error(
    reporter: &mut dyn ErrorReporter,
    location: &Location,
    message: &str,
) -> ValidationError {
    let err = ValidationError {
        location: location.clone(),
        message: message.to_string(),
    };
    reporter.error(&err.to_string());
    err
}

/// Reporter that writes colorized findings to stderr. Warnings render
/// yellow, errors red, information plain; colors are suppressed when stderr
/// is not a terminal.
pub struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stderr) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stderr(choice),
        }
    }

    fn emit(&mut self, color: Option<Color>, message: &str) {
        // Best effort; a broken stderr must not take the pipeline down.
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(color).set_bold(color.is_some()));
        let _ = writeln!(self.stream, "{message}");
        let _ = self.stream.reset();
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for ConsoleReporter {
    fn warning(&mut self, message: &str) {
        self.emit(Some(Color::Yellow), message);
    }

    fn error(&mut self, message: &str) {
        self.emit(Some(Color::Red), message);
    }

    fn information(&mut self, message: &str) {
        self.emit(None, message);
    }
}

/// Reporter that collects findings in memory. Used by tests and by callers
/// that post-process findings themselves.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub findings: Vec<(Severity, String)>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_of(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|(s, _)| *s == severity).count()
    }

    pub fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
    }
}

impl ErrorReporter for CollectingReporter {
    fn warning(&mut self, message: &str) {
        self.findings.push((Severity::Warning, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.findings.push((Severity::Error, message.to_string()));
    }

    fn information(&mut self, message: &str) {
        self.findings
            .push((Severity::Information, message.to_string()));
    }
}

// ============================================================================
// HARD ERRORS
// ============================================================================

/// A structural invariant violation. Aborts the current validation pass.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
#[error("{location} : ValidationError : {message}")]
pub struct ValidationError {
    pub location: Location,
    pub message: String,
}

/// A name collision inside a uniqueness-constrained namespace, raised by the
/// typed insertion accessors. Carries both colliding locations so the same
/// value serves initial construction and merging.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
#[error("Duplicate {kind} with name '{name}': first defined at {existing}, again at {incoming}")]
pub struct DuplicateName {
    /// Keyword of the colliding element kind, e.g. `MEASUREMENT`.
    pub kind: &'static str,
    pub name: String,
    pub existing: Location,
    pub incoming: Location,
}

impl From<DuplicateName> for ValidationError {
    fn from(err: DuplicateName) -> Self {
        ValidationError {
            location: err.incoming.clone(),
            message: err.to_string(),
        }
    }
}

/// A conflict that aborted a merge.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum MergeError {
    /// A singleton block kind ended up with multiplicity greater than one.
    #[error("merge conflict: {kind} found in both {first} and {second}")]
    Singleton {
        kind: &'static str,
        first: Location,
        second: Location,
    },
    /// A name collision surfaced through the normal insertion path.
    #[error("merge conflict: {0}")]
    Collision(#[from] DuplicateName),
    /// A document passed to the merger has no PROJECT.
    #[error("{file} : no PROJECT found, nothing to merge")]
    NoProject { file: String },
    /// Collapse mode needs a destination module to fold into.
    #[error("{file} : PROJECT has no MODULE, nothing to merge into")]
    NoModule { file: String },
}
