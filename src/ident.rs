//! Identifier validation.
//!
//! ASAP2 identifiers are dot-separated segments; each segment starts with a
//! letter or underscore and may carry bracketed suffixes (`Foo.Bar_1[2]`).
//! A pattern violation is a hard failure. Length excess is soft only:
//! 128 characters per segment (MAX_PARTIAL_IDENT), 1024 for the full
//! multi-segment identifier (MAX_IDENT).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{report_error, ErrorReporter, ValidationError};
use crate::location::Location;

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\[[A-Za-z0-9_]*\])*$").unwrap());

const MAX_PARTIAL_IDENT: usize = 128;
const MAX_IDENT: usize = 1024;

/// Checks `identifier` against the pattern and length rules, reporting soft
/// findings through `reporter` and returning a hard error on a pattern
/// violation.
pub fn validate(
    identifier: &str,
    location: &Location,
    reporter: &mut dyn ErrorReporter,
) -> Result<(), ValidationError> {
    let segments: Vec<&str> = identifier.split('.').collect();

    if segments.len() > 1 && identifier.len() > MAX_IDENT {
        reporter.warning(&format!(
            "Identifier '{identifier}' is not a valid identifier, is longer than {MAX_IDENT} (MAX_IDENT)."
        ));
    }

    for segment in segments {
        if segment.len() > MAX_PARTIAL_IDENT {
            reporter.warning(&format!(
                "Part '{segment}' of Identifier '{identifier}' is not a valid identifier, \
                 the part is longer than {MAX_PARTIAL_IDENT} (MAX_PARTIAL_IDENT)"
            ));
        }

        if !SEGMENT.is_match(segment) {
            return Err(report_error(
                reporter,
                location,
                &format!("Part '{segment}' of Identifier '{identifier}' is not a valid identifier"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingReporter, Severity};

    fn check(identifier: &str) -> (Result<(), ValidationError>, CollectingReporter) {
        let mut reporter = CollectingReporter::new();
        let result = validate(identifier, &Location::default(), &mut reporter);
        (result, reporter)
    }

    #[test]
    fn dotted_identifier_with_suffix_is_valid() {
        let (result, reporter) = check("Foo.Bar_1[2]");
        assert!(result.is_ok());
        assert!(reporter.findings.is_empty());
    }

    #[test]
    fn leading_digit_is_a_hard_failure() {
        let (result, _) = check("1Foo");
        assert!(result.is_err());
    }

    #[test]
    fn empty_segment_is_a_hard_failure() {
        let (result, _) = check("Foo..Bar");
        assert!(result.is_err());
    }

    #[test]
    fn long_segment_is_only_a_warning() {
        let long = "x".repeat(200);
        let (result, reporter) = check(&long);
        assert!(result.is_ok());
        assert_eq!(reporter.count_of(Severity::Warning), 1);
    }
}
