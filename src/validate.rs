//! Structural validation of a document.
//!
//! Hard findings are reported through the [`ErrorReporter`] *and* returned
//! as a [`ValidationError`], aborting the pass. Soft findings only go to
//! the reporter; the pass continues and still succeeds.

use crate::diagnostics::{report_error, report_warning, ErrorReporter, ValidationError};
use crate::ident;
use crate::location::Location;
use crate::tree::{Document, Module, Node, Project, FALLBACK_VERSION};

/// Validates a whole document.
///
/// Hard: no PROJECT; a PROJECT without MODULEs; invalid identifiers.
/// Soft: extra PROJECTs or version markers, marker placement, missing or
/// old ASAP2 versions, over-long identifiers.
pub fn document(
    document: &Document,
    reporter: &mut dyn ErrorReporter,
) -> Result<(), ValidationError> {
    let projects: Vec<&Project> = document.projects().collect();

    let first_project = match projects.first() {
        Some(project) => *project,
        None => {
            let err = ValidationError {
                location: Location::for_file(&document.base_file),
                message: "No PROJECT found, must be one".to_string(),
            };
            reporter.error(&format!("{} : No PROJECT found, must be one", document.base_file));
            return Err(err);
        }
    };

    if let Some(extra) = projects.get(1..).and_then(<[&Project]>::last) {
        report_warning(
            reporter,
            extra.info().location(),
            "Second PROJECT found, shall only be one",
        );
    }

    check_versions(document, first_project, reporter);

    project(first_project, reporter)
}

fn check_versions(document: &Document, first_project: &Project, reporter: &mut dyn ErrorReporter) {
    let (version_no, upgrade_no, version_location) = match document.asap2_version() {
        Some(marker) => {
            if marker.info().order_id() >= first_project.info().order_id() {
                report_warning(
                    reporter,
                    marker.info().location(),
                    "ASAP2_VERSION shall be placed before PROJECT",
                );
            }
            (
                marker.version_no,
                marker.upgrade_no,
                marker.info().location().clone(),
            )
        }
        None => {
            let location = Location::for_file(&document.base_file);
            report_warning(
                reporter,
                &location,
                "Mandatory element ASAP2_VERSION is not found, version of the file is set to 1.51",
            );
            (FALLBACK_VERSION.0, FALLBACK_VERSION.1, location)
        }
    };

    if version_no != 1 {
        report_warning(
            reporter,
            &version_location,
            "ASAP2_VERSION.VersionNo is not 1. This parser is primarily designed for version 1.",
        );
    } else if upgrade_no < 60 {
        report_warning(
            reporter,
            &version_location,
            "ASAP2_VERSION is less than 1.60. This parser is primarily designed for version 1.60 and newer.",
        );
    }

    if let Some(marker) = document.a2ml_version() {
        if marker.info().order_id() >= first_project.info().order_id() {
            report_warning(
                reporter,
                marker.info().location(),
                "A2ML_VERSION shall be placed before PROJECT",
            );
        }
    }
}

/// Validates one PROJECT: at least one MODULE, then each module in turn.
pub fn project(project: &Project, reporter: &mut dyn ErrorReporter) -> Result<(), ValidationError> {
    if project.module_count() == 0 {
        return Err(report_error(
            reporter,
            project.info().location(),
            "No MODULE found, must be at least one",
        ));
    }

    ident::validate(project.name(), project.info().location(), reporter)?;

    for m in project.modules() {
        module(m, reporter)?;
    }
    Ok(())
}

/// Validates one MODULE: its own name and every name in its namespaces.
pub fn module(module: &Module, reporter: &mut dyn ErrorReporter) -> Result<(), ValidationError> {
    ident::validate(module.name(), module.info().location(), reporter)?;
    for (name, location) in module.named_entries() {
        ident::validate(name, location, reporter)?;
    }
    Ok(())
}
