//! Structural validation: hard failures, soft findings, version handling.

mod common;

use asap2::diagnostics::{CollectingReporter, Severity};
use asap2::tree::{Asap2Version, Document, Module, Project};
use asap2::{validate, OrderSource};
use common::{loc, measurement};

fn warnings(reporter: &CollectingReporter) -> Vec<&str> {
    reporter.messages(Severity::Warning).collect()
}

#[test]
fn document_without_project_is_a_hard_error() {
    let document = Document::new("empty.a2l");
    let mut reporter = CollectingReporter::new();

    let err = validate::document(&document, &mut reporter).unwrap_err();
    assert_eq!(err.message, "No PROJECT found, must be one");
    assert_eq!(reporter.count_of(Severity::Error), 1);
    assert_eq!(
        reporter.messages(Severity::Error).next(),
        Some("empty.a2l : No PROJECT found, must be one")
    );
}

#[test]
fn project_without_module_is_a_hard_error() {
    let order = OrderSource::new();
    let mut document = Document::new("test.a2l");
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    document.push_project(Project::new(loc("test.a2l"), &order, "P", "empty"));
    let mut reporter = CollectingReporter::new();

    let err = validate::document(&document, &mut reporter).unwrap_err();
    assert_eq!(err.message, "No MODULE found, must be at least one");
}

#[test]
fn complete_document_passes_without_findings() {
    let order = OrderSource::new();
    let mut document = Document::new("test.a2l");
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    let mut project = Project::new(loc("test.a2l"), &order, "P", "ok");
    project
        .add_module(Module::new(loc("test.a2l"), &order, "M", "ok"))
        .unwrap();
    document.push_project(project);
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    assert!(reporter.findings.is_empty());
}

#[test]
fn missing_version_marker_warns_and_falls_back() {
    let order = OrderSource::new();
    let document = common::document_with_module("test.a2l", &order);
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    let warnings = warnings(&reporter);
    assert!(warnings.iter().any(|w| w
        .contains("Mandatory element ASAP2_VERSION is not found, version of the file is set to 1.51")));
    // The 1.51 fallback is itself older than 1.60.
    assert!(warnings.iter().any(|w| w.contains("ASAP2_VERSION is less than 1.60")));
}

#[test]
fn old_version_warns() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 31));
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    assert!(warnings(&reporter)
        .iter()
        .any(|w| w.contains("ASAP2_VERSION is less than 1.60")));
}

#[test]
fn version_marker_after_project_warns_about_placement() {
    let order = OrderSource::new();
    // The marker is created after the project, so its order id is larger.
    let mut document = common::document_with_module("test.a2l", &order);
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    assert!(warnings(&reporter)
        .iter()
        .any(|w| w.contains("ASAP2_VERSION shall be placed before PROJECT")));
}

#[test]
fn second_project_warns_but_validation_continues() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let mut extra = Project::new(loc("test.a2l"), &order, "P2", "extra");
    extra
        .add_module(Module::new(loc("test.a2l"), &order, "M2", "extra"))
        .unwrap();
    document.push_project(extra);
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    assert!(warnings(&reporter)
        .iter()
        .any(|w| w.contains("Second PROJECT found, shall only be one")));
}

#[test]
fn invalid_element_name_is_a_hard_error() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    common::first_module_mut(&mut document)
        .add_measurement(measurement("test.a2l", &order, "1speed"))
        .unwrap();
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    let mut reporter = CollectingReporter::new();

    let err = validate::document(&document, &mut reporter).unwrap_err();
    assert!(err.message.contains("'1speed' is not a valid identifier"));
}

#[test]
fn overlong_element_name_is_soft_only() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let long_name = "m".repeat(200);
    common::first_module_mut(&mut document)
        .add_measurement(measurement("test.a2l", &order, &long_name))
        .unwrap();
    document.set_asap2_version(Asap2Version::new(loc("test.a2l"), &order, 1, 71));
    let mut reporter = CollectingReporter::new();

    assert!(validate::document(&document, &mut reporter).is_ok());
    assert!(warnings(&reporter)
        .iter()
        .any(|w| w.contains("longer than 128 (MAX_PARTIAL_IDENT)")));
}

#[test]
fn duplicate_names_are_rejected_at_insertion() {
    let order = OrderSource::new();
    let mut module = Module::new(loc("test.a2l"), &order, "M", "dup test");
    module
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap();
    let err = module
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap_err();
    assert_eq!(err.kind, "MEASUREMENT");
    assert_eq!(err.name, "speed");
}
