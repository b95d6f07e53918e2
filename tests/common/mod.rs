//! Shared builders for the integration tests.
//!
//! Every helper threads the caller's [`OrderSource`] through, so tests can
//! control the relative document order of what they build.

use asap2::tree::{DataType, Document, Measurement, Module, Project, Unit, UnitType};
use asap2::{Location, OrderSource};

pub fn loc(file: &str) -> Location {
    Location::for_file(file)
}

/// A document with one PROJECT and one empty MODULE.
pub fn document_with_module(file: &str, order: &OrderSource) -> Document {
    let mut document = Document::new(file);
    let mut project = Project::new(loc(file), order, "TestProject", "Example project");
    let module = Module::new(loc(file), order, "TestModule", "Example module");
    project
        .add_module(module)
        .unwrap_or_else(|_| panic!("fresh project rejected its first module"));
    document.push_project(project);
    document
}

pub fn measurement(file: &str, order: &OrderSource, name: &str) -> Measurement {
    Measurement::new(
        loc(file),
        order,
        name,
        "vehicle speed",
        DataType::Uword,
        "CM_speed",
        1,
        0.5,
        0.0,
        300.0,
    )
}

pub fn unit(file: &str, order: &OrderSource, name: &str) -> Unit {
    Unit::new(loc(file), order, name, "kilometres per hour", "km/h", UnitType::Derived)
}

/// The first module of the document's first project.
pub fn first_module(document: &Document) -> &Module {
    document
        .project()
        .and_then(|p| p.modules().next())
        .unwrap_or_else(|| panic!("document has no module"))
}

pub fn first_module_mut(document: &mut Document) -> &mut Module {
    document
        .project_mut()
        .and_then(|p| p.first_module_mut())
        .unwrap_or_else(|| panic!("document has no module"))
}
