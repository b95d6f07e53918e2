//! Merging documents: both module modes, both conflict policies.

mod common;

use asap2::diagnostics::{CollectingReporter, MergeError, Severity};
use asap2::tree::{A2ml, FileComment, GenericBlock, Module, Project};
use asap2::{ConflictPolicy, Document, MergeOptions, Merger, ModuleMergeMode, OrderSource};
use common::{first_module, first_module_mut, loc, measurement, unit};

fn merger(module_merge_mode: ModuleMergeMode, conflict_policy: ConflictPolicy) -> Merger {
    Merger::new(MergeOptions {
        module_merge_mode,
        conflict_policy,
    })
}

fn document_with_named_module(file: &str, order: &OrderSource, module_name: &str) -> Document {
    let mut document = Document::new(file);
    let mut project = Project::new(loc(file), order, "P", "project");
    project
        .add_module(Module::new(loc(file), order, module_name, "module"))
        .unwrap();
    document.push_project(project);
    document
}

#[test]
fn side_by_side_adds_source_modules() {
    let order = OrderSource::new();
    let dest = document_with_named_module("a.a2l", &order, "ModuleA");
    let source = document_with_named_module("b.a2l", &order, "ModuleB");
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::SideBySide, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let project = merged.project().unwrap();
    assert_eq!(project.module_count(), 2);
    assert!(project.module("ModuleA").is_some());
    assert!(project.module("ModuleB").is_some());
    assert!(reporter.findings.is_empty());
}

#[test]
fn side_by_side_duplicate_module_keeps_first_and_warns() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "Shared");
    first_module_mut(&mut dest)
        .add_measurement(measurement("a.a2l", &order, "kept"))
        .unwrap();
    let source = document_with_named_module("b.a2l", &order, "Shared");
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::SideBySide, ConflictPolicy::KeepFirstAndWarn)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let project = merged.project().unwrap();
    assert_eq!(project.module_count(), 1);
    assert!(first_module(&merged).measurement("kept").is_some());
    assert_eq!(reporter.count_of(Severity::Warning), 1);
    assert!(reporter
        .messages(Severity::Warning)
        .next()
        .unwrap()
        .contains("Duplicate MODULE with name 'Shared'"));
}

#[test]
fn side_by_side_duplicate_module_aborts_under_abort_policy() {
    let order = OrderSource::new();
    let dest = document_with_named_module("a.a2l", &order, "Shared");
    let source = document_with_named_module("b.a2l", &order, "Shared");
    let mut reporter = CollectingReporter::new();

    let err = merger(ModuleMergeMode::SideBySide, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap_err();
    match err {
        MergeError::Collision(collision) => {
            assert_eq!(collision.kind, "MODULE");
            assert_eq!(collision.name, "Shared");
        }
        other => panic!("expected a collision, got {other:?}"),
    }
}

#[test]
fn collapse_folds_all_modules_into_one() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "ModuleA");
    first_module_mut(&mut dest)
        .add_measurement(measurement("a.a2l", &order, "speed"))
        .unwrap();
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    first_module_mut(&mut source)
        .add_unit(unit("b.a2l", &order, "kmh"))
        .unwrap();
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::Collapse, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let project = merged.project().unwrap();
    assert_eq!(project.module_count(), 1);
    let module = first_module(&merged);
    assert!(module.measurement("speed").is_some());
    assert!(module.unit("kmh").is_some());
}

#[test]
fn collapse_second_singleton_warns_and_keeps_first() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "ModuleA");
    first_module_mut(&mut dest).push_a2ml(A2ml::new(loc("a.a2l"), &order, "block first"));
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    first_module_mut(&mut source).push_a2ml(A2ml::new(loc("b.a2l"), &order, "block second"));
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::Collapse, ConflictPolicy::KeepFirstAndWarn)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let module = first_module(&merged);
    let a2ml_children: Vec<_> = module
        .children()
        .iter()
        .filter(|c| c.kind() == "A2ML")
        .collect();
    assert_eq!(a2ml_children.len(), 1);
    assert!(reporter
        .messages(Severity::Warning)
        .any(|w| w.contains("A2ML found in both a.a2l and b.a2l")));
}

#[test]
fn collapse_second_singleton_aborts_under_abort_policy() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "ModuleA");
    first_module_mut(&mut dest).push_a2ml(A2ml::new(loc("a.a2l"), &order, "block first"));
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    first_module_mut(&mut source).push_a2ml(A2ml::new(loc("b.a2l"), &order, "block second"));
    let mut reporter = CollectingReporter::new();

    let err = merger(ModuleMergeMode::Collapse, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap_err();
    match err {
        MergeError::Singleton { kind, first, second } => {
            assert_eq!(kind, "A2ML");
            assert_eq!(first.file, "a.a2l");
            assert_eq!(second.file, "b.a2l");
        }
        other => panic!("expected a singleton conflict, got {other:?}"),
    }
}

#[test]
fn collapse_second_module_comment_warns_and_keeps_first() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "ModuleA");
    first_module_mut(&mut dest).push_comment(FileComment::new(
        loc("a.a2l"),
        &order,
        "base calibration",
        false,
    ));
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    first_module_mut(&mut source).push_comment(FileComment::new(
        loc("b.a2l"),
        &order,
        "variant calibration",
        false,
    ));
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::Collapse, ConflictPolicy::KeepFirstAndWarn)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let comments: Vec<_> = first_module(&merged)
        .children()
        .iter()
        .filter_map(|c| match c {
            asap2::tree::ModuleChild::Comment(comment) => Some(comment.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(comments, ["base calibration"]);
    assert!(reporter
        .messages(Severity::Warning)
        .any(|w| w.contains("FILE_COMMENT found in both a.a2l and b.a2l")));
}

#[test]
fn collapse_duplicate_name_keeps_destination_value() {
    let order = OrderSource::new();
    let mut dest = document_with_named_module("a.a2l", &order, "ModuleA");
    let mut first_speed = measurement("a.a2l", &order, "speed");
    first_speed.resolution = 1;
    first_module_mut(&mut dest).add_measurement(first_speed).unwrap();
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    let mut second_speed = measurement("b.a2l", &order, "speed");
    second_speed.resolution = 16;
    first_module_mut(&mut source).add_measurement(second_speed).unwrap();
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::Collapse, ConflictPolicy::KeepFirstAndWarn)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let module = first_module(&merged);
    assert_eq!(module.measurement("speed").unwrap().resolution, 1);
    assert!(reporter
        .messages(Severity::Warning)
        .any(|w| w.contains("Duplicate MEASUREMENT with name 'speed'")));
}

#[test]
fn collapse_appends_unknown_blocks_with_a_warning() {
    let order = OrderSource::new();
    let dest = document_with_named_module("a.a2l", &order, "ModuleA");
    let mut source = document_with_named_module("b.a2l", &order, "ModuleB");
    first_module_mut(&mut source)
        .push_unknown(GenericBlock::new(loc("b.a2l"), &order, "CUSTOM_BLOCK", "payload"));
    let mut reporter = CollectingReporter::new();

    let merged = merger(ModuleMergeMode::Collapse, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap();

    let module = first_module(&merged);
    assert!(module.children().iter().any(|c| match c {
        asap2::tree::ModuleChild::Unknown(block) => block.keyword == "CUSTOM_BLOCK",
        _ => false,
    }));
    assert!(reporter
        .messages(Severity::Warning)
        .any(|w| w.contains("Unhandled element kind 'CUSTOM_BLOCK'")));
}

#[test]
fn merging_a_document_without_project_fails() {
    let order = OrderSource::new();
    let dest = document_with_named_module("a.a2l", &order, "ModuleA");
    let source = Document::new("b.a2l");
    let mut reporter = CollectingReporter::new();

    let err = merger(ModuleMergeMode::SideBySide, ConflictPolicy::Abort)
        .merge(dest, vec![source], &mut reporter)
        .unwrap_err();
    assert!(matches!(err, MergeError::NoProject { file } if file == "b.a2l"));
}
