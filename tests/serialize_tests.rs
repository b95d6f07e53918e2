//! End-to-end serialization: canonical layout, document order, formatting.

mod common;

use asap2::tree::{
    Alignment, AlignmentKind, Asap2Version, CompuTab, CompuTabEntry, ConversionType, Document,
    EcuAddress, FileComment, GenericBlock, Module, Project,
};
use asap2::{OrderSource, Serializer};
use common::{first_module_mut, loc, measurement, unit};

#[test]
fn small_document_renders_canonical_text() {
    let order = OrderSource::new();
    let version = Asap2Version::new(loc("test.a2l"), &order, 1, 71);
    let mut project = Project::new(loc("test.a2l"), &order, "TestProject", "Example project");
    let mut module = Module::new(loc("test.a2l"), &order, "TestModule", "Example module");
    module
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap();
    project.add_module(module).unwrap();

    // Attachment order differs from construction order; order ids win.
    let mut document = Document::new("test.a2l");
    document.push_project(project);
    document.set_asap2_version(version);

    let expected = "
ASAP2_VERSION 1 71
/begin PROJECT TestProject \"Example project\"
    /begin MODULE
        /* Name           */ TestModule
        /* LongIdentifier */ \"Example module\"
        /begin MEASUREMENT
            /* Name           */ speed
            /* LongIdentifier */ \"vehicle speed\"
            /* Datatype       */ UWORD
            /* Conversion     */ CM_speed
            /* Resolution     */ 1
            /* Accuracy       */ 0.5
            /* LowerLimit     */ 0
            /* UpperLimit     */ 300
        /end MEASUREMENT
    /end MODULE
/end PROJECT";
    assert_eq!(Serializer::new().to_string(&document), expected);
}

#[test]
fn module_children_render_by_order_id_not_insertion_order() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let speed = measurement("test.a2l", &order, "speed");
    let kmh = unit("test.a2l", &order, "kmh");

    // Insert the later-created unit first.
    let module = first_module_mut(&mut document);
    module.add_unit(kmh).unwrap();
    module.add_measurement(speed).unwrap();

    let text = Serializer::new().to_string(&document);
    let measurement_at = text.find("/begin MEASUREMENT").unwrap();
    let unit_at = text.find("/begin UNIT").unwrap();
    assert!(measurement_at < unit_at);
}

#[test]
fn optional_elements_absent_by_default() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    first_module_mut(&mut document)
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap();

    let text = Serializer::new().to_string(&document);
    assert!(!text.contains("BIT_MASK"));
    assert!(!text.contains("ECU_ADDRESS"));
    assert!(!text.contains("ANNOTATION"));
}

#[test]
fn hex_and_keyword_elements_render_inside_blocks() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);

    let mut speed = measurement("test.a2l", &order, "speed");
    speed.bit_mask = Some(0x0FFF);
    speed.ecu_address = Some(EcuAddress::new(loc("test.a2l"), &order, 0x1000));
    let mut kmh = unit("test.a2l", &order, "kmh");
    kmh.ref_unit = Some("velocity".to_string());

    let module = first_module_mut(&mut document);
    module.add_measurement(speed).unwrap();
    module.add_unit(kmh).unwrap();

    let text = Serializer::new().to_string(&document);
    assert!(text.contains("\n            BIT_MASK 0xFFF"));
    assert!(text.contains("\n            ECU_ADDRESS 0x1000"));
    assert!(text.contains("\n            REF_UNIT velocity"));
}

#[test]
fn alignment_renders_its_runtime_keyword() {
    let order = OrderSource::new();
    let alignment = Alignment::new(
        loc("test.a2l"),
        &order,
        AlignmentKind::Long,
        4,
    );
    let mut out = String::new();
    Serializer::new().write_node(&alignment, 0, &mut out).unwrap();
    assert_eq!(out, "\nALIGNMENT_LONG 4");
}

#[test]
fn unknown_block_renders_its_runtime_keyword() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let block = GenericBlock::new(loc("test.a2l"), &order, "CUSTOM_BLOCK", "payload 1 2");
    first_module_mut(&mut document).push_unknown(block);

    let text = Serializer::new().to_string(&document);
    assert!(text.contains("/begin CUSTOM_BLOCK payload 1 2"));
    assert!(text.contains("/end CUSTOM_BLOCK"));
}

#[test]
fn compu_tab_rows_render_numeric_out_values_unquoted() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let mut tab = CompuTab::new(
        loc("test.a2l"),
        &order,
        "CT_temp",
        "temperature table",
        ConversionType::TabIntp,
    );
    tab.data
        .push(CompuTabEntry::new(loc("test.a2l"), &order, 0.0, -30.0));
    tab.data
        .push(CompuTabEntry::new(loc("test.a2l"), &order, 10.0, 25.5));
    first_module_mut(&mut document).add_compu_tab(tab).unwrap();

    let text = Serializer::new().to_string(&document);
    assert!(text.contains("/* NumberValuePairs */ 2"));
    assert!(text.contains("\n             0 -30"));
    assert!(text.contains("\n             10 25.5"));
    assert!(!text.contains("\"-30\""));
    assert!(!text.contains("\"25.5\""));
}

#[test]
fn module_comment_renders_inside_the_module_body() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let module = first_module_mut(&mut document);
    module.push_comment(FileComment::new(
        loc("test.a2l"),
        &order,
        "speed signals",
        false,
    ));
    module
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap();

    let text = Serializer::new().to_string(&document);
    let comment_at = text.find("\n        /* speed signals */").unwrap();
    let measurement_at = text.find("/begin MEASUREMENT").unwrap();
    assert!(comment_at < measurement_at);
}

#[test]
fn file_comment_attached_last_still_renders_first() {
    let order = OrderSource::new();
    let comment = FileComment::new(loc("test.a2l"), &order, "generated file", false);
    let mut document = common::document_with_module("test.a2l", &order);
    document.push_comment(comment);

    let text = Serializer::new().to_string(&document);
    assert!(text.starts_with("/* generated file */\n"));
}

#[test]
fn serialization_is_deterministic() {
    let order = OrderSource::new();
    let mut document = common::document_with_module("test.a2l", &order);
    let module = first_module_mut(&mut document);
    module
        .add_measurement(measurement("test.a2l", &order, "speed"))
        .unwrap();
    module.add_unit(unit("test.a2l", &order, "kmh")).unwrap();

    let serializer = Serializer::new();
    assert_eq!(serializer.to_string(&document), serializer.to_string(&document));
}
