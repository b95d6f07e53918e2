//! FUNCTION and FRAME: grouping of ECU objects by software function and by
//! measurement frame.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::module::IfData;
use crate::tree::node::{ident_list_node, push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::Annotation;

/// A function of the ECU software and the objects belonging to it.
#[derive(Debug)]
pub struct Function {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub annotations: Vec<Annotation>,
    pub def_characteristic: Option<DefCharacteristic>,
    pub function_version: Option<String>,
    pub if_data: Vec<IfData>,
    pub ref_characteristic: Option<RefCharacteristic>,
    pub in_measurement: Option<InMeasurement>,
    pub loc_measurement: Option<LocMeasurement>,
    pub out_measurement: Option<OutMeasurement>,
    pub sub_function: Option<SubFunction>,
}

impl Function {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            annotations: Vec::new(),
            def_characteristic: None,
            function_version: None,
            if_data: Vec::new(),
            ref_characteristic: None,
            in_measurement: None,
            loc_measurement: None,
            out_measurement: None,
            sub_function: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Function {
    fn tag(&self) -> &'static str {
        "FUNCTION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" Name           "),
            Field::string(1, &self.long_identifier).comment(" LongIdentifier "),
        ];
        push_nodes(&mut fields, 2, &self.annotations);
        push_node(&mut fields, 3, &self.def_characteristic);
        if let Some(version) = &self.function_version {
            fields.push(Field::string(4, version).keyword("FUNCTION_VERSION"));
        }
        push_nodes(&mut fields, 5, &self.if_data);
        push_node(&mut fields, 6, &self.ref_characteristic);
        push_node(&mut fields, 7, &self.in_measurement);
        push_node(&mut fields, 8, &self.loc_measurement);
        push_node(&mut fields, 9, &self.out_measurement);
        push_node(&mut fields, 10, &self.sub_function);
        fields
    }
}

ident_list_node!(
    /// Characteristics defined (owned) by the enclosing function.
    DefCharacteristic,
    "DEF_CHARACTERISTIC"
);
ident_list_node!(
    /// Characteristics referenced but not owned by the enclosing function.
    RefCharacteristic,
    "REF_CHARACTERISTIC"
);
ident_list_node!(
    /// Input measurements of the enclosing function.
    InMeasurement,
    "IN_MEASUREMENT"
);
ident_list_node!(
    /// Local (intermediate) measurements of the enclosing function.
    LocMeasurement,
    "LOC_MEASUREMENT"
);
ident_list_node!(
    /// Output measurements of the enclosing function.
    OutMeasurement,
    "OUT_MEASUREMENT"
);
ident_list_node!(
    /// Nested sub-functions of the enclosing function.
    SubFunction,
    "SUB_FUNCTION"
);

/// A selection list of measurements recorded and displayed together.
#[derive(Debug)]
pub struct Frame {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub scaling_unit: u64,
    pub rate: u64,
    pub frame_measurement: Option<FrameMeasurement>,
    pub if_data: Vec<IfData>,
}

impl Frame {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        scaling_unit: u64,
        rate: u64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            scaling_unit,
            rate,
            frame_measurement: None,
            if_data: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Frame {
    fn tag(&self) -> &'static str {
        "FRAME"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" Name           "),
            Field::string(1, &self.long_identifier).comment(" LongIdentifier "),
            Field::arg(2, Scalar::UInt(self.scaling_unit)).comment(" ScalingUnit    "),
            Field::arg(3, Scalar::UInt(self.rate)).comment(" Rate           "),
        ];
        push_node(&mut fields, 4, &self.frame_measurement);
        push_nodes(&mut fields, 5, &self.if_data);
        fields
    }
}

/// Measurements bundled in a frame, rendered inline after the keyword.
#[derive(Debug, Clone)]
pub struct FrameMeasurement {
    info: NodeInfo,
    pub references: Vec<String>,
}

impl FrameMeasurement {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            references: Vec::new(),
        }
    }
}

impl Node for FrameMeasurement {
    fn tag(&self) -> &'static str {
        "FRAME_MEASUREMENT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.references
            .iter()
            .enumerate()
            .map(|(i, r)| Field::arg(i as u32, Scalar::Text(r)))
            .collect()
    }
}
