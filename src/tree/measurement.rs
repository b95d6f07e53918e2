//! MEASUREMENT: an ECU quantity acquired at runtime.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::module::IfData;
use crate::tree::node::{ident_list_node, push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::{
    Annotation, ByteOrder, DataType, Discrete, DisplayIdentifier, EcuAddress, EcuAddressExtension,
    Format, IndexMode, MatrixDim, MaxRefresh, PhysUnit, ReadWrite, RefMemorySegment, SymbolLink,
};

#[derive(Debug)]
pub struct Measurement {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub datatype: DataType,
    /// Name of the conversion method, or `NO_COMPU_METHOD`.
    pub conversion: String,
    pub resolution: u64,
    pub accuracy: f64,
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub annotations: Vec<Annotation>,
    pub bit_mask: Option<u64>,
    pub bit_operation: Option<BitOperation>,
    pub byte_order: Option<ByteOrder>,
    pub discrete: Option<Discrete>,
    pub display_identifier: Option<DisplayIdentifier>,
    pub ecu_address: Option<EcuAddress>,
    pub ecu_address_extension: Option<EcuAddressExtension>,
    pub error_mask: Option<u64>,
    pub format: Option<Format>,
    pub if_data: Vec<IfData>,
    pub layout: Option<IndexMode>,
    pub matrix_dim: Option<MatrixDim>,
    pub max_refresh: Option<MaxRefresh>,
    pub phys_unit: Option<PhysUnit>,
    pub read_write: Option<ReadWrite>,
    pub ref_memory_segment: Option<RefMemorySegment>,
    pub symbol_link: Option<SymbolLink>,
    pub virtual_channels: Option<Virtual>,
}

impl Measurement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        datatype: DataType,
        conversion: impl Into<String>,
        resolution: u64,
        accuracy: f64,
        lower_limit: f64,
        upper_limit: f64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            datatype,
            conversion: conversion.into(),
            resolution,
            accuracy,
            lower_limit,
            upper_limit,
            annotations: Vec::new(),
            bit_mask: None,
            bit_operation: None,
            byte_order: None,
            discrete: None,
            display_identifier: None,
            ecu_address: None,
            ecu_address_extension: None,
            error_mask: None,
            format: None,
            if_data: Vec::new(),
            layout: None,
            matrix_dim: None,
            max_refresh: None,
            phys_unit: None,
            read_write: None,
            ref_memory_segment: None,
            symbol_link: None,
            virtual_channels: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Measurement {
    fn tag(&self) -> &'static str {
        "MEASUREMENT"
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
            Field::arg(2, Scalar::Enum(self.datatype.as_str())).comment(" Datatype       "),
            Field::arg(3, Scalar::Text(&self.conversion)).comment(" Conversion     "),
            Field::arg(4, Scalar::UInt(self.resolution)).comment(" Resolution     "),
            Field::arg(5, Scalar::Float(self.accuracy)).comment(" Accuracy       "),
            Field::arg(6, Scalar::Float(self.lower_limit)).comment(" LowerLimit     "),
            Field::arg(7, Scalar::Float(self.upper_limit)).comment(" UpperLimit     "),
        ];
        push_nodes(&mut fields, 8, &self.annotations);
        if let Some(mask) = self.bit_mask {
            fields.push(Field::arg(9, Scalar::UInt(mask)).keyword("BIT_MASK").hex());
        }
        push_node(&mut fields, 10, &self.bit_operation);
        push_node(&mut fields, 11, &self.byte_order);
        push_node(&mut fields, 12, &self.discrete);
        push_node(&mut fields, 13, &self.display_identifier);
        push_node(&mut fields, 14, &self.ecu_address);
        push_node(&mut fields, 15, &self.ecu_address_extension);
        if let Some(mask) = self.error_mask {
            fields.push(
                Field::arg(16, Scalar::UInt(mask))
                    .keyword("ERROR_MASK")
                    .hex(),
            );
        }
        push_node(&mut fields, 17, &self.format);
        push_nodes(&mut fields, 18, &self.if_data);
        if let Some(layout) = self.layout {
            fields.push(Field::arg(19, Scalar::Enum(layout.as_str())).keyword("LAYOUT"));
        }
        push_node(&mut fields, 20, &self.matrix_dim);
        push_node(&mut fields, 21, &self.max_refresh);
        push_node(&mut fields, 22, &self.phys_unit);
        push_node(&mut fields, 23, &self.read_write);
        push_node(&mut fields, 24, &self.ref_memory_segment);
        push_node(&mut fields, 25, &self.symbol_link);
        push_node(&mut fields, 26, &self.virtual_channels);
        fields
    }
}

/// Bit extraction applied before the conversion method.
#[derive(Debug, Clone)]
pub struct BitOperation {
    info: NodeInfo,
    pub left_shift: Option<LeftShift>,
    pub right_shift: Option<RightShift>,
    pub sign_extend: bool,
}

impl BitOperation {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            left_shift: None,
            right_shift: None,
            sign_extend: false,
        }
    }
}

impl Node for BitOperation {
    fn tag(&self) -> &'static str {
        "BIT_OPERATION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::new();
        push_node(&mut fields, 0, &self.left_shift);
        push_node(&mut fields, 1, &self.right_shift);
        if self.sign_extend {
            fields.push(Field::arg(2, Scalar::Enum("SIGN_EXTEND")).on_new_line());
        }
        fields
    }
}

#[derive(Debug, Clone)]
pub struct LeftShift {
    info: NodeInfo,
    pub bits: u64,
}

impl LeftShift {
    pub fn new(location: Location, order: &OrderSource, bits: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            bits,
        }
    }
}

impl Node for LeftShift {
    fn tag(&self) -> &'static str {
        "LEFT_SHIFT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::UInt(self.bits))]
    }
}

#[derive(Debug, Clone)]
pub struct RightShift {
    info: NodeInfo,
    pub bits: u64,
}

impl RightShift {
    pub fn new(location: Location, order: &OrderSource, bits: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            bits,
        }
    }
}

impl Node for RightShift {
    fn tag(&self) -> &'static str {
        "RIGHT_SHIFT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::UInt(self.bits))]
    }
}

ident_list_node!(
    /// Declares the enclosing measurement as computed from other channels.
    Virtual,
    "VIRTUAL",
    " MeasuringChannel "
);
