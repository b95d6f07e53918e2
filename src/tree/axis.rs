//! Axis descriptions: the per-axis blocks of a CHARACTERISTIC and the
//! standalone AXIS_PTS parameter holding shared axis sample values.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::module::IfData;
use crate::tree::node::{push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::{
    Annotation, ByteOrder, CalibrationAccess, Deposit, DisplayIdentifier, EcuAddressExtension,
    ExtendedLimits, Format, GuardRails, Monotony, PhysUnit, ReadOnly, RefMemorySegment, StepSize,
    SymbolLink,
};

/// How an axis is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAttr {
    CurveAxis,
    ComAxis,
    FixAxis,
    ResAxis,
    StdAxis,
}

impl AxisAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            AxisAttr::CurveAxis => "CURVE_AXIS",
            AxisAttr::ComAxis => "COM_AXIS",
            AxisAttr::FixAxis => "FIX_AXIS",
            AxisAttr::ResAxis => "RES_AXIS",
            AxisAttr::StdAxis => "STD_AXIS",
        }
    }
}

/// One axis of a curve or map characteristic.
#[derive(Debug)]
pub struct AxisDescr {
    info: NodeInfo,
    pub attribute: AxisAttr,
    /// Input measurement driving the axis, or `NO_INPUT_QUANTITY`.
    pub input_quantity: String,
    pub conversion: String,
    pub max_axis_points: u64,
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub annotations: Vec<Annotation>,
    /// Referenced AXIS_PTS parameter for COM_AXIS and RES_AXIS.
    pub axis_pts_ref: Option<String>,
    pub byte_order: Option<ByteOrder>,
    /// Referenced curve characteristic for CURVE_AXIS.
    pub curve_axis_ref: Option<String>,
    pub deposit: Option<Deposit>,
    pub extended_limits: Option<ExtendedLimits>,
    pub fix_axis_par: Option<FixAxisPar>,
    pub fix_axis_par_dist: Option<FixAxisParDist>,
    pub fix_axis_par_list: Option<FixAxisParList>,
    pub format: Option<Format>,
    pub max_grad: Option<f64>,
    pub monotony: Option<Monotony>,
    pub phys_unit: Option<PhysUnit>,
    pub read_only: Option<ReadOnly>,
    pub step_size: Option<StepSize>,
}

impl AxisDescr {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        attribute: AxisAttr,
        input_quantity: impl Into<String>,
        conversion: impl Into<String>,
        max_axis_points: u64,
        lower_limit: f64,
        upper_limit: f64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            attribute,
            input_quantity: input_quantity.into(),
            conversion: conversion.into(),
            max_axis_points,
            lower_limit,
            upper_limit,
            annotations: Vec::new(),
            axis_pts_ref: None,
            byte_order: None,
            curve_axis_ref: None,
            deposit: None,
            extended_limits: None,
            fix_axis_par: None,
            fix_axis_par_dist: None,
            fix_axis_par_list: None,
            format: None,
            max_grad: None,
            monotony: None,
            phys_unit: None,
            read_only: None,
            step_size: None,
        }
    }
}

impl Node for AxisDescr {
    fn tag(&self) -> &'static str {
        "AXIS_DESCR"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Enum(self.attribute.as_str())).comment(" Attribute     "),
            Field::arg(1, Scalar::Text(&self.input_quantity)).comment(" InputQuantity "),
            Field::arg(2, Scalar::Text(&self.conversion)).comment(" Conversion    "),
            Field::arg(3, Scalar::UInt(self.max_axis_points)).comment(" MaxAxisPoints "),
            Field::arg(4, Scalar::Float(self.lower_limit)).comment(" LowerLimit    "),
            Field::arg(5, Scalar::Float(self.upper_limit)).comment(" UpperLimit    "),
        ];
        push_nodes(&mut fields, 6, &self.annotations);
        if let Some(reference) = &self.axis_pts_ref {
            fields.push(Field::arg(7, Scalar::Text(reference)).keyword("AXIS_PTS_REF"));
        }
        push_node(&mut fields, 8, &self.byte_order);
        if let Some(reference) = &self.curve_axis_ref {
            fields.push(Field::arg(9, Scalar::Text(reference)).keyword("CURVE_AXIS_REF"));
        }
        push_node(&mut fields, 10, &self.deposit);
        push_node(&mut fields, 11, &self.extended_limits);
        push_node(&mut fields, 12, &self.fix_axis_par);
        push_node(&mut fields, 13, &self.fix_axis_par_dist);
        push_node(&mut fields, 14, &self.fix_axis_par_list);
        push_node(&mut fields, 15, &self.format);
        if let Some(grad) = self.max_grad {
            fields.push(Field::arg(16, Scalar::Float(grad)).keyword("MAX_GRAD"));
        }
        push_node(&mut fields, 17, &self.monotony);
        push_node(&mut fields, 18, &self.phys_unit);
        push_node(&mut fields, 19, &self.read_only);
        push_node(&mut fields, 20, &self.step_size);
        fields
    }
}

/// Fixed axis samples as offset, shift and point count.
#[derive(Debug, Clone)]
pub struct FixAxisPar {
    info: NodeInfo,
    pub offset: i64,
    pub shift: i64,
    pub number_apo: u64,
}

impl FixAxisPar {
    pub fn new(
        location: Location,
        order: &OrderSource,
        offset: i64,
        shift: i64,
        number_apo: u64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            offset,
            shift,
            number_apo,
        }
    }
}

impl Node for FixAxisPar {
    fn tag(&self) -> &'static str {
        "FIX_AXIS_PAR"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Int(self.offset)).comment(" Offset    "),
            Field::arg(1, Scalar::Int(self.shift)).comment(" Shift     "),
            Field::arg(2, Scalar::UInt(self.number_apo)).comment(" Numberapo "),
        ]
    }
}

/// Fixed axis samples as offset, distance and point count.
#[derive(Debug, Clone)]
pub struct FixAxisParDist {
    info: NodeInfo,
    pub offset: i64,
    pub distance: i64,
    pub number_apo: u64,
}

impl FixAxisParDist {
    pub fn new(
        location: Location,
        order: &OrderSource,
        offset: i64,
        distance: i64,
        number_apo: u64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            offset,
            distance,
            number_apo,
        }
    }
}

impl Node for FixAxisParDist {
    fn tag(&self) -> &'static str {
        "FIX_AXIS_PAR_DIST"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Int(self.offset)).comment(" Offset    "),
            Field::arg(1, Scalar::Int(self.distance)).comment(" Distance  "),
            Field::arg(2, Scalar::UInt(self.number_apo)).comment(" Numberapo "),
        ]
    }
}

/// Fixed axis samples listed explicitly.
#[derive(Debug, Clone)]
pub struct FixAxisParList {
    info: NodeInfo,
    pub values: Vec<f64>,
}

impl FixAxisParList {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            values: Vec::new(),
        }
    }
}

impl Node for FixAxisParList {
    fn tag(&self) -> &'static str {
        "FIX_AXIS_PAR_LIST"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::scalars(
            0,
            self.values.iter().map(|&v| Scalar::Float(v)).collect(),
        )
        .comment(" AxisPts_Value ")]
    }
}

/// Standalone axis sample values shared between characteristics.
#[derive(Debug)]
pub struct AxisPts {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub address: u64,
    pub input_quantity: String,
    /// Name of the record layout describing the deposit.
    pub deposit: String,
    pub max_diff: f64,
    pub conversion: String,
    pub max_axis_points: u64,
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub annotations: Vec<Annotation>,
    pub byte_order: Option<ByteOrder>,
    pub calibration_access: Option<CalibrationAccess>,
    pub deposit_mode: Option<Deposit>,
    pub display_identifier: Option<DisplayIdentifier>,
    pub ecu_address_extension: Option<EcuAddressExtension>,
    pub extended_limits: Option<ExtendedLimits>,
    pub format: Option<Format>,
    pub guard_rails: Option<GuardRails>,
    pub if_data: Vec<IfData>,
    pub monotony: Option<Monotony>,
    pub phys_unit: Option<PhysUnit>,
    pub read_only: Option<ReadOnly>,
    pub ref_memory_segment: Option<RefMemorySegment>,
    pub step_size: Option<StepSize>,
    pub symbol_link: Option<SymbolLink>,
}

impl AxisPts {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        address: u64,
        input_quantity: impl Into<String>,
        deposit: impl Into<String>,
        max_diff: f64,
        conversion: impl Into<String>,
        max_axis_points: u64,
        lower_limit: f64,
        upper_limit: f64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            address,
            input_quantity: input_quantity.into(),
            deposit: deposit.into(),
            max_diff,
            conversion: conversion.into(),
            max_axis_points,
            lower_limit,
            upper_limit,
            annotations: Vec::new(),
            byte_order: None,
            calibration_access: None,
            deposit_mode: None,
            display_identifier: None,
            ecu_address_extension: None,
            extended_limits: None,
            format: None,
            guard_rails: None,
            if_data: Vec::new(),
            monotony: None,
            phys_unit: None,
            read_only: None,
            ref_memory_segment: None,
            step_size: None,
            symbol_link: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for AxisPts {
    fn tag(&self) -> &'static str {
        "AXIS_PTS"
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
            Field::arg(2, Scalar::UInt(self.address))
                .comment(" Address        ")
                .hex(),
            Field::arg(3, Scalar::Text(&self.input_quantity)).comment(" InputQuantity  "),
            Field::arg(4, Scalar::Text(&self.deposit)).comment(" Deposit        "),
            Field::arg(5, Scalar::Float(self.max_diff)).comment(" MaxDiff        "),
            Field::arg(6, Scalar::Text(&self.conversion)).comment(" Conversion     "),
            Field::arg(7, Scalar::UInt(self.max_axis_points)).comment(" MaxAxisPoints  "),
            Field::arg(8, Scalar::Float(self.lower_limit)).comment(" LowerLimit     "),
            Field::arg(9, Scalar::Float(self.upper_limit)).comment(" UpperLimit     "),
        ];
        push_nodes(&mut fields, 10, &self.annotations);
        push_node(&mut fields, 11, &self.byte_order);
        push_node(&mut fields, 12, &self.calibration_access);
        push_node(&mut fields, 13, &self.deposit_mode);
        push_node(&mut fields, 14, &self.display_identifier);
        push_node(&mut fields, 15, &self.ecu_address_extension);
        push_node(&mut fields, 16, &self.extended_limits);
        push_node(&mut fields, 17, &self.format);
        push_node(&mut fields, 18, &self.guard_rails);
        push_nodes(&mut fields, 19, &self.if_data);
        push_node(&mut fields, 20, &self.monotony);
        push_node(&mut fields, 21, &self.phys_unit);
        push_node(&mut fields, 22, &self.read_only);
        push_node(&mut fields, 23, &self.ref_memory_segment);
        push_node(&mut fields, 24, &self.step_size);
        push_node(&mut fields, 25, &self.symbol_link);
        fields
    }
}
