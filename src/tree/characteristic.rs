//! CHARACTERISTIC: an adjustable parameter, scalar or table-shaped.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::axis::AxisDescr;
use crate::tree::module::IfData;
use crate::tree::node::{push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::{
    Annotation, ByteOrder, CalibrationAccess, Discrete, DisplayIdentifier, EcuAddressExtension,
    ExtendedLimits, Format, GuardRails, MatrixDim, MaxRefresh, PhysUnit, ReadOnly,
    RefMemorySegment, StepSize, SymbolLink,
};

/// Shape of a characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacteristicType {
    Ascii,
    Curve,
    Map,
    Cuboid,
    Cube4,
    Cube5,
    ValBlk,
    Value,
}

impl CharacteristicType {
    pub fn as_str(self) -> &'static str {
        match self {
            CharacteristicType::Ascii => "ASCII",
            CharacteristicType::Curve => "CURVE",
            CharacteristicType::Map => "MAP",
            CharacteristicType::Cuboid => "CUBOID",
            CharacteristicType::Cube4 => "CUBE_4",
            CharacteristicType::Cube5 => "CUBE_5",
            CharacteristicType::ValBlk => "VAL_BLK",
            CharacteristicType::Value => "VALUE",
        }
    }
}

#[derive(Debug)]
pub struct Characteristic {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub characteristic_type: CharacteristicType,
    pub address: u64,
    /// Name of the record layout describing the deposit.
    pub deposit: String,
    pub max_diff: f64,
    pub conversion: String,
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub annotations: Vec<Annotation>,
    pub axis_descrs: Vec<AxisDescr>,
    pub bit_mask: Option<u64>,
    pub byte_order: Option<ByteOrder>,
    pub calibration_access: Option<CalibrationAccess>,
    pub comparison_quantity: Option<String>,
    pub dependent_characteristic: Option<DependentCharacteristic>,
    pub discrete: Option<Discrete>,
    pub display_identifier: Option<DisplayIdentifier>,
    pub ecu_address_extension: Option<EcuAddressExtension>,
    pub extended_limits: Option<ExtendedLimits>,
    pub format: Option<Format>,
    pub guard_rails: Option<GuardRails>,
    pub if_data: Vec<IfData>,
    pub matrix_dim: Option<MatrixDim>,
    pub max_refresh: Option<MaxRefresh>,
    /// Element count for VAL_BLK and ASCII shapes.
    pub number: Option<u64>,
    pub phys_unit: Option<PhysUnit>,
    pub read_only: Option<ReadOnly>,
    pub ref_memory_segment: Option<RefMemorySegment>,
    pub step_size: Option<StepSize>,
    pub symbol_link: Option<SymbolLink>,
    pub virtual_characteristic: Option<VirtualCharacteristic>,
}

impl Characteristic {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        characteristic_type: CharacteristicType,
        address: u64,
        deposit: impl Into<String>,
        max_diff: f64,
        conversion: impl Into<String>,
        lower_limit: f64,
        upper_limit: f64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            characteristic_type,
            address,
            deposit: deposit.into(),
            max_diff,
            conversion: conversion.into(),
            lower_limit,
            upper_limit,
            annotations: Vec::new(),
            axis_descrs: Vec::new(),
            bit_mask: None,
            byte_order: None,
            calibration_access: None,
            comparison_quantity: None,
            dependent_characteristic: None,
            discrete: None,
            display_identifier: None,
            ecu_address_extension: None,
            extended_limits: None,
            format: None,
            guard_rails: None,
            if_data: Vec::new(),
            matrix_dim: None,
            max_refresh: None,
            number: None,
            phys_unit: None,
            read_only: None,
            ref_memory_segment: None,
            step_size: None,
            symbol_link: None,
            virtual_characteristic: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Characteristic {
    fn tag(&self) -> &'static str {
        "CHARACTERISTIC"
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
            Field::arg(2, Scalar::Enum(self.characteristic_type.as_str()))
                .comment(" Type           "),
            Field::arg(3, Scalar::UInt(self.address))
                .comment(" Address        ")
                .hex(),
            Field::arg(4, Scalar::Text(&self.deposit)).comment(" Deposit        "),
            Field::arg(5, Scalar::Float(self.max_diff)).comment(" MaxDiff        "),
            Field::arg(6, Scalar::Text(&self.conversion)).comment(" Conversion     "),
            Field::arg(7, Scalar::Float(self.lower_limit)).comment(" LowerLimit     "),
            Field::arg(8, Scalar::Float(self.upper_limit)).comment(" UpperLimit     "),
        ];
        push_nodes(&mut fields, 9, &self.annotations);
        push_nodes(&mut fields, 10, &self.axis_descrs);
        if let Some(mask) = self.bit_mask {
            fields.push(
                Field::arg(11, Scalar::UInt(mask))
                    .keyword("BIT_MASK")
                    .hex(),
            );
        }
        push_node(&mut fields, 12, &self.byte_order);
        push_node(&mut fields, 13, &self.calibration_access);
        if let Some(quantity) = &self.comparison_quantity {
            fields.push(Field::arg(14, Scalar::Text(quantity)).keyword("COMPARISON_QUANTITY"));
        }
        push_node(&mut fields, 15, &self.dependent_characteristic);
        push_node(&mut fields, 16, &self.discrete);
        push_node(&mut fields, 17, &self.display_identifier);
        push_node(&mut fields, 18, &self.ecu_address_extension);
        push_node(&mut fields, 19, &self.extended_limits);
        push_node(&mut fields, 20, &self.format);
        push_node(&mut fields, 21, &self.guard_rails);
        push_nodes(&mut fields, 22, &self.if_data);
        push_node(&mut fields, 23, &self.matrix_dim);
        push_node(&mut fields, 24, &self.max_refresh);
        if let Some(number) = self.number {
            fields.push(Field::arg(25, Scalar::UInt(number)).keyword("NUMBER"));
        }
        push_node(&mut fields, 26, &self.phys_unit);
        push_node(&mut fields, 27, &self.read_only);
        push_node(&mut fields, 28, &self.ref_memory_segment);
        push_node(&mut fields, 29, &self.step_size);
        push_node(&mut fields, 30, &self.symbol_link);
        push_node(&mut fields, 31, &self.virtual_characteristic);
        fields
    }
}

macro_rules! formula_ref_block {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            info: NodeInfo,
            pub formula: String,
            pub characteristics: Vec<String>,
        }

        impl $name {
            pub fn new(
                location: Location,
                order: &OrderSource,
                formula: impl Into<String>,
            ) -> Self {
                Self {
                    info: NodeInfo::new(location, order),
                    formula: formula.into(),
                    characteristics: Vec::new(),
                }
            }
        }

        impl Node for $name {
            fn tag(&self) -> &'static str {
                $tag
            }

            fn info(&self) -> &NodeInfo {
                &self.info
            }

            fn layout(&self) -> Layout {
                Layout::Block
            }

            fn fields(&self) -> Vec<Field<'_>> {
                vec![
                    Field::string(0, &self.formula).comment(" Formula        "),
                    Field::scalars(
                        1,
                        self.characteristics
                            .iter()
                            .map(|c| Scalar::Text(c))
                            .collect(),
                    )
                    .comment(" Characteristic "),
                ]
            }
        }
    };
}

formula_ref_block!(
    /// The enclosing characteristic is computed from the referenced ones.
    DependentCharacteristic,
    "DEPENDENT_CHARACTERISTIC"
);
formula_ref_block!(
    /// The enclosing characteristic exists only as a formula over others.
    VirtualCharacteristic,
    "VIRTUAL_CHARACTERISTIC"
);
