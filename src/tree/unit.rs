//! UNIT: physical units, either derived from another unit or expressed
//! through SI base-unit exponents.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::node::{push_node, Layout, Node, NodeInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Derived,
    ExtendedSi,
}

impl UnitType {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Derived => "DERIVED",
            UnitType::ExtendedSi => "EXTENDED_SI",
        }
    }
}

#[derive(Debug)]
pub struct Unit {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    /// Display string, e.g. `"km/h"`.
    pub display: String,
    pub unit_type: UnitType,
    pub ref_unit: Option<String>,
    pub si_exponents: Option<SiExponents>,
    pub unit_conversion: Option<UnitConversion>,
}

impl Unit {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        display: impl Into<String>,
        unit_type: UnitType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            display: display.into(),
            unit_type,
            ref_unit: None,
            si_exponents: None,
            unit_conversion: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Unit {
    fn tag(&self) -> &'static str {
        "UNIT"
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
            Field::string(2, &self.display).comment(" Display        "),
            Field::arg(3, Scalar::Enum(self.unit_type.as_str())).comment(" Type           "),
        ];
        if let Some(reference) = &self.ref_unit {
            fields.push(Field::arg(4, Scalar::Text(reference)).keyword("REF_UNIT"));
        }
        push_node(&mut fields, 5, &self.si_exponents);
        push_node(&mut fields, 6, &self.unit_conversion);
        fields
    }
}

/// Exponents of the seven SI base units expressing a derived SI unit.
#[derive(Debug, Clone)]
pub struct SiExponents {
    info: NodeInfo,
    pub length: i64,
    pub mass: i64,
    pub time: i64,
    pub electric_current: i64,
    pub temperature: i64,
    pub amount_of_substance: i64,
    pub luminous_intensity: i64,
}

impl SiExponents {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        length: i64,
        mass: i64,
        time: i64,
        electric_current: i64,
        temperature: i64,
        amount_of_substance: i64,
        luminous_intensity: i64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            length,
            mass,
            time,
            electric_current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        }
    }
}

impl Node for SiExponents {
    fn tag(&self) -> &'static str {
        "SI_EXPONENTS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Int(self.length)),
            Field::arg(1, Scalar::Int(self.mass)),
            Field::arg(2, Scalar::Int(self.time)),
            Field::arg(3, Scalar::Int(self.electric_current)),
            Field::arg(4, Scalar::Int(self.temperature)),
            Field::arg(5, Scalar::Int(self.amount_of_substance)),
            Field::arg(6, Scalar::Int(self.luminous_intensity)),
        ]
    }
}

/// Linear conversion to the referenced unit: slope and offset.
#[derive(Debug, Clone)]
pub struct UnitConversion {
    info: NodeInfo,
    pub gradient: f64,
    pub offset: f64,
}

impl UnitConversion {
    pub fn new(location: Location, order: &OrderSource, gradient: f64, offset: f64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            gradient,
            offset,
        }
    }
}

impl Node for UnitConversion {
    fn tag(&self) -> &'static str {
        "UNIT_CONVERSION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.gradient)).comment(" Gradient "),
            Field::arg(1, Scalar::Float(self.offset)).comment(" Offset   "),
        ]
    }
}
