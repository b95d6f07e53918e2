//! Conversion methods and conversion tables: the mapping between
//! ECU-internal values and physical values.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::node::{push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::ConversionType;

/// COMPU_METHOD: how raw values become physical values.
#[derive(Debug)]
pub struct CompuMethod {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub conversion_type: ConversionType,
    /// Display format in C-printf notation.
    pub format: String,
    pub unit: String,
    pub coeffs: Option<Coeffs>,
    pub coeffs_linear: Option<CoeffsLinear>,
    /// Referenced conversion table for the TAB_* conversion types.
    pub compu_tab_ref: Option<String>,
    pub formula: Option<Formula>,
    pub ref_unit: Option<String>,
    /// Verbal table mapping ECU states to status strings.
    pub status_string_ref: Option<String>,
}

impl CompuMethod {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        conversion_type: ConversionType,
        format: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            conversion_type,
            format: format.into(),
            unit: unit.into(),
            coeffs: None,
            coeffs_linear: None,
            compu_tab_ref: None,
            formula: None,
            ref_unit: None,
            status_string_ref: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for CompuMethod {
    fn tag(&self) -> &'static str {
        "COMPU_METHOD"
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
            Field::arg(2, Scalar::Enum(self.conversion_type.as_str())).comment(" ConversionType "),
            Field::string(3, &self.format).comment(" Format         "),
            Field::string(4, &self.unit).comment(" Unit           "),
        ];
        push_node(&mut fields, 5, &self.coeffs);
        push_node(&mut fields, 6, &self.coeffs_linear);
        if let Some(reference) = &self.compu_tab_ref {
            fields.push(Field::arg(7, Scalar::Text(reference)).keyword("COMPU_TAB_REF"));
        }
        push_node(&mut fields, 8, &self.formula);
        if let Some(reference) = &self.ref_unit {
            fields.push(Field::arg(9, Scalar::Text(reference)).keyword("REF_UNIT"));
        }
        if let Some(reference) = &self.status_string_ref {
            fields.push(Field::arg(10, Scalar::Text(reference)).keyword("STATUS_STRING_REF"));
        }
        fields
    }
}

/// Coefficients of the rational function conversion.
#[derive(Debug, Clone)]
pub struct Coeffs {
    info: NodeInfo,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Coeffs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            a,
            b,
            c,
            d,
            e,
            f,
        }
    }
}

impl Node for Coeffs {
    fn tag(&self) -> &'static str {
        "COEFFS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.a))
                .comment(" Coefficients for the rational function (RAT_FUNC) "),
            Field::arg(1, Scalar::Float(self.b)),
            Field::arg(2, Scalar::Float(self.c)),
            Field::arg(3, Scalar::Float(self.d)),
            Field::arg(4, Scalar::Float(self.e)),
            Field::arg(5, Scalar::Float(self.f)),
        ]
    }
}

/// Coefficients of the linear conversion.
#[derive(Debug, Clone)]
pub struct CoeffsLinear {
    info: NodeInfo,
    pub a: f64,
    pub b: f64,
}

impl CoeffsLinear {
    pub fn new(location: Location, order: &OrderSource, a: f64, b: f64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            a,
            b,
        }
    }
}

impl Node for CoeffsLinear {
    fn tag(&self) -> &'static str {
        "COEFFS_LINEAR"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.a))
                .comment(" Coefficients for the linear function (LINEAR). "),
            Field::arg(1, Scalar::Float(self.b)),
        ]
    }
}

/// Conversion as an ANSI C expression, with an optional inverse.
#[derive(Debug, Clone)]
pub struct Formula {
    info: NodeInfo,
    pub formula: String,
    pub formula_inv: Option<String>,
}

impl Formula {
    pub fn new(location: Location, order: &OrderSource, formula: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            formula: formula.into(),
            formula_inv: None,
        }
    }
}

impl Node for Formula {
    fn tag(&self) -> &'static str {
        "FORMULA"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::string(0, &self.formula)];
        if let Some(inv) = &self.formula_inv {
            fields.push(Field::string(1, inv).keyword("FORMULA_INV"));
        }
        fields
    }
}

/// COMPU_TAB: numeric value pairs, interpolated or not.
#[derive(Debug)]
pub struct CompuTab {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub conversion_type: ConversionType,
    pub data: Vec<CompuTabEntry>,
    pub default_value: Option<String>,
    pub default_value_numeric: Option<f64>,
}

impl CompuTab {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        conversion_type: ConversionType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            conversion_type,
            data: Vec::new(),
            default_value: None,
            default_value_numeric: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for CompuTab {
    fn tag(&self) -> &'static str {
        "COMPU_TAB"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        // The pair count is derived from the data, never stored.
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" Name             "),
            Field::string(1, &self.long_identifier).comment(" LongIdentifier   "),
            Field::arg(2, Scalar::Enum(self.conversion_type.as_str())).comment(" ConversionType   "),
            Field::arg(3, Scalar::UInt(self.data.len() as u64)).comment(" NumberValuePairs "),
        ];
        push_nodes(&mut fields, 4, &self.data);
        if let Some(default) = &self.default_value {
            fields.push(Field::string(5, default).keyword("DEFAULT_VALUE"));
        }
        if let Some(default) = self.default_value_numeric {
            fields.push(Field::arg(6, Scalar::Float(default)).keyword("DEFAULT_VALUE_NUMERIC"));
        }
        fields
    }
}

/// One value pair: a keyword-less line inside the table body.
#[derive(Debug, Clone)]
pub struct CompuTabEntry {
    info: NodeInfo,
    pub in_val: f64,
    pub out_val: f64,
}

impl CompuTabEntry {
    pub fn new(location: Location, order: &OrderSource, in_val: f64, out_val: f64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            in_val,
            out_val,
        }
    }
}

impl Node for CompuTabEntry {
    fn tag(&self) -> &'static str {
        ""
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.in_val)),
            Field::arg(1, Scalar::Float(self.out_val)),
        ]
    }
}

/// COMPU_VTAB: verbal value pairs.
#[derive(Debug)]
pub struct CompuVtab {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub conversion_type: ConversionType,
    pub data: Vec<CompuVtabEntry>,
    pub default_value: Option<String>,
}

impl CompuVtab {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        conversion_type: ConversionType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            conversion_type,
            data: Vec::new(),
            default_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for CompuVtab {
    fn tag(&self) -> &'static str {
        "COMPU_VTAB"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" Name             "),
            Field::string(1, &self.long_identifier).comment(" LongIdentifier   "),
            Field::arg(2, Scalar::Enum(self.conversion_type.as_str())).comment(" ConversionType   "),
            Field::arg(3, Scalar::UInt(self.data.len() as u64)).comment(" NumberValuePairs "),
        ];
        push_nodes(&mut fields, 4, &self.data);
        if let Some(default) = &self.default_value {
            fields.push(Field::string(5, default).keyword("DEFAULT_VALUE"));
        }
        fields
    }
}

#[derive(Debug, Clone)]
pub struct CompuVtabEntry {
    info: NodeInfo,
    pub in_val: f64,
    pub out_val: String,
}

impl CompuVtabEntry {
    pub fn new(
        location: Location,
        order: &OrderSource,
        in_val: f64,
        out_val: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            in_val,
            out_val: out_val.into(),
        }
    }
}

impl Node for CompuVtabEntry {
    fn tag(&self) -> &'static str {
        ""
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.in_val)),
            Field::string(1, &self.out_val),
        ]
    }
}

/// COMPU_VTAB_RANGE: verbal values keyed by an input range.
#[derive(Debug)]
pub struct CompuVtabRange {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub data: Vec<CompuVtabRangeEntry>,
    pub default_value: Option<String>,
}

impl CompuVtabRange {
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
            data: Vec::new(),
            default_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for CompuVtabRange {
    fn tag(&self) -> &'static str {
        "COMPU_VTAB_RANGE"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" Name               "),
            Field::string(1, &self.long_identifier).comment(" LongIdentifier     "),
            Field::arg(2, Scalar::UInt(self.data.len() as u64)).comment(" NumberValueTriples "),
        ];
        push_nodes(&mut fields, 3, &self.data);
        if let Some(default) = &self.default_value {
            fields.push(Field::string(4, default).keyword("DEFAULT_VALUE"));
        }
        fields
    }
}

#[derive(Debug, Clone)]
pub struct CompuVtabRangeEntry {
    info: NodeInfo,
    pub in_val_min: f64,
    pub in_val_max: f64,
    pub out_val: String,
}

impl CompuVtabRangeEntry {
    pub fn new(
        location: Location,
        order: &OrderSource,
        in_val_min: f64,
        in_val_max: f64,
        out_val: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            in_val_min,
            in_val_max,
            out_val: out_val.into(),
        }
    }
}

impl Node for CompuVtabRangeEntry {
    fn tag(&self) -> &'static str {
        ""
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Float(self.in_val_min)),
            Field::arg(1, Scalar::Float(self.in_val_max)),
            Field::string(2, &self.out_val),
        ]
    }
}
