//! Enumerator sets defined by the standard and the small blocks shared by
//! several entity kinds.
//!
//! The enums are closed sets; mapping front-end text onto them (and
//! rejecting unknown literals) is the front end's responsibility.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::node::{push_node, Layout, Node, NodeInfo};

// ============================================================================
// ENUMERATOR SETS
// ============================================================================

/// Data types defined by the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Ubyte,
    Sbyte,
    Uword,
    Sword,
    Ulong,
    Slong,
    AUint64,
    AInt64,
    Float32Ieee,
    Float64Ieee,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Ubyte => "UBYTE",
            DataType::Sbyte => "SBYTE",
            DataType::Uword => "UWORD",
            DataType::Sword => "SWORD",
            DataType::Ulong => "ULONG",
            DataType::Slong => "SLONG",
            DataType::AUint64 => "A_UINT64",
            DataType::AInt64 => "A_INT64",
            DataType::Float32Ieee => "FLOAT32_IEEE",
            DataType::Float64Ieee => "FLOAT64_IEEE",
        }
    }
}

/// Data sizes defined by the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSize {
    Byte,
    Word,
    Long,
}

impl DataSize {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSize::Byte => "BYTE",
            DataSize::Word => "WORD",
            DataSize::Long => "LONG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrType {
    Pbyte,
    Pword,
    Plong,
    Direct,
}

impl AddrType {
    pub fn as_str(self) -> &'static str {
        match self {
            AddrType::Pbyte => "PBYTE",
            AddrType::Pword => "PWORD",
            AddrType::Plong => "PLONG",
            AddrType::Direct => "DIRECT",
        }
    }
}

/// Index progression relative to increasing addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrder {
    IndexIncr,
    IndexDecr,
}

impl IndexOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexOrder::IndexIncr => "INDEX_INCR",
            IndexOrder::IndexDecr => "INDEX_DECR",
        }
    }
}

/// Memory layout of table values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    AlternateCurves,
    AlternateWithX,
    AlternateWithY,
    ColumnDir,
    RowDir,
}

impl IndexMode {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexMode::AlternateCurves => "ALTERNATE_CURVES",
            IndexMode::AlternateWithX => "ALTERNATE_WITH_X",
            IndexMode::AlternateWithY => "ALTERNATE_WITH_Y",
            IndexMode::ColumnDir => "COLUMN_DIR",
            IndexMode::RowDir => "ROW_DIR",
        }
    }
}

/// Conversion types used by computation methods and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionType {
    Identical,
    Form,
    Linear,
    RatFunc,
    TabIntp,
    TabNointp,
    TabVerb,
}

impl ConversionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionType::Identical => "IDENTICAL",
            ConversionType::Form => "FORM",
            ConversionType::Linear => "LINEAR",
            ConversionType::RatFunc => "RAT_FUNC",
            ConversionType::TabIntp => "TAB_INTP",
            ConversionType::TabNointp => "TAB_NOINTP",
            ConversionType::TabVerb => "TAB_VERB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderKind {
    LittleEndian,
    BigEndian,
    MsbFirst,
    MsbLast,
}

impl ByteOrderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrderKind::LittleEndian => "LITTLE_ENDIAN",
            ByteOrderKind::BigEndian => "BIG_ENDIAN",
            ByteOrderKind::MsbFirst => "MSB_FIRST",
            ByteOrderKind::MsbLast => "MSB_LAST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositKind {
    Absolute,
    Difference,
}

impl DepositKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DepositKind::Absolute => "ABSOLUTE",
            DepositKind::Difference => "DIFFERENCE",
        }
    }
}

/// Monotony requirement for axis sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonotonyKind {
    MonDecrease,
    MonIncrease,
    StrictDecrease,
    StrictIncrease,
    Monotonous,
    StrictMon,
    NotMon,
}

impl MonotonyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MonotonyKind::MonDecrease => "MON_DECREASE",
            MonotonyKind::MonIncrease => "MON_INCREASE",
            MonotonyKind::StrictDecrease => "STRICT_DECREASE",
            MonotonyKind::StrictIncrease => "STRICT_INCREASE",
            MonotonyKind::Monotonous => "MONOTONOUS",
            MonotonyKind::StrictMon => "STRICT_MON",
            MonotonyKind::NotMon => "NOT_MON",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationAccessKind {
    Calibration,
    NoCalibration,
    NotInMcdSystem,
    OfflineCalibration,
}

impl CalibrationAccessKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CalibrationAccessKind::Calibration => "CALIBRATION",
            CalibrationAccessKind::NoCalibration => "NO_CALIBRATION",
            CalibrationAccessKind::NotInMcdSystem => "NOT_IN_MCD_SYSTEM",
            CalibrationAccessKind::OfflineCalibration => "OFFLINE_CALIBRATION",
        }
    }
}

// ============================================================================
// SHARED BLOCKS
// ============================================================================

/// A short explanatory note attached to measurements, parameters or axes.
#[derive(Debug, Clone)]
pub struct Annotation {
    info: NodeInfo,
    pub label: Option<AnnotationLabel>,
    pub origin: Option<AnnotationOrigin>,
    pub text: Option<AnnotationText>,
}

impl Annotation {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            label: None,
            origin: None,
            text: None,
        }
    }
}

impl Node for Annotation {
    fn tag(&self) -> &'static str {
        "ANNOTATION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::new();
        push_node(&mut fields, 0, &self.label);
        push_node(&mut fields, 1, &self.origin);
        push_node(&mut fields, 2, &self.text);
        fields
    }
}

#[derive(Debug, Clone)]
pub struct AnnotationLabel {
    info: NodeInfo,
    pub value: String,
}

impl AnnotationLabel {
    pub fn new(location: Location, order: &OrderSource, value: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value: value.into(),
        }
    }
}

impl Node for AnnotationLabel {
    fn tag(&self) -> &'static str {
        "ANNOTATION_LABEL"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::string(0, &self.value)]
    }
}

#[derive(Debug, Clone)]
pub struct AnnotationOrigin {
    info: NodeInfo,
    pub value: String,
}

impl AnnotationOrigin {
    pub fn new(location: Location, order: &OrderSource, value: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value: value.into(),
        }
    }
}

impl Node for AnnotationOrigin {
    fn tag(&self) -> &'static str {
        "ANNOTATION_ORIGIN"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::string(0, &self.value)]
    }
}

/// Annotation body: one quoted string per line.
#[derive(Debug, Clone)]
pub struct AnnotationText {
    info: NodeInfo,
    pub lines: Vec<String>,
}

impl AnnotationText {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            lines: Vec::new(),
        }
    }
}

impl Node for AnnotationText {
    fn tag(&self) -> &'static str {
        "ANNOTATION_TEXT"
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
            self.lines.iter().map(|l| Scalar::Str(l)).collect(),
        )]
    }
}

#[derive(Debug, Clone)]
pub struct ByteOrder {
    info: NodeInfo,
    pub value: ByteOrderKind,
}

impl ByteOrder {
    pub fn new(location: Location, order: &OrderSource, value: ByteOrderKind) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for ByteOrder {
    fn tag(&self) -> &'static str {
        "BYTE_ORDER"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Enum(self.value.as_str()))]
    }
}

#[derive(Debug, Clone)]
pub struct Deposit {
    info: NodeInfo,
    pub value: DepositKind,
}

impl Deposit {
    pub fn new(location: Location, order: &OrderSource, value: DepositKind) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for Deposit {
    fn tag(&self) -> &'static str {
        "DEPOSIT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Enum(self.value.as_str()))]
    }
}

#[derive(Debug, Clone)]
pub struct Monotony {
    info: NodeInfo,
    pub value: MonotonyKind,
}

impl Monotony {
    pub fn new(location: Location, order: &OrderSource, value: MonotonyKind) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for Monotony {
    fn tag(&self) -> &'static str {
        "MONOTONY"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Enum(self.value.as_str()))]
    }
}

#[derive(Debug, Clone)]
pub struct CalibrationAccess {
    info: NodeInfo,
    pub value: CalibrationAccessKind,
}

impl CalibrationAccess {
    pub fn new(location: Location, order: &OrderSource, value: CalibrationAccessKind) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for CalibrationAccess {
    fn tag(&self) -> &'static str {
        "CALIBRATION_ACCESS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Enum(self.value.as_str()))]
    }
}

/// ECU-internal address, rendered as uppercase hex.
#[derive(Debug, Clone)]
pub struct EcuAddress {
    info: NodeInfo,
    pub value: u64,
}

impl EcuAddress {
    pub fn new(location: Location, order: &OrderSource, value: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for EcuAddress {
    fn tag(&self) -> &'static str {
        "ECU_ADDRESS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::UInt(self.value)).hex()]
    }
}

#[derive(Debug, Clone)]
pub struct MatrixDim {
    info: NodeInfo,
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl MatrixDim {
    pub fn new(location: Location, order: &OrderSource, x: u32, y: u32, z: u32) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            x,
            y,
            z,
        }
    }
}

impl Node for MatrixDim {
    fn tag(&self) -> &'static str {
        "MATRIX_DIM"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.x.into())),
            Field::arg(1, Scalar::UInt(self.y.into())),
            Field::arg(2, Scalar::UInt(self.z.into())),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct MaxRefresh {
    info: NodeInfo,
    pub scaling_unit: u64,
    pub rate: u64,
}

impl MaxRefresh {
    pub fn new(location: Location, order: &OrderSource, scaling_unit: u64, rate: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            scaling_unit,
            rate,
        }
    }
}

impl Node for MaxRefresh {
    fn tag(&self) -> &'static str {
        "MAX_REFRESH"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.scaling_unit)).comment(" ScalingUnit "),
            Field::arg(1, Scalar::UInt(self.rate)).comment(" Rate        "),
        ]
    }
}

/// Link into the ECU's symbol table.
#[derive(Debug, Clone)]
pub struct SymbolLink {
    info: NodeInfo,
    pub symbol_name: String,
    pub offset: u64,
}

impl SymbolLink {
    pub fn new(
        location: Location,
        order: &OrderSource,
        symbol_name: impl Into<String>,
        offset: u64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            symbol_name: symbol_name.into(),
            offset,
        }
    }
}

impl Node for SymbolLink {
    fn tag(&self) -> &'static str {
        "SYMBOL_LINK"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::Text(&self.symbol_name)).comment(" SymbolName "),
            Field::arg(1, Scalar::UInt(self.offset)).comment(" Offset     "),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ExtendedLimits {
    info: NodeInfo,
    pub lower_limit: f64,
    pub upper_limit: f64,
}

impl ExtendedLimits {
    pub fn new(location: Location, order: &OrderSource, lower_limit: f64, upper_limit: f64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            lower_limit,
            upper_limit,
        }
    }
}

impl Node for ExtendedLimits {
    fn tag(&self) -> &'static str {
        "EXTENDED_LIMITS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(1, Scalar::Float(self.lower_limit)).comment(" LowerLimit     "),
            Field::arg(2, Scalar::Float(self.upper_limit)).comment(" UpperLimit     "),
        ]
    }
}

/// Display name used by the MCD system instead of the object name.
#[derive(Debug, Clone)]
pub struct DisplayIdentifier {
    info: NodeInfo,
    pub value: String,
}

impl DisplayIdentifier {
    pub fn new(location: Location, order: &OrderSource, value: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value: value.into(),
        }
    }
}

impl Node for DisplayIdentifier {
    fn tag(&self) -> &'static str {
        "DISPLAY_IDENTIFIER"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Text(&self.value))]
    }
}

#[derive(Debug, Clone)]
pub struct EcuAddressExtension {
    info: NodeInfo,
    pub value: u64,
}

impl EcuAddressExtension {
    pub fn new(location: Location, order: &OrderSource, value: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for EcuAddressExtension {
    fn tag(&self) -> &'static str {
        "ECU_ADDRESS_EXTENSION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::UInt(self.value)).hex()]
    }
}

/// C-printf style display format, e.g. `"%5.2"`.
#[derive(Debug, Clone)]
pub struct Format {
    info: NodeInfo,
    pub value: String,
}

impl Format {
    pub fn new(location: Location, order: &OrderSource, value: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value: value.into(),
        }
    }
}

impl Node for Format {
    fn tag(&self) -> &'static str {
        "FORMAT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::string(0, &self.value)]
    }
}

/// Physical unit overriding the conversion method's unit.
#[derive(Debug, Clone)]
pub struct PhysUnit {
    info: NodeInfo,
    pub value: String,
}

impl PhysUnit {
    pub fn new(location: Location, order: &OrderSource, value: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value: value.into(),
        }
    }
}

impl Node for PhysUnit {
    fn tag(&self) -> &'static str {
        "PHYS_UNIT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::string(0, &self.value)]
    }
}

#[derive(Debug, Clone)]
pub struct RefMemorySegment {
    info: NodeInfo,
    pub name: String,
}

impl RefMemorySegment {
    pub fn new(location: Location, order: &OrderSource, name: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
        }
    }
}

impl Node for RefMemorySegment {
    fn tag(&self) -> &'static str {
        "REF_MEMORY_SEGMENT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Text(&self.name))]
    }
}

/// Recommended calibration step width.
#[derive(Debug, Clone)]
pub struct StepSize {
    info: NodeInfo,
    pub value: f64,
}

impl StepSize {
    pub fn new(location: Location, order: &OrderSource, value: f64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            value,
        }
    }
}

impl Node for StepSize {
    fn tag(&self) -> &'static str {
        "STEP_SIZE"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Float(self.value))]
    }
}

macro_rules! marker_node {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            info: NodeInfo,
        }

        impl $name {
            pub fn new(location: Location, order: &OrderSource) -> Self {
                Self {
                    info: NodeInfo::new(location, order),
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
                Layout::Simple
            }

            fn fields(&self) -> Vec<Field<'_>> {
                Vec::new()
            }
        }
    };
}

marker_node!(
    /// Write access is not allowed for the enclosing element.
    ReadOnly,
    "READ_ONLY"
);
marker_node!(
    /// The value set of the enclosing element is discrete.
    Discrete,
    "DISCRETE"
);
marker_node!(
    /// Write access is allowed for the enclosing measurement.
    ReadWrite,
    "READ_WRITE"
);
marker_node!(
    /// The enclosing characteristic may be used as a dependency input only.
    GuardRails,
    "GUARD_RAILS"
);
marker_node!(
    /// Marks a group as a root of the group hierarchy.
    Root,
    "ROOT"
);
