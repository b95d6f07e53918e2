//! RECORD_LAYOUT: how a characteristic's values and axis points are laid
//! out in ECU memory.

use indexmap::IndexMap;

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::node::{push_node, Layout, Node, NodeInfo};
use crate::tree::shared::{AddrType, DataType, IndexMode, IndexOrder};

/// Alignment boundary kinds. The kind supplies the block keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentKind {
    Byte,
    Word,
    Long,
    Int64,
    Float32Ieee,
    Float64Ieee,
}

impl AlignmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlignmentKind::Byte => "ALIGNMENT_BYTE",
            AlignmentKind::Word => "ALIGNMENT_WORD",
            AlignmentKind::Long => "ALIGNMENT_LONG",
            AlignmentKind::Int64 => "ALIGNMENT_INT64",
            AlignmentKind::Float32Ieee => "ALIGNMENT_FLOAT32_IEEE",
            AlignmentKind::Float64Ieee => "ALIGNMENT_FLOAT64_IEEE",
        }
    }
}

/// One alignment entry; renders as `ALIGNMENT_<kind> <value>`.
#[derive(Debug, Clone)]
pub struct Alignment {
    info: NodeInfo,
    pub kind: AlignmentKind,
    pub value: u32,
}

impl Alignment {
    pub fn new(location: Location, order: &OrderSource, kind: AlignmentKind, value: u32) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            kind,
            value,
        }
    }
}

impl Node for Alignment {
    fn tag(&self) -> &'static str {
        "ALIGNMENT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::name(0, self.kind.as_str()),
            Field::arg(1, Scalar::UInt(self.value.into())),
        ]
    }
}

/// Axis dimension selector for the per-axis record layout entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDim {
    X,
    Y,
    Z,
    Z4,
    Z5,
}

impl AxisDim {
    fn suffix(self) -> &'static str {
        match self {
            AxisDim::X => "X",
            AxisDim::Y => "Y",
            AxisDim::Z => "Z",
            AxisDim::Z4 => "4",
            AxisDim::Z5 => "5",
        }
    }
}

/// Position, datatype, index increment and addressing of one axis's points.
#[derive(Debug, Clone)]
pub struct AxisPtsDim {
    info: NodeInfo,
    pub dim: AxisDim,
    pub position: u64,
    pub data_type: DataType,
    pub index_incr: IndexOrder,
    pub addr_type: AddrType,
}

impl AxisPtsDim {
    pub fn new(
        location: Location,
        order: &OrderSource,
        dim: AxisDim,
        position: u64,
        data_type: DataType,
        index_incr: IndexOrder,
        addr_type: AddrType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            dim,
            position,
            data_type,
            index_incr,
            addr_type,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self.dim {
            AxisDim::X => "AXIS_PTS_X",
            AxisDim::Y => "AXIS_PTS_Y",
            AxisDim::Z => "AXIS_PTS_Z",
            AxisDim::Z4 => "AXIS_PTS_4",
            AxisDim::Z5 => "AXIS_PTS_5",
        }
    }
}

impl Node for AxisPtsDim {
    fn tag(&self) -> &'static str {
        "AXIS_PTS_X"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::name(0, self.keyword()),
            Field::arg(1, Scalar::UInt(self.position)).comment(" Position  "),
            Field::arg(2, Scalar::Enum(self.data_type.as_str())).comment(" dataType  "),
            Field::arg(3, Scalar::Enum(self.index_incr.as_str())).comment(" indexIncr "),
            Field::arg(4, Scalar::Enum(self.addr_type.as_str())).comment(" addrType  "),
        ]
    }
}

/// Position and datatype of the stored axis point count.
#[derive(Debug, Clone)]
pub struct NoAxisPtsDim {
    info: NodeInfo,
    pub dim: AxisDim,
    pub position: u64,
    pub data_type: DataType,
}

impl NoAxisPtsDim {
    pub fn new(
        location: Location,
        order: &OrderSource,
        dim: AxisDim,
        position: u64,
        data_type: DataType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            dim,
            position,
            data_type,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self.dim {
            AxisDim::X => "NO_AXIS_PTS_X",
            AxisDim::Y => "NO_AXIS_PTS_Y",
            AxisDim::Z => "NO_AXIS_PTS_Z",
            AxisDim::Z4 => "NO_AXIS_PTS_4",
            AxisDim::Z5 => "NO_AXIS_PTS_5",
        }
    }
}

impl Node for NoAxisPtsDim {
    fn tag(&self) -> &'static str {
        "NO_AXIS_PTS_X"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::name(0, self.keyword()),
            Field::arg(1, Scalar::UInt(self.position)).comment(" Position "),
            Field::arg(2, Scalar::Enum(self.data_type.as_str())).comment(" dataType "),
        ]
    }
}

/// Position, datatype, index mode and addressing of the function values.
#[derive(Debug, Clone)]
pub struct FncValues {
    info: NodeInfo,
    pub position: u64,
    pub data_type: DataType,
    pub index_mode: IndexMode,
    pub addr_type: AddrType,
}

impl FncValues {
    pub fn new(
        location: Location,
        order: &OrderSource,
        position: u64,
        data_type: DataType,
        index_mode: IndexMode,
        addr_type: AddrType,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            position,
            data_type,
            index_mode,
            addr_type,
        }
    }
}

impl Node for FncValues {
    fn tag(&self) -> &'static str {
        "FNC_VALUES"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.position)),
            Field::arg(1, Scalar::Enum(self.data_type.as_str())),
            Field::arg(2, Scalar::Enum(self.index_mode.as_str())),
            Field::arg(3, Scalar::Enum(self.addr_type.as_str())),
        ]
    }
}

/// Position and datatype of the stored identification number.
#[derive(Debug, Clone)]
pub struct Identification {
    info: NodeInfo,
    pub position: u64,
    pub data_type: DataType,
}

impl Identification {
    pub fn new(location: Location, order: &OrderSource, position: u64, data_type: DataType) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            position,
            data_type,
        }
    }
}

impl Node for Identification {
    fn tag(&self) -> &'static str {
        "IDENTIFICATION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.position)).comment(" Position "),
            Field::arg(1, Scalar::Enum(self.data_type.as_str())).comment(" DataType "),
        ]
    }
}

/// Marks an axis as not compacting in memory when points are removed.
#[derive(Debug, Clone)]
pub struct StaticRecordLayout {
    info: NodeInfo,
}

impl StaticRecordLayout {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
        }
    }
}

impl Node for StaticRecordLayout {
    fn tag(&self) -> &'static str {
        "STATIC_RECORD_LAYOUT"
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

#[derive(Debug)]
pub struct RecordLayout {
    info: NodeInfo,
    name: String,
    /// Keyed by the rendered keyword, e.g. `ALIGNMENT_WORD`; a second entry
    /// for the same kind replaces the first.
    pub alignments: IndexMap<&'static str, Alignment>,
    pub axis_pts: IndexMap<&'static str, AxisPtsDim>,
    pub no_axis_pts: IndexMap<&'static str, NoAxisPtsDim>,
    pub fnc_values: Option<FncValues>,
    pub identification: Option<Identification>,
    pub static_record_layout: Option<StaticRecordLayout>,
}

impl RecordLayout {
    pub fn new(location: Location, order: &OrderSource, name: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            alignments: IndexMap::new(),
            axis_pts: IndexMap::new(),
            no_axis_pts: IndexMap::new(),
            fnc_values: None,
            identification: None,
            static_record_layout: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignments.insert(alignment.kind.as_str(), alignment);
    }

    pub fn set_axis_pts(&mut self, entry: AxisPtsDim) {
        self.axis_pts.insert(entry.keyword(), entry);
    }

    pub fn set_no_axis_pts(&mut self, entry: NoAxisPtsDim) {
        self.no_axis_pts.insert(entry.keyword(), entry);
    }
}

impl Node for RecordLayout {
    fn tag(&self) -> &'static str {
        "RECORD_LAYOUT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::arg(0, Scalar::Text(&self.name))];
        if !self.alignments.is_empty() {
            fields.push(Field::map(
                1,
                self.alignments.values().map(|a| a as &dyn Node).collect(),
            ));
        }
        if !self.axis_pts.is_empty() {
            fields.push(Field::map(
                2,
                self.axis_pts.values().map(|a| a as &dyn Node).collect(),
            ));
        }
        push_node(&mut fields, 3, &self.fnc_values);
        push_node(&mut fields, 4, &self.identification);
        if !self.no_axis_pts.is_empty() {
            fields.push(Field::map(
                5,
                self.no_axis_pts.values().map(|a| a as &dyn Node).collect(),
            ));
        }
        push_node(&mut fields, 6, &self.static_record_layout);
        fields
    }
}
