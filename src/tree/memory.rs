//! MOD_COMMON and MOD_PAR: module-wide defaults and ECU memory management.

use indexmap::IndexMap;

use crate::diagnostics::DuplicateName;
use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::module::IfData;
use crate::tree::node::{push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::record_layout::Alignment;
use crate::tree::shared::{ByteOrder, Deposit};

/// Module-wide default values.
#[derive(Debug)]
pub struct ModCommon {
    info: NodeInfo,
    pub comment: String,
    /// Keyed by the rendered keyword, e.g. `ALIGNMENT_WORD`.
    pub alignments: IndexMap<&'static str, Alignment>,
    pub byte_order: Option<ByteOrder>,
    pub data_size: Option<u64>,
    pub deposit: Option<Deposit>,
    /// Name of the standard record layout.
    pub s_rec_layout: Option<String>,
}

impl ModCommon {
    pub fn new(location: Location, order: &OrderSource, comment: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            comment: comment.into(),
            alignments: IndexMap::new(),
            byte_order: None,
            data_size: None,
            deposit: None,
            s_rec_layout: None,
        }
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignments.insert(alignment.kind.as_str(), alignment);
    }
}

impl Node for ModCommon {
    fn tag(&self) -> &'static str {
        "MOD_COMMON"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::string(0, &self.comment)];
        if !self.alignments.is_empty() {
            fields.push(Field::map(
                1,
                self.alignments.values().map(|a| a as &dyn Node).collect(),
            ));
        }
        push_node(&mut fields, 2, &self.byte_order);
        if let Some(size) = self.data_size {
            fields.push(Field::arg(3, Scalar::UInt(size)).keyword("DATA_SIZE"));
        }
        push_node(&mut fields, 4, &self.deposit);
        if let Some(layout) = &self.s_rec_layout {
            fields.push(Field::arg(5, Scalar::Text(layout)).keyword("S_REC_LAYOUT"));
        }
        fields
    }
}

/// ECU management data: memory segments, calibration handles, identifiers.
#[derive(Debug)]
pub struct ModPar {
    info: NodeInfo,
    pub comment: String,
    pub addr_epk: Vec<AddrEpk>,
    pub calibration_methods: Vec<CalibrationMethod>,
    pub cpu_type: Option<String>,
    pub customer: Option<String>,
    pub customer_no: Option<String>,
    pub ecu: Option<String>,
    pub ecu_calibration_offset: Option<i64>,
    pub epk: Option<String>,
    memory_segments: IndexMap<String, MemorySegment>,
    pub no_of_interfaces: Option<u64>,
    pub phone_no: Option<String>,
    pub supplier: Option<String>,
    system_constants: IndexMap<String, SystemConstant>,
    pub user: Option<String>,
    pub version: Option<String>,
}

impl ModPar {
    pub fn new(location: Location, order: &OrderSource, comment: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            comment: comment.into(),
            addr_epk: Vec::new(),
            calibration_methods: Vec::new(),
            cpu_type: None,
            customer: None,
            customer_no: None,
            ecu: None,
            ecu_calibration_offset: None,
            epk: None,
            memory_segments: IndexMap::new(),
            no_of_interfaces: None,
            phone_no: None,
            supplier: None,
            system_constants: IndexMap::new(),
            user: None,
            version: None,
        }
    }

    pub fn add_memory_segment(&mut self, segment: MemorySegment) -> Result<(), DuplicateName> {
        if let Some(existing) = self.memory_segments.get(segment.name()) {
            return Err(DuplicateName {
                kind: "MEMORY_SEGMENT",
                name: segment.name().to_string(),
                existing: existing.info.location().clone(),
                incoming: segment.info.location().clone(),
            });
        }
        self.memory_segments
            .insert(segment.name().to_string(), segment);
        Ok(())
    }

    pub fn memory_segment(&self, name: &str) -> Option<&MemorySegment> {
        self.memory_segments.get(name)
    }

    pub fn add_system_constant(&mut self, constant: SystemConstant) -> Result<(), DuplicateName> {
        if let Some(existing) = self.system_constants.get(constant.name()) {
            return Err(DuplicateName {
                kind: "SYSTEM_CONSTANT",
                name: constant.name().to_string(),
                existing: existing.info.location().clone(),
                incoming: constant.info.location().clone(),
            });
        }
        self.system_constants
            .insert(constant.name().to_string(), constant);
        Ok(())
    }

    pub fn system_constant(&self, name: &str) -> Option<&SystemConstant> {
        self.system_constants.get(name)
    }
}

impl Node for ModPar {
    fn tag(&self) -> &'static str {
        "MOD_PAR"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::string(0, &self.comment)];
        push_nodes(&mut fields, 1, &self.addr_epk);
        push_nodes(&mut fields, 2, &self.calibration_methods);
        if let Some(value) = &self.cpu_type {
            fields.push(Field::string(3, value).keyword("CPU_TYPE"));
        }
        if let Some(value) = &self.customer {
            fields.push(Field::string(4, value).keyword("CUSTOMER"));
        }
        if let Some(value) = &self.customer_no {
            fields.push(Field::string(5, value).keyword("CUSTOMER_NO"));
        }
        if let Some(value) = &self.ecu {
            fields.push(Field::string(6, value).keyword("ECU"));
        }
        if let Some(value) = self.ecu_calibration_offset {
            fields.push(Field::arg(7, Scalar::Int(value)).keyword("ECU_CALIBRATION_OFFSET"));
        }
        if let Some(value) = &self.epk {
            fields.push(Field::string(8, value).keyword("EPK"));
        }
        if !self.memory_segments.is_empty() {
            fields.push(Field::map(
                9,
                self.memory_segments
                    .values()
                    .map(|s| s as &dyn Node)
                    .collect(),
            ));
        }
        if let Some(value) = self.no_of_interfaces {
            fields.push(Field::arg(10, Scalar::UInt(value)).keyword("NO_OF_INTERFACES"));
        }
        if let Some(value) = &self.phone_no {
            fields.push(Field::string(11, value).keyword("PHONE_NO"));
        }
        if let Some(value) = &self.supplier {
            fields.push(Field::string(12, value).keyword("SUPPLIER"));
        }
        if !self.system_constants.is_empty() {
            fields.push(Field::map(
                13,
                self.system_constants
                    .values()
                    .map(|c| c as &dyn Node)
                    .collect(),
            ));
        }
        if let Some(value) = &self.user {
            fields.push(Field::string(14, value).keyword("USER"));
        }
        if let Some(value) = &self.version {
            fields.push(Field::string(15, value).keyword("VERSION"));
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentAttribute {
    Intern,
    Extern,
}

impl SegmentAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentAttribute::Intern => "INTERN",
            SegmentAttribute::Extern => "EXTERN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryType {
    Eeprom,
    Eprom,
    Flash,
    Ram,
    Rom,
    Register,
}

impl MemoryType {
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryType::Eeprom => "EEPROM",
            MemoryType::Eprom => "EPROM",
            MemoryType::Flash => "FLASH",
            MemoryType::Ram => "RAM",
            MemoryType::Rom => "ROM",
            MemoryType::Register => "REGISTER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrgType {
    CalibrationVariables,
    Code,
    Data,
    ExcludedFromFlash,
    OfflineData,
    Reserved,
    Seram,
    Variables,
}

impl PrgType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrgType::CalibrationVariables => "CALIBRATION_VARIABLES",
            PrgType::Code => "CODE",
            PrgType::Data => "DATA",
            PrgType::ExcludedFromFlash => "EXCLUDED_FROM_FLASH",
            PrgType::OfflineData => "OFFLINE_DATA",
            PrgType::Reserved => "RESERVED",
            PrgType::Seram => "SERAM",
            PrgType::Variables => "VARIABLES",
        }
    }
}

/// One contiguous region of ECU memory and its role.
#[derive(Debug)]
pub struct MemorySegment {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub prg_type: PrgType,
    pub memory_type: MemoryType,
    pub attribute: SegmentAttribute,
    pub address: u64,
    pub size: u64,
    pub offsets: [i64; 5],
    pub if_data: Vec<IfData>,
}

impl MemorySegment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        long_identifier: impl Into<String>,
        prg_type: PrgType,
        memory_type: MemoryType,
        attribute: SegmentAttribute,
        address: u64,
        size: u64,
        offsets: [i64; 5],
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            long_identifier: long_identifier.into(),
            prg_type,
            memory_type,
            attribute,
            address,
            size,
            offsets,
            if_data: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for MemorySegment {
    fn tag(&self) -> &'static str {
        "MEMORY_SEGMENT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)),
            Field::string(1, &self.long_identifier),
            Field::arg(2, Scalar::Enum(self.prg_type.as_str())).comment(" PrgTypes   "),
            Field::arg(3, Scalar::Enum(self.memory_type.as_str())).comment(" MemoryType "),
            Field::arg(4, Scalar::Enum(self.attribute.as_str())).comment(" Attribute  "),
            Field::arg(5, Scalar::UInt(self.address))
                .comment(" Address    ")
                .hex(),
            Field::arg(6, Scalar::UInt(self.size))
                .comment(" Size       ")
                .hex(),
            Field::arg(7, Scalar::Int(self.offsets[0])).comment(" offset     "),
            Field::arg(8, Scalar::Int(self.offsets[1])),
            Field::arg(9, Scalar::Int(self.offsets[2])),
            Field::arg(10, Scalar::Int(self.offsets[3])),
            Field::arg(11, Scalar::Int(self.offsets[4])),
        ];
        push_nodes(&mut fields, 12, &self.if_data);
        fields
    }
}

/// EPROM identifier address.
#[derive(Debug, Clone)]
pub struct AddrEpk {
    info: NodeInfo,
    pub address: u64,
}

impl AddrEpk {
    pub fn new(location: Location, order: &OrderSource, address: u64) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            address,
        }
    }
}

impl Node for AddrEpk {
    fn tag(&self) -> &'static str {
        "ADDR_EPK"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::UInt(self.address)).hex()]
    }
}

#[derive(Debug, Clone)]
pub struct CalibrationMethod {
    info: NodeInfo,
    pub method: String,
    pub version: u64,
    pub calibration_handle: Option<CalibrationHandle>,
}

impl CalibrationMethod {
    pub fn new(
        location: Location,
        order: &OrderSource,
        method: impl Into<String>,
        version: u64,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            method: method.into(),
            version,
            calibration_handle: None,
        }
    }
}

impl Node for CalibrationMethod {
    fn tag(&self) -> &'static str {
        "CALIBRATION_METHOD"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::string(0, &self.method).comment(" Method  "),
            Field::arg(1, Scalar::UInt(self.version)).comment(" Version "),
        ];
        push_node(&mut fields, 2, &self.calibration_handle);
        fields
    }
}

/// Handles used by the calibration method, one hex value per line.
#[derive(Debug, Clone)]
pub struct CalibrationHandle {
    info: NodeInfo,
    pub handles: Vec<u64>,
    pub text: Option<String>,
}

impl CalibrationHandle {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            handles: Vec::new(),
            text: None,
        }
    }
}

impl Node for CalibrationHandle {
    fn tag(&self) -> &'static str {
        "CALIBRATION_HANDLE"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::scalars(
            0,
            self.handles.iter().map(|&h| Scalar::UInt(h)).collect(),
        )
        .comment(" Handles ")
        .hex()];
        if let Some(text) = &self.text {
            fields.push(Field::string(1, text).keyword("CALIBRATION_HANDLE_TEXT"));
        }
        fields
    }
}

/// A named constant of the ECU software, both parts quoted.
#[derive(Debug, Clone)]
pub struct SystemConstant {
    info: NodeInfo,
    name: String,
    pub value: String,
}

impl SystemConstant {
    pub fn new(
        location: Location,
        order: &OrderSource,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for SystemConstant {
    fn tag(&self) -> &'static str {
        "SYSTEM_CONSTANT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::string(0, &self.name), Field::string(1, &self.value)]
    }
}
