//! The typed document tree.
//!
//! One submodule per entity family; `node` holds the base trait and the
//! helpers the families build on. The flat re-exports below are the crate's
//! public construction surface.

pub mod axis;
pub mod characteristic;
pub mod compu;
pub mod document;
pub mod function;
pub mod group;
pub mod measurement;
pub mod memory;
pub mod module;
pub(crate) mod node;
pub mod record_layout;
pub mod shared;
pub mod unit;
pub mod variant;

pub use axis::{AxisAttr, AxisDescr, AxisPts, FixAxisPar, FixAxisParDist, FixAxisParList};
pub use characteristic::{
    Characteristic, CharacteristicType, DependentCharacteristic, VirtualCharacteristic,
};
pub use compu::{
    Coeffs, CoeffsLinear, CompuMethod, CompuTab, CompuTabEntry, CompuVtab, CompuVtabEntry,
    CompuVtabRange, CompuVtabRangeEntry, Formula,
};
pub use document::{
    A2mlVersion, Asap2Version, Document, DocumentElement, FileComment, Header, Project,
    FALLBACK_VERSION,
};
pub use function::{
    DefCharacteristic, Frame, FrameMeasurement, Function, InMeasurement, LocMeasurement,
    OutMeasurement, RefCharacteristic, SubFunction,
};
pub use group::{Group, RefGroup, RefMeasurement, SubGroup, UserRights};
pub use measurement::{BitOperation, LeftShift, Measurement, RightShift, Virtual};
pub use memory::{
    AddrEpk, CalibrationHandle, CalibrationMethod, MemorySegment, MemoryType, ModCommon, ModPar,
    PrgType, SegmentAttribute, SystemConstant,
};
pub use module::{A2ml, GenericBlock, IfData, Module, ModuleChild};
pub use node::{Layout, Node, NodeInfo};
pub use record_layout::{
    Alignment, AlignmentKind, AxisDim, AxisPtsDim, FncValues, Identification, NoAxisPtsDim,
    RecordLayout, StaticRecordLayout,
};
pub use shared::{
    AddrType, Annotation, AnnotationLabel, AnnotationOrigin, AnnotationText, ByteOrder,
    ByteOrderKind, CalibrationAccess, CalibrationAccessKind, ConversionType, DataSize, DataType,
    Deposit, DepositKind, Discrete, DisplayIdentifier, EcuAddress, EcuAddressExtension,
    ExtendedLimits, Format, GuardRails, IndexMode, IndexOrder, MatrixDim, MaxRefresh, Monotony,
    MonotonyKind, PhysUnit, ReadOnly, ReadWrite, RefMemorySegment, Root, StepSize, SymbolLink,
};
pub use unit::{SiExponents, Unit, UnitConversion, UnitType};
pub use variant::{
    VarCriterion, VarForbiddenComb, VarMeasurement, VarNamingKind, VarSelectionCharacteristic,
    VariantCoding,
};
