//! The MODULE block: one tagged-union arena of children behind a single
//! ordered index, plus name-keyed namespaces enforcing uniqueness.
//!
//! All children, whatever their kind, live in one `Vec<ModuleChild>`; the
//! namespaces are maps from name to arena index. Serialization therefore
//! never needs namespace knowledge: the module hands the serializer all of
//! its children and canonical order falls out of the order ids.
//!
//! Three related entity kinds (axis-point sets, measurements,
//! characteristics) share one namespace, as do the three conversion-table
//! kinds. Everything else with a name gets a namespace of its own; kinds
//! without a namespace (A2ML, IF_DATA, MOD_COMMON, MOD_PAR, VARIANT_CODING,
//! free-standing comments, unknown future kinds) are appended generically.

use indexmap::IndexMap;

use crate::diagnostics::DuplicateName;
use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::axis::AxisPts;
use crate::tree::characteristic::Characteristic;
use crate::tree::compu::{CompuMethod, CompuTab, CompuVtab, CompuVtabRange};
use crate::tree::document::FileComment;
use crate::tree::function::{Frame, Function};
use crate::tree::group::{Group, UserRights};
use crate::tree::measurement::Measurement;
use crate::tree::memory::{ModCommon, ModPar};
use crate::tree::node::{Layout, Node, NodeInfo};
use crate::tree::record_layout::RecordLayout;
use crate::tree::unit::Unit;
use crate::tree::variant::VariantCoding;

/// Every block kind a module can hold.
#[derive(Debug)]
pub enum ModuleChild {
    A2ml(A2ml),
    IfData(IfData),
    ModCommon(ModCommon),
    ModPar(ModPar),
    VariantCoding(VariantCoding),
    AxisPts(AxisPts),
    Measurement(Measurement),
    Characteristic(Characteristic),
    CompuTab(CompuTab),
    CompuVtab(CompuVtab),
    CompuVtabRange(CompuVtabRange),
    CompuMethod(CompuMethod),
    Frame(Frame),
    Function(Function),
    Group(Group),
    RecordLayout(RecordLayout),
    Unit(Unit),
    UserRights(UserRights),
    /// A free-standing comment inside the module body.
    Comment(FileComment),
    /// A block kind this crate has no dedicated type for. Kept so unknown
    /// future kinds survive merging and serialization instead of silently
    /// vanishing.
    Unknown(GenericBlock),
}

impl ModuleChild {
    pub fn as_node(&self) -> &dyn Node {
        match self {
            ModuleChild::A2ml(n) => n,
            ModuleChild::IfData(n) => n,
            ModuleChild::ModCommon(n) => n,
            ModuleChild::ModPar(n) => n,
            ModuleChild::VariantCoding(n) => n,
            ModuleChild::AxisPts(n) => n,
            ModuleChild::Measurement(n) => n,
            ModuleChild::Characteristic(n) => n,
            ModuleChild::CompuTab(n) => n,
            ModuleChild::CompuVtab(n) => n,
            ModuleChild::CompuVtabRange(n) => n,
            ModuleChild::CompuMethod(n) => n,
            ModuleChild::Frame(n) => n,
            ModuleChild::Function(n) => n,
            ModuleChild::Group(n) => n,
            ModuleChild::RecordLayout(n) => n,
            ModuleChild::Unit(n) => n,
            ModuleChild::UserRights(n) => n,
            ModuleChild::Comment(n) => n,
            ModuleChild::Unknown(n) => n,
        }
    }

    pub fn location(&self) -> &Location {
        self.as_node().info().location()
    }

    /// Keyword of the child's kind.
    pub fn kind(&self) -> &'static str {
        self.as_node().tag()
    }
}

/// The MODULE block.
#[derive(Debug)]
pub struct Module {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    children: Vec<ModuleChild>,
    /// Shared namespace: axis-point sets, measurements, characteristics.
    objects: IndexMap<String, usize>,
    /// Shared namespace: value, verbal and range conversion tables.
    conversion_tables: IndexMap<String, usize>,
    compu_methods: IndexMap<String, usize>,
    frames: IndexMap<String, usize>,
    functions: IndexMap<String, usize>,
    groups: IndexMap<String, usize>,
    record_layouts: IndexMap<String, usize>,
    units: IndexMap<String, usize>,
    user_rights: IndexMap<String, usize>,
}

fn insert_unique(
    children: &mut Vec<ModuleChild>,
    namespace: &mut IndexMap<String, usize>,
    name: String,
    child: ModuleChild,
) -> Result<(), DuplicateName> {
    if let Some(&index) = namespace.get(&name) {
        return Err(DuplicateName {
            kind: child.kind(),
            name,
            existing: children[index].location().clone(),
            incoming: child.location().clone(),
        });
    }
    namespace.insert(name, children.len());
    children.push(child);
    Ok(())
}

impl Module {
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
            children: Vec::new(),
            objects: IndexMap::new(),
            conversion_tables: IndexMap::new(),
            compu_methods: IndexMap::new(),
            frames: IndexMap::new(),
            functions: IndexMap::new(),
            groups: IndexMap::new(),
            record_layouts: IndexMap::new(),
            units: IndexMap::new(),
            user_rights: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[ModuleChild] {
        &self.children
    }

    /// Consumes the module, yielding its children in insertion order. Used
    /// by the merger, which re-inserts through the accessors below.
    pub fn into_children(self) -> Vec<ModuleChild> {
        self.children
    }

    // ------------------------------------------------------------------
    // Uniqueness-checked insertion, one accessor per namespaced kind
    // ------------------------------------------------------------------

    pub fn add_axis_pts(&mut self, axis_pts: AxisPts) -> Result<(), DuplicateName> {
        let name = axis_pts.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.objects,
            name,
            ModuleChild::AxisPts(axis_pts),
        )
    }

    pub fn add_measurement(&mut self, measurement: Measurement) -> Result<(), DuplicateName> {
        let name = measurement.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.objects,
            name,
            ModuleChild::Measurement(measurement),
        )
    }

    pub fn add_characteristic(
        &mut self,
        characteristic: Characteristic,
    ) -> Result<(), DuplicateName> {
        let name = characteristic.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.objects,
            name,
            ModuleChild::Characteristic(characteristic),
        )
    }

    pub fn add_compu_tab(&mut self, tab: CompuTab) -> Result<(), DuplicateName> {
        let name = tab.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.conversion_tables,
            name,
            ModuleChild::CompuTab(tab),
        )
    }

    pub fn add_compu_vtab(&mut self, vtab: CompuVtab) -> Result<(), DuplicateName> {
        let name = vtab.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.conversion_tables,
            name,
            ModuleChild::CompuVtab(vtab),
        )
    }

    pub fn add_compu_vtab_range(&mut self, vtab: CompuVtabRange) -> Result<(), DuplicateName> {
        let name = vtab.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.conversion_tables,
            name,
            ModuleChild::CompuVtabRange(vtab),
        )
    }

    pub fn add_compu_method(&mut self, method: CompuMethod) -> Result<(), DuplicateName> {
        let name = method.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.compu_methods,
            name,
            ModuleChild::CompuMethod(method),
        )
    }

    pub fn add_frame(&mut self, frame: Frame) -> Result<(), DuplicateName> {
        let name = frame.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.frames,
            name,
            ModuleChild::Frame(frame),
        )
    }

    pub fn add_function(&mut self, function: Function) -> Result<(), DuplicateName> {
        let name = function.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.functions,
            name,
            ModuleChild::Function(function),
        )
    }

    pub fn add_group(&mut self, group: Group) -> Result<(), DuplicateName> {
        let name = group.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.groups,
            name,
            ModuleChild::Group(group),
        )
    }

    pub fn add_record_layout(&mut self, layout: RecordLayout) -> Result<(), DuplicateName> {
        let name = layout.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.record_layouts,
            name,
            ModuleChild::RecordLayout(layout),
        )
    }

    pub fn add_unit(&mut self, unit: Unit) -> Result<(), DuplicateName> {
        let name = unit.name().to_string();
        insert_unique(
            &mut self.children,
            &mut self.units,
            name,
            ModuleChild::Unit(unit),
        )
    }

    pub fn add_user_rights(&mut self, rights: UserRights) -> Result<(), DuplicateName> {
        let name = rights.user_level_id().to_string();
        insert_unique(
            &mut self.children,
            &mut self.user_rights,
            name,
            ModuleChild::UserRights(rights),
        )
    }

    // ------------------------------------------------------------------
    // Un-namespaced kinds: plain appends
    // ------------------------------------------------------------------

    pub fn push_a2ml(&mut self, a2ml: A2ml) {
        self.children.push(ModuleChild::A2ml(a2ml));
    }

    pub fn push_if_data(&mut self, if_data: IfData) {
        self.children.push(ModuleChild::IfData(if_data));
    }

    pub fn push_mod_common(&mut self, mod_common: ModCommon) {
        self.children.push(ModuleChild::ModCommon(mod_common));
    }

    pub fn push_mod_par(&mut self, mod_par: ModPar) {
        self.children.push(ModuleChild::ModPar(mod_par));
    }

    pub fn push_variant_coding(&mut self, coding: VariantCoding) {
        self.children.push(ModuleChild::VariantCoding(coding));
    }

    pub fn push_comment(&mut self, comment: FileComment) {
        self.children.push(ModuleChild::Comment(comment));
    }

    pub fn push_unknown(&mut self, block: GenericBlock) {
        self.children.push(ModuleChild::Unknown(block));
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    fn object(&self, name: &str) -> Option<&ModuleChild> {
        self.objects.get(name).map(|&i| &self.children[i])
    }

    pub fn measurement(&self, name: &str) -> Option<&Measurement> {
        match self.object(name)? {
            ModuleChild::Measurement(m) => Some(m),
            _ => None,
        }
    }

    pub fn characteristic(&self, name: &str) -> Option<&Characteristic> {
        match self.object(name)? {
            ModuleChild::Characteristic(c) => Some(c),
            _ => None,
        }
    }

    pub fn axis_pts(&self, name: &str) -> Option<&AxisPts> {
        match self.object(name)? {
            ModuleChild::AxisPts(a) => Some(a),
            _ => None,
        }
    }

    pub fn compu_method(&self, name: &str) -> Option<&CompuMethod> {
        match &self.children[*self.compu_methods.get(name)?] {
            ModuleChild::CompuMethod(m) => Some(m),
            _ => None,
        }
    }

    pub fn unit(&self, name: &str) -> Option<&Unit> {
        match &self.children[*self.units.get(name)?] {
            ModuleChild::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn record_layout(&self, name: &str) -> Option<&RecordLayout> {
        match &self.children[*self.record_layouts.get(name)?] {
            ModuleChild::RecordLayout(r) => Some(r),
            _ => None,
        }
    }

    /// First child of a singleton kind, with its location. Used by the
    /// merger's multiplicity checks.
    pub fn first_of_kind(&self, kind: &str) -> Option<&ModuleChild> {
        self.children.iter().find(|c| c.kind() == kind)
    }

    /// Names and locations across every namespace, for identifier checks.
    pub fn named_entries(&self) -> impl Iterator<Item = (&str, &Location)> {
        [
            &self.objects,
            &self.conversion_tables,
            &self.compu_methods,
            &self.frames,
            &self.functions,
            &self.groups,
            &self.record_layouts,
            &self.units,
            &self.user_rights,
        ]
        .into_iter()
        .flat_map(|ns| ns.iter())
        .map(|(name, &i)| (name.as_str(), self.children[i].location()))
    }
}

impl Node for Module {
    fn tag(&self) -> &'static str {
        "MODULE"
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
        if !self.children.is_empty() {
            // The whole arena as one list; the serializer re-sorts it by
            // order id, which interleaves the namespaces canonically.
            fields.push(Field::nodes(
                2,
                self.children.iter().map(ModuleChild::as_node).collect(),
            ));
        }
        fields
    }
}

/// Embedded A2ML grammar extension, carried verbatim.
#[derive(Debug, Clone)]
pub struct A2ml {
    info: NodeInfo,
    pub data: String,
}

impl A2ml {
    pub fn new(location: Location, order: &OrderSource, data: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            data: data.into(),
        }
    }
}

impl Node for A2ml {
    fn tag(&self) -> &'static str {
        "A2ML"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Text(&self.data))]
    }
}

/// Interface-specific data, carried verbatim. The first word of the payload
/// names the interface.
#[derive(Debug, Clone)]
pub struct IfData {
    info: NodeInfo,
    name: String,
    pub data: String,
}

impl IfData {
    pub fn new(location: Location, order: &OrderSource, data: impl Into<String>) -> Self {
        let data = data.into();
        let name = data
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            info: NodeInfo::new(location, order),
            name,
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for IfData {
    fn tag(&self) -> &'static str {
        "IF_DATA"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::arg(0, Scalar::Text(&self.data))]
    }
}

/// A block kind unknown to this crate: keyword plus raw payload. Carried so
/// future grammar additions degrade gracefully.
#[derive(Debug, Clone)]
pub struct GenericBlock {
    info: NodeInfo,
    pub keyword: String,
    pub data: String,
}

impl GenericBlock {
    pub fn new(
        location: Location,
        order: &OrderSource,
        keyword: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            keyword: keyword.into(),
            data: data.into(),
        }
    }
}

impl Node for GenericBlock {
    fn tag(&self) -> &'static str {
        "UNKNOWN"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            // The runtime keyword replaces the placeholder tag.
            Field::name(0, &self.keyword),
            Field::arg(1, Scalar::Text(&self.data)),
        ]
    }
}
