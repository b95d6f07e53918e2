//! The document root: top-level elements, version markers and the PROJECT.

use std::fmt;

use indexmap::IndexMap;

use crate::diagnostics::DuplicateName;
use crate::location::Location;
use crate::order::{OrderId, OrderSource};
use crate::schema::{Field, Scalar};
use crate::tree::module::Module;
use crate::tree::node::{push_node, Layout, Node, NodeInfo};

/// ASAP2 version assumed when the `ASAP2_VERSION` marker is missing.
pub const FALLBACK_VERSION: (u32, u32) = (1, 51);

/// A complete parsed document: an insertion-ordered sequence of top-level
/// elements. At most one of each version-marker kind is meaningful; the
/// setters below enforce the single slot by replacing a previous marker.
#[derive(Debug, Default)]
pub struct Document {
    /// File name used in findings for document-level checks.
    pub base_file: String,
    elements: Vec<DocumentElement>,
}

/// Top-level element kinds.
#[derive(Debug)]
pub enum DocumentElement {
    Comment(FileComment),
    Asap2Version(Asap2Version),
    A2mlVersion(A2mlVersion),
    Project(Project),
}

impl DocumentElement {
    pub fn order_id(&self) -> OrderId {
        match self {
            DocumentElement::Comment(c) => c.info.order_id(),
            DocumentElement::Asap2Version(v) => v.info.order_id(),
            DocumentElement::A2mlVersion(v) => v.info.order_id(),
            DocumentElement::Project(p) => p.info.order_id(),
        }
    }
}

impl Document {
    pub fn new(base_file: impl Into<String>) -> Self {
        Self {
            base_file: base_file.into(),
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[DocumentElement] {
        &self.elements
    }

    pub fn push_comment(&mut self, comment: FileComment) {
        self.elements.push(DocumentElement::Comment(comment));
    }

    /// Appends a PROJECT. Extra projects are tolerated here; the validator
    /// warns about them and only the first is honored.
    pub fn push_project(&mut self, project: Project) {
        self.elements.push(DocumentElement::Project(project));
    }

    /// Sets the `ASAP2_VERSION` marker, replacing any previous one.
    pub fn set_asap2_version(&mut self, version: Asap2Version) {
        self.elements
            .retain(|e| !matches!(e, DocumentElement::Asap2Version(_)));
        self.elements.push(DocumentElement::Asap2Version(version));
    }

    /// Sets the `A2ML_VERSION` marker, replacing any previous one.
    pub fn set_a2ml_version(&mut self, version: A2mlVersion) {
        self.elements
            .retain(|e| !matches!(e, DocumentElement::A2mlVersion(_)));
        self.elements.push(DocumentElement::A2mlVersion(version));
    }

    /// The first PROJECT, which is the one honored everywhere.
    pub fn project(&self) -> Option<&Project> {
        self.elements.iter().find_map(|e| match e {
            DocumentElement::Project(p) => Some(p),
            _ => None,
        })
    }

    pub fn project_mut(&mut self) -> Option<&mut Project> {
        self.elements.iter_mut().find_map(|e| match e {
            DocumentElement::Project(p) => Some(p),
            _ => None,
        })
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Project(p) => Some(p),
            _ => None,
        })
    }

    pub fn asap2_version(&self) -> Option<&Asap2Version> {
        self.elements.iter().find_map(|e| match e {
            DocumentElement::Asap2Version(v) => Some(v),
            _ => None,
        })
    }

    pub fn a2ml_version(&self) -> Option<&A2mlVersion> {
        self.elements.iter().find_map(|e| match e {
            DocumentElement::A2mlVersion(v) => Some(v),
            _ => None,
        })
    }
}

/// A free-standing comment between top-level elements. The only formatting
/// the core round-trips; `/*` and `*/` are added when rendering.
#[derive(Debug, Clone)]
pub struct FileComment {
    info: NodeInfo,
    pub text: String,
    /// Prefix continuation lines with ` * `.
    pub star_lines: bool,
}

impl FileComment {
    pub fn new(
        location: Location,
        order: &OrderSource,
        text: impl Into<String>,
        star_lines: bool,
    ) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            text: text.into(),
            star_lines,
        }
    }

    pub fn info(&self) -> &NodeInfo {
        &self.info
    }
}

impl fmt::Display for FileComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.star_lines {
            write!(f, "/* {} */", self.text.replace('\n', "\n * "))
        } else {
            write!(f, "/* {} */", self.text)
        }
    }
}

/// Comments also occur inside a MODULE body, where they travel through the
/// child arena like any other element.
impl Node for FileComment {
    fn tag(&self) -> &'static str {
        "FILE_COMMENT"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Comment
    }

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    fn comment_text(&self) -> String {
        self.to_string()
    }
}

/// `ASAP2_VERSION VersionNo UpgradeNo`
#[derive(Debug, Clone)]
pub struct Asap2Version {
    info: NodeInfo,
    pub version_no: u32,
    pub upgrade_no: u32,
}

impl Asap2Version {
    pub fn new(location: Location, order: &OrderSource, version_no: u32, upgrade_no: u32) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            version_no,
            upgrade_no,
        }
    }
}

impl Node for Asap2Version {
    fn tag(&self) -> &'static str {
        "ASAP2_VERSION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.version_no.into())),
            Field::arg(1, Scalar::UInt(self.upgrade_no.into())),
        ]
    }
}

/// `A2ML_VERSION VersionNo UpgradeNo`
#[derive(Debug, Clone)]
pub struct A2mlVersion {
    info: NodeInfo,
    pub version_no: u32,
    pub upgrade_no: u32,
}

impl A2mlVersion {
    pub fn new(location: Location, order: &OrderSource, version_no: u32, upgrade_no: u32) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            version_no,
            upgrade_no,
        }
    }
}

impl Node for A2mlVersion {
    fn tag(&self) -> &'static str {
        "A2ML_VERSION"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Simple
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::arg(0, Scalar::UInt(self.version_no.into())),
            Field::arg(1, Scalar::UInt(self.upgrade_no.into())),
        ]
    }
}

/// The PROJECT block: name, description, optional HEADER and the name-keyed
/// MODULE namespace.
#[derive(Debug)]
pub struct Project {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub header: Option<Header>,
    modules: IndexMap<String, Module>,
}

impl Project {
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
            header: None,
            modules: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a module, enforcing name uniqueness within the project.
    pub fn add_module(&mut self, module: Module) -> Result<(), DuplicateName> {
        if let Some(existing) = self.modules.get(module.name()) {
            return Err(DuplicateName {
                kind: "MODULE",
                name: module.name().to_string(),
                existing: existing.info().location().clone(),
                incoming: module.info().location().clone(),
            });
        }
        self.modules.insert(module.name().to_string(), module);
        Ok(())
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Removes and returns all modules, in insertion order. Used by the
    /// merger when collapsing.
    pub fn take_modules(&mut self) -> Vec<Module> {
        std::mem::take(&mut self.modules).into_values().collect()
    }

    /// The first module, if any.
    pub fn first_module_mut(&mut self) -> Option<&mut Module> {
        self.modules.values_mut().next()
    }
}

impl Node for Project {
    fn tag(&self) -> &'static str {
        "PROJECT"
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
        ];
        push_node(&mut fields, 2, &self.header);
        if !self.modules.is_empty() {
            fields.push(Field::map(
                3,
                self.modules.values().map(|m| m as &dyn Node).collect(),
            ));
        }
        fields
    }
}

/// Project management header.
#[derive(Debug, Clone)]
pub struct Header {
    info: NodeInfo,
    pub long_identifier: String,
    pub version: Option<String>,
    pub project_no: Option<String>,
}

impl Header {
    pub fn new(location: Location, order: &OrderSource, long_identifier: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            long_identifier: long_identifier.into(),
            version: None,
            project_no: None,
        }
    }
}

impl Node for Header {
    fn tag(&self) -> &'static str {
        "HEADER"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::string(0, &self.long_identifier).on_new_line()];
        if let Some(version) = &self.version {
            fields.push(Field::string(1, version).keyword("VERSION"));
        }
        if let Some(project_no) = &self.project_no {
            fields.push(Field::arg(2, Scalar::Text(project_no)).keyword("PROJECT_NO"));
        }
        fields
    }
}
