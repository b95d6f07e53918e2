//! Field schema: the metadata that drives canonical serialization.
//!
//! Each node type describes its serialized block through an explicit table
//! of [`Field`]s returned from [`Node::fields`](crate::tree::Node::fields):
//! one entry per *present* field, tagged with a [`FieldDescriptor`]. Absent
//! optional fields are simply omitted, which is not an error. The serializer
//! consumes these tables generically; it never knows concrete node types.
//!
//! The original tool discovered this metadata through runtime reflection
//! with per-type attribute caches. Rust has no reflection, so the tables are
//! written by hand; they are cheap `Copy` values built inline, and the only
//! per-visit work left is a stable sort over at most a couple dozen entries.

use crate::tree::Node;

/// Formatting category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The field's runtime value supplies the block's keyword instead of the
    /// node type's default tag. Never rendered as a field of its own.
    Name,
    /// Inline positional scalar.
    Argument,
    /// Value wrapped verbatim in `"…"`.
    String,
    /// Free comment rendered on its own `/* … */` line.
    Comment,
    /// A single child node, serialized recursively.
    Node,
    /// Ordered list of child nodes; locally re-sorted by order id before
    /// serialization, since front-end list population can be out of
    /// declaration order.
    Nodes,
    /// List of plain scalars, one per line.
    Scalars,
    /// Name-keyed mapping of children, serialized in insertion order.
    Map,
}

/// Per-field serialization metadata.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Sort position within the owning node's serialized block.
    pub sort: u32,
    pub kind: FieldKind,
    /// Replaces the field's positional rendering with `KEYWORD value`.
    pub keyword: Option<&'static str>,
    /// Fixed comment emitted ahead of the value.
    pub comment: Option<&'static str>,
    /// Forces a fresh line ahead of the field regardless of other rules.
    pub force_new_line: bool,
    /// Integer scalars render as `0x` + uppercase hex.
    pub hex: bool,
}

/// A scalar value as it appears in the grammar.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    /// Raw text: identifiers, references, embedded grammar payloads.
    Text(&'a str),
    /// Quoted string.
    Str(&'a str),
    UInt(u64),
    Int(i64),
    /// Rendered with Rust's locale-independent `Display` (no grouping
    /// separators, no trailing zeros).
    Float(f64),
    /// Enumerator, spelled by symbolic name.
    Enum(&'static str),
    /// Two raw words on one line, e.g. a variant criterion/value pair.
    Pair(&'a str, &'a str),
}

/// The runtime value of a present field.
pub enum FieldValue<'a> {
    Name(&'a str),
    Scalar(Scalar<'a>),
    String(&'a str),
    Comment(&'a str),
    Node(&'a dyn Node),
    Nodes(Vec<&'a dyn Node>),
    Scalars(Vec<Scalar<'a>>),
    Map(Vec<&'a dyn Node>),
}

/// A present field: descriptor plus value.
pub struct Field<'a> {
    pub desc: FieldDescriptor,
    pub value: FieldValue<'a>,
}

const fn desc(sort: u32, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        sort,
        kind,
        keyword: None,
        comment: None,
        force_new_line: false,
        hex: false,
    }
}

impl<'a> Field<'a> {
    /// Name-supplying field; its value becomes the block keyword.
    pub fn name(sort: u32, value: &'a str) -> Self {
        Field {
            desc: desc(sort, FieldKind::Name),
            value: FieldValue::Name(value),
        }
    }

    pub fn arg(sort: u32, value: Scalar<'a>) -> Self {
        Field {
            desc: desc(sort, FieldKind::Argument),
            value: FieldValue::Scalar(value),
        }
    }

    pub fn string(sort: u32, value: &'a str) -> Self {
        Field {
            desc: desc(sort, FieldKind::String),
            value: FieldValue::String(value),
        }
    }

    pub fn comment_line(sort: u32, text: &'a str) -> Self {
        Field {
            desc: desc(sort, FieldKind::Comment),
            value: FieldValue::Comment(text),
        }
    }

    pub fn node(sort: u32, child: &'a dyn Node) -> Self {
        Field {
            desc: desc(sort, FieldKind::Node),
            value: FieldValue::Node(child),
        }
    }

    pub fn nodes(sort: u32, children: Vec<&'a dyn Node>) -> Self {
        Field {
            desc: desc(sort, FieldKind::Nodes),
            value: FieldValue::Nodes(children),
        }
    }

    pub fn scalars(sort: u32, values: Vec<Scalar<'a>>) -> Self {
        Field {
            desc: desc(sort, FieldKind::Scalars),
            value: FieldValue::Scalars(values),
        }
    }

    pub fn map(sort: u32, children: Vec<&'a dyn Node>) -> Self {
        Field {
            desc: desc(sort, FieldKind::Map),
            value: FieldValue::Map(children),
        }
    }

    /// Replaces the declared tag with a custom keyword.
    pub fn keyword(mut self, keyword: &'static str) -> Self {
        self.desc.keyword = Some(keyword);
        self
    }

    /// Attaches a fixed comment rendered ahead of the value.
    pub fn comment(mut self, text: &'static str) -> Self {
        self.desc.comment = Some(text);
        self
    }

    /// Forces a leading line break ahead of this field.
    pub fn on_new_line(mut self) -> Self {
        self.desc.force_new_line = true;
        self
    }

    /// Renders integer scalars as `0x` + uppercase hex.
    pub fn hex(mut self) -> Self {
        self.desc.hex = true;
        self
    }
}

/// Sorts a field table by ascending sort position. The sort is stable, so
/// fields sharing a position keep their declared order.
pub fn sort_fields(fields: &mut [Field<'_>]) {
    fields.sort_by_key(|f| f.desc.sort);
}
