//! Canonical text serialization.
//!
//! A pure tree walk over [`Node::fields`] tables writing grammar text to any
//! [`fmt::Write`] sink. The walk performs no validation; structural problems
//! are the validator's concern. Output is canonical and deterministic:
//!
//! - every element starts on a fresh line, indented one unit per nesting
//!   level;
//! - block elements render `/begin KEYWORD … /end KEYWORD`, simple elements
//!   a single keyword line, comment elements a bare `/* … */` line;
//! - node lists are re-sorted by order id before rendering, so canonical
//!   document order survives out-of-order construction;
//! - maps render in insertion order.

use std::fmt::{self, Write};

use crate::schema::{sort_fields, Field, FieldValue, Scalar};
use crate::tree::{Document, DocumentElement, Layout, Node};

/// The serializer. Holds only the indentation unit; one value can be reused
/// across any number of documents.
#[derive(Debug, Clone)]
pub struct Serializer {
    indent_unit: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
        }
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default four-space indentation unit.
    pub fn with_indent_unit(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    /// Serializes a whole document to a string.
    pub fn to_string(&self, document: &Document) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_document(document, &mut out);
        out
    }

    /// Serializes a whole document into `out`. Top-level elements render in
    /// ascending order id, whatever order they were attached in.
    pub fn write_document<W: Write>(&self, document: &Document, out: &mut W) -> fmt::Result {
        let mut elements: Vec<&DocumentElement> = document.elements().iter().collect();
        elements.sort_by_key(|e| e.order_id());
        for element in elements {
            match element {
                DocumentElement::Comment(comment) => {
                    write!(out, "{comment}")?;
                    out.write_char('\n')?;
                }
                DocumentElement::Asap2Version(version) => self.write_node(version, 0, out)?,
                DocumentElement::A2mlVersion(version) => self.write_node(version, 0, out)?,
                DocumentElement::Project(project) => self.write_node(project, 0, out)?,
            }
        }
        Ok(())
    }

    /// Serializes a single element subtree at the given nesting level.
    pub fn write_node<W: Write>(&self, node: &dyn Node, level: usize, out: &mut W) -> fmt::Result {
        if node.layout() == Layout::Comment {
            out.write_char('\n')?;
            self.indent(level, out)?;
            return out.write_str(&node.comment_text());
        }

        let mut fields = node.fields();
        sort_fields(&mut fields);

        // A Name field's runtime value replaces the type's default keyword.
        let keyword = fields
            .iter()
            .find_map(|f| match f.value {
                FieldValue::Name(name) => Some(name),
                _ => None,
            })
            .unwrap_or_else(|| node.tag());

        out.write_char('\n')?;
        self.indent(level, out)?;
        if node.layout() == Layout::Block {
            out.write_str("/begin ")?;
        }
        out.write_str(keyword)?;

        for field in &fields {
            self.write_field(field, level + 1, out)?;
        }

        if node.layout() == Layout::Block {
            out.write_char('\n')?;
            self.indent(level, out)?;
            out.write_str("/end ")?;
            out.write_str(keyword)?;
        }
        Ok(())
    }

    fn write_field<W: Write>(&self, field: &Field<'_>, level: usize, out: &mut W) -> fmt::Result {
        match &field.value {
            FieldValue::Name(_) => Ok(()),
            FieldValue::Comment(text) => {
                out.write_char('\n')?;
                self.indent(level, out)?;
                write!(out, "/*{text}*/")?;
                out.write_char('\n')
            }
            FieldValue::Scalar(scalar) => {
                self.write_inline_prefix(field, level, out)?;
                self.write_scalar(*scalar, field.desc.hex, out)
            }
            FieldValue::String(value) => {
                self.write_inline_prefix(field, level, out)?;
                write!(out, "\"{value}\"")
            }
            FieldValue::Node(child) => self.write_node(*child, level, out),
            FieldValue::Nodes(children) => {
                if children.is_empty() {
                    return Ok(());
                }
                self.write_container_prelude(field, level, false, out)?;
                let mut sorted: Vec<&dyn Node> = children.clone();
                sorted.sort_by_key(|c| c.info().order_id());
                for child in sorted {
                    self.write_node(child, level, out)?;
                }
                Ok(())
            }
            FieldValue::Map(children) => {
                if children.is_empty() {
                    return Ok(());
                }
                self.write_container_prelude(field, level, true, out)?;
                for child in children {
                    self.write_node(*child, level, out)?;
                }
                Ok(())
            }
            FieldValue::Scalars(values) => {
                if values.is_empty() {
                    return Ok(());
                }
                self.write_container_prelude(field, level, false, out)?;
                for value in values {
                    out.write_char('\n')?;
                    self.indent(level, out)?;
                    self.write_scalar(*value, field.desc.hex, out)?;
                }
                Ok(())
            }
        }
    }

    /// Leading text of an inline value: fixed comment first, then either a
    /// keyword line, a forced fresh line, or a single separating space.
    fn write_inline_prefix<W: Write>(
        &self,
        field: &Field<'_>,
        level: usize,
        out: &mut W,
    ) -> fmt::Result {
        if let Some(comment) = field.desc.comment {
            out.write_char('\n')?;
            self.indent(level, out)?;
            write!(out, "/*{comment}*/ ")?;
        }
        if let Some(keyword) = field.desc.keyword {
            out.write_char('\n')?;
            self.indent(level, out)?;
            out.write_str(keyword)?;
            out.write_char(' ')?;
        } else if field.desc.force_new_line {
            out.write_char('\n')?;
            self.indent(level, out)?;
        } else if field.desc.comment.is_none() {
            out.write_char(' ')?;
        }
        Ok(())
    }

    /// Leading text of a non-empty container field. Map comments close the
    /// line; list comments leave the first child's newline to do it.
    fn write_container_prelude<W: Write>(
        &self,
        field: &Field<'_>,
        level: usize,
        trailing_break: bool,
        out: &mut W,
    ) -> fmt::Result {
        if let Some(comment) = field.desc.comment {
            out.write_char('\n')?;
            self.indent(level, out)?;
            write!(out, "/*{comment}*/")?;
            if trailing_break {
                out.write_char('\n')?;
            }
        } else if field.desc.force_new_line {
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_scalar<W: Write>(&self, scalar: Scalar<'_>, hex: bool, out: &mut W) -> fmt::Result {
        match scalar {
            Scalar::Text(value) => out.write_str(value),
            Scalar::Str(value) => write!(out, "\"{value}\""),
            Scalar::UInt(value) => {
                if hex {
                    write!(out, "0x{value:X}")
                } else {
                    write!(out, "{value}")
                }
            }
            Scalar::Int(value) => write!(out, "{value}"),
            Scalar::Float(value) => write!(out, "{value}"),
            Scalar::Enum(name) => out.write_str(name),
            Scalar::Pair(first, second) => write!(out, "{first} {second}"),
        }
    }

    fn indent<W: Write>(&self, level: usize, out: &mut W) -> fmt::Result {
        for _ in 0..level {
            out.write_str(&self.indent_unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::order::OrderSource;
    use crate::tree::{EcuAddress, MatrixDim};

    fn loc() -> Location {
        Location::for_file("test.a2l")
    }

    #[test]
    fn simple_node_renders_keyword_and_inline_args() {
        let order = OrderSource::new();
        let dim = MatrixDim::new(loc(), &order, 2, 3, 1);
        let mut out = String::new();
        Serializer::new().write_node(&dim, 0, &mut out).unwrap();
        assert_eq!(out, "\nMATRIX_DIM 2 3 1");
    }

    #[test]
    fn hex_arguments_render_uppercase_with_prefix() {
        let order = OrderSource::new();
        let address = EcuAddress::new(loc(), &order, 0xFF);
        let mut out = String::new();
        Serializer::new().write_node(&address, 1, &mut out).unwrap();
        assert_eq!(out, "\n    ECU_ADDRESS 0xFF");
    }
}
