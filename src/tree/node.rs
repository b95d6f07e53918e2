//! The node seam: base data and the trait every tree entity implements.

use crate::location::Location;
use crate::order::{OrderId, OrderSource};
use crate::schema::Field;

/// Whether an element renders as a bracketed block, a bare line or a
/// free-standing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `/begin KEYWORD … /end KEYWORD`
    Block,
    /// `KEYWORD value…` on a single line.
    Simple,
    /// `/* … */` on a line of its own; rendered from
    /// [`Node::comment_text`], bypassing the keyword machinery.
    Comment,
}

/// Base data shared by every tree entity: where it came from and where it
/// sits in canonical document order.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    location: Location,
    order_id: OrderId,
}

impl NodeInfo {
    /// Assigns the order id. Called exactly once, at node construction.
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            location,
            order_id: order.next(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }
}

/// A document element. `fields()` is the hand-written schema table driving
/// the generic serializer; `tag()` is the default block keyword, replaced at
/// render time by a [`FieldKind::Name`](crate::schema::FieldKind::Name)
/// field's value when one is present.
pub trait Node {
    fn tag(&self) -> &'static str;
    fn info(&self) -> &NodeInfo;
    fn layout(&self) -> Layout;
    /// Present fields, descriptor-tagged. Declaration order; the serializer
    /// sorts by the descriptors' sort positions.
    fn fields(&self) -> Vec<Field<'_>>;
    /// Rendered text of a [`Layout::Comment`] node, delimiters included.
    /// Never called for the keyword layouts.
    fn comment_text(&self) -> String {
        String::new()
    }
}

/// Defines a block that carries nothing but a list of identifier references,
/// e.g. `OUT_MEASUREMENT` or `SUB_GROUP`.
macro_rules! ident_list_node {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $crate::tree::node::ident_list_node!(@impl $(#[$doc])* $name, $tag, |field| field);
    };
    ($(#[$doc:meta])* $name:ident, $tag:literal, $comment:literal) => {
        $crate::tree::node::ident_list_node!(
            @impl $(#[$doc])* $name, $tag,
            |field| $crate::schema::Field::comment(field, $comment)
        );
    };
    (@impl $(#[$doc:meta])* $name:ident, $tag:literal, $decorate:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            info: $crate::tree::NodeInfo,
            pub references: Vec<String>,
        }

        impl $name {
            pub fn new(
                location: $crate::location::Location,
                order: &$crate::order::OrderSource,
            ) -> Self {
                Self {
                    info: $crate::tree::NodeInfo::new(location, order),
                    references: Vec::new(),
                }
            }
        }

        impl $crate::tree::Node for $name {
            fn tag(&self) -> &'static str {
                $tag
            }

            fn info(&self) -> &$crate::tree::NodeInfo {
                &self.info
            }

            fn layout(&self) -> $crate::tree::Layout {
                $crate::tree::Layout::Block
            }

            fn fields(&self) -> Vec<$crate::schema::Field<'_>> {
                let field = $crate::schema::Field::scalars(
                    0,
                    self.references
                        .iter()
                        .map(|r| $crate::schema::Scalar::Text(r))
                        .collect(),
                );
                vec![($decorate)(field)]
            }
        }
    };
}

pub(crate) use ident_list_node;

/// Pushes an optional single-child field onto a field table.
pub(crate) fn push_node<'a, N: Node>(
    fields: &mut Vec<Field<'a>>,
    sort: u32,
    child: &'a Option<N>,
) {
    if let Some(node) = child {
        fields.push(Field::node(sort, node));
    }
}

/// Pushes a list field onto a field table, skipping empty lists.
pub(crate) fn push_nodes<'a, N: Node>(fields: &mut Vec<Field<'a>>, sort: u32, children: &'a [N]) {
    if !children.is_empty() {
        fields.push(Field::nodes(
            sort,
            children.iter().map(|c| c as &dyn Node).collect(),
        ));
    }
}
