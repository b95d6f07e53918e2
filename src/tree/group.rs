//! GROUP and USER_RIGHTS: display-oriented object grouping and per-user
//! access to those groups.

use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::function::RefCharacteristic;
use crate::tree::module::IfData;
use crate::tree::node::{ident_list_node, push_node, push_nodes, Layout, Node, NodeInfo};
use crate::tree::shared::{Annotation, ReadOnly, Root};

/// A named group of objects for structured display in the MC system.
#[derive(Debug)]
pub struct Group {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub annotations: Vec<Annotation>,
    pub if_data: Vec<IfData>,
    pub ref_characteristic: Option<RefCharacteristic>,
    pub ref_measurement: Option<RefMeasurement>,
    pub root: Option<Root>,
    pub sub_group: Option<SubGroup>,
}

impl Group {
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
            annotations: Vec::new(),
            if_data: Vec::new(),
            ref_characteristic: None,
            ref_measurement: None,
            root: None,
            sub_group: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for Group {
    fn tag(&self) -> &'static str {
        "GROUP"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::arg(0, Scalar::Text(&self.name)).comment(" GroupName           "),
            Field::string(1, &self.long_identifier).comment(" GroupLongIdentifier "),
        ];
        push_nodes(&mut fields, 2, &self.annotations);
        push_nodes(&mut fields, 3, &self.if_data);
        push_node(&mut fields, 4, &self.ref_characteristic);
        push_node(&mut fields, 5, &self.ref_measurement);
        push_node(&mut fields, 6, &self.root);
        push_node(&mut fields, 7, &self.sub_group);
        fields
    }
}

ident_list_node!(
    /// Measurements belonging to the enclosing group.
    RefMeasurement,
    "REF_MEASUREMENT",
    " Measurement references "
);
ident_list_node!(
    /// Child groups of the enclosing group.
    SubGroup,
    "SUB_GROUP",
    " Sub groups "
);

/// Access rights of one user level over a set of groups.
#[derive(Debug)]
pub struct UserRights {
    info: NodeInfo,
    user_level_id: String,
    pub ref_groups: Vec<RefGroup>,
    pub read_only: Option<ReadOnly>,
}

impl UserRights {
    pub fn new(location: Location, order: &OrderSource, user_level_id: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            user_level_id: user_level_id.into(),
            ref_groups: Vec::new(),
            read_only: None,
        }
    }

    pub fn user_level_id(&self) -> &str {
        &self.user_level_id
    }
}

impl Node for UserRights {
    fn tag(&self) -> &'static str {
        "USER_RIGHTS"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::arg(0, Scalar::Text(&self.user_level_id))
            .comment(" UserLevelId ")];
        push_nodes(&mut fields, 1, &self.ref_groups);
        push_node(&mut fields, 2, &self.read_only);
        fields
    }
}

ident_list_node!(
    /// Groups the user level has access to.
    RefGroup,
    "REF_GROUP",
    " Group references "
);
