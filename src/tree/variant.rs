//! VARIANT_CODING: variant criteria and the rules combining them.

use indexmap::IndexMap;

use crate::diagnostics::DuplicateName;
use crate::location::Location;
use crate::order::OrderSource;
use crate::schema::{Field, Scalar};
use crate::tree::node::{push_node, push_nodes, Layout, Node, NodeInfo};

/// Naming convention for variant-coded object names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarNamingKind {
    Numeric,
    Alpha,
}

impl VarNamingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarNamingKind::Numeric => "NUMERIC",
            VarNamingKind::Alpha => "ALPHA",
        }
    }
}

#[derive(Debug)]
pub struct VariantCoding {
    info: NodeInfo,
    criteria: IndexMap<String, VarCriterion>,
    pub forbidden_combs: Vec<VarForbiddenComb>,
    pub naming: Option<VarNamingKind>,
    /// Separator between object name and variant extension.
    pub separator: Option<String>,
}

impl VariantCoding {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            criteria: IndexMap::new(),
            forbidden_combs: Vec::new(),
            naming: None,
            separator: None,
        }
    }

    pub fn add_criterion(&mut self, criterion: VarCriterion) -> Result<(), DuplicateName> {
        if let Some(existing) = self.criteria.get(criterion.name()) {
            return Err(DuplicateName {
                kind: "VAR_CRITERION",
                name: criterion.name().to_string(),
                existing: existing.info.location().clone(),
                incoming: criterion.info.location().clone(),
            });
        }
        self.criteria
            .insert(criterion.name().to_string(), criterion);
        Ok(())
    }

    pub fn criterion(&self, name: &str) -> Option<&VarCriterion> {
        self.criteria.get(name)
    }
}

impl Node for VariantCoding {
    fn tag(&self) -> &'static str {
        "VARIANT_CODING"
    }

    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn layout(&self) -> Layout {
        Layout::Block
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = Vec::new();
        if !self.criteria.is_empty() {
            fields.push(Field::map(
                0,
                self.criteria.values().map(|c| c as &dyn Node).collect(),
            ));
        }
        push_nodes(&mut fields, 1, &self.forbidden_combs);
        if let Some(naming) = self.naming {
            fields.push(Field::arg(2, Scalar::Enum(naming.as_str())).keyword("VAR_NAMING"));
        }
        if let Some(separator) = &self.separator {
            fields.push(Field::string(3, separator).keyword("VAR_SEPARATOR"));
        }
        fields
    }
}

/// A variant criterion: named variants and the selector choosing among them.
#[derive(Debug)]
pub struct VarCriterion {
    info: NodeInfo,
    name: String,
    pub long_identifier: String,
    pub idents: Vec<String>,
    pub var_measurement: Option<VarMeasurement>,
    pub var_selection_characteristic: Option<VarSelectionCharacteristic>,
}

impl VarCriterion {
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
            idents: Vec::new(),
            var_measurement: None,
            var_selection_characteristic: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Node for VarCriterion {
    fn tag(&self) -> &'static str {
        "VAR_CRITERION"
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
            Field::scalars(2, self.idents.iter().map(|i| Scalar::Text(i)).collect())
                .comment(" Ident          "),
        ];
        push_node(&mut fields, 3, &self.var_measurement);
        push_node(&mut fields, 4, &self.var_selection_characteristic);
        fields
    }
}

/// Selector measurement whose value picks the active variant.
#[derive(Debug, Clone)]
pub struct VarMeasurement {
    info: NodeInfo,
    pub name: String,
}

impl VarMeasurement {
    pub fn new(location: Location, order: &OrderSource, name: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
        }
    }
}

impl Node for VarMeasurement {
    fn tag(&self) -> &'static str {
        "VAR_MEASUREMENT"
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

/// Selector characteristic whose value picks the active variant.
#[derive(Debug, Clone)]
pub struct VarSelectionCharacteristic {
    info: NodeInfo,
    pub name: String,
}

impl VarSelectionCharacteristic {
    pub fn new(location: Location, order: &OrderSource, name: impl Into<String>) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            name: name.into(),
        }
    }
}

impl Node for VarSelectionCharacteristic {
    fn tag(&self) -> &'static str {
        "VAR_SELECTION_CHARACTERISTIC"
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

/// A combination of criterion values that must not occur together. Each
/// entry renders as `criterion value` on one line.
#[derive(Debug, Clone)]
pub struct VarForbiddenComb {
    info: NodeInfo,
    pub combinations: Vec<(String, String)>,
}

impl VarForbiddenComb {
    pub fn new(location: Location, order: &OrderSource) -> Self {
        Self {
            info: NodeInfo::new(location, order),
            combinations: Vec::new(),
        }
    }
}

impl Node for VarForbiddenComb {
    fn tag(&self) -> &'static str {
        "VAR_FORBIDDEN_COMB"
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
            self.combinations
                .iter()
                .map(|(name, value)| Scalar::Pair(name, value))
                .collect(),
        )]
    }
}
