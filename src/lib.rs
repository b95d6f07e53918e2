pub use crate::diagnostics::{
    CollectingReporter, ConsoleReporter, DuplicateName, ErrorReporter, MergeError, Severity,
    ValidationError,
};
pub use crate::location::Location;
pub use crate::merge::{ConflictPolicy, MergeOptions, Merger, ModuleMergeMode};
pub use crate::order::{OrderId, OrderSource};
pub use crate::serialize::Serializer;
pub use crate::tree::{Document, Module, Project};

pub mod diagnostics;
pub mod ident;
pub mod location;
pub mod merge;
pub mod order;
pub mod schema;
pub mod serialize;
pub mod tree;
pub mod validate;
