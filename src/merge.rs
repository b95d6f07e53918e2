//! Combining several documents into one.
//!
//! The merger consumes its inputs and rebuilds the destination through the
//! same uniqueness-checked accessors used at construction, so every name
//! collision surfaces as the ordinary [`DuplicateName`] before the conflict
//! policy decides what to do with it. An aborted merge therefore never
//! leaves a half-merged document behind.

use crate::diagnostics::{report_warning, DuplicateName, ErrorReporter, MergeError};
use crate::location::Location;
use crate::tree::{Document, Module, ModuleChild, Node};

/// How modules from different documents are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleMergeMode {
    /// Source modules are added next to the destination's modules; only
    /// module names may collide.
    SideBySide,
    /// All modules are folded into the destination's first module.
    Collapse,
}

/// What happens when two elements claim the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// The earlier occurrence wins and the later one is reported.
    KeepFirstAndWarn,
    /// The merge stops at the first conflict.
    Abort,
}

#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    pub module_merge_mode: ModuleMergeMode,
    pub conflict_policy: ConflictPolicy,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            module_merge_mode: ModuleMergeMode::SideBySide,
            conflict_policy: ConflictPolicy::KeepFirstAndWarn,
        }
    }
}

pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Merges `sources` into `dest` and returns the combined document.
    ///
    /// Both arguments are taken by value: under [`ConflictPolicy::Abort`]
    /// the first conflict discards the whole merge, and handing back a
    /// partially rewritten destination would be worse than handing back
    /// nothing.
    pub fn merge(
        &self,
        mut dest: Document,
        sources: Vec<Document>,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<Document, MergeError> {
        match self.options.module_merge_mode {
            ModuleMergeMode::SideBySide => self.merge_side_by_side(&mut dest, sources, reporter)?,
            ModuleMergeMode::Collapse => self.merge_collapsed(&mut dest, sources, reporter)?,
        }
        Ok(dest)
    }

    fn merge_side_by_side(
        &self,
        dest: &mut Document,
        sources: Vec<Document>,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), MergeError> {
        let dest_file = dest.base_file.clone();
        let dest_project = match dest.project_mut() {
            Some(project) => project,
            None => return Err(MergeError::NoProject { file: dest_file }),
        };
        for mut source in sources {
            let source_file = source.base_file.clone();
            let modules = match source.project_mut() {
                Some(project) => project.take_modules(),
                None => return Err(MergeError::NoProject { file: source_file }),
            };
            for module in modules {
                if let Err(collision) = dest_project.add_module(module) {
                    self.on_collision(collision, reporter)?;
                }
            }
        }
        Ok(())
    }

    fn merge_collapsed(
        &self,
        dest: &mut Document,
        sources: Vec<Document>,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), MergeError> {
        let dest_file = dest.base_file.clone();
        let mut modules = match dest.project_mut() {
            Some(project) => project.take_modules(),
            None => return Err(MergeError::NoProject { file: dest_file.clone() }),
        };
        if modules.is_empty() {
            return Err(MergeError::NoModule { file: dest_file });
        }
        let mut base = modules.remove(0);
        for module in modules {
            self.merge_modules(&mut base, module, reporter)?;
        }
        for mut source in sources {
            let source_file = source.base_file.clone();
            let modules = match source.project_mut() {
                Some(project) => project.take_modules(),
                None => return Err(MergeError::NoProject { file: source_file }),
            };
            for module in modules {
                self.merge_modules(&mut base, module, reporter)?;
            }
        }
        if let Some(project) = dest.project_mut() {
            if let Err(collision) = project.add_module(base) {
                return Err(MergeError::Collision(collision));
            }
        }
        Ok(())
    }

    /// Moves every child of `source` into `dest`, one element at a time.
    fn merge_modules(
        &self,
        dest: &mut Module,
        source: Module,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), MergeError> {
        for child in source.into_children() {
            match child {
                ModuleChild::A2ml(n) => {
                    if self.singleton_slot_free(dest, "A2ML", n.info().location(), reporter)? {
                        dest.push_a2ml(n);
                    }
                }
                ModuleChild::IfData(n) => {
                    if self.singleton_slot_free(dest, "IF_DATA", n.info().location(), reporter)? {
                        dest.push_if_data(n);
                    }
                }
                ModuleChild::ModCommon(n) => {
                    if self.singleton_slot_free(dest, "MOD_COMMON", n.info().location(), reporter)?
                    {
                        dest.push_mod_common(n);
                    }
                }
                ModuleChild::ModPar(n) => {
                    if self.singleton_slot_free(dest, "MOD_PAR", n.info().location(), reporter)? {
                        dest.push_mod_par(n);
                    }
                }
                ModuleChild::VariantCoding(n) => {
                    if self.singleton_slot_free(
                        dest,
                        "VARIANT_CODING",
                        n.info().location(),
                        reporter,
                    )? {
                        dest.push_variant_coding(n);
                    }
                }
                ModuleChild::Comment(n) => {
                    if self.singleton_slot_free(
                        dest,
                        "FILE_COMMENT",
                        n.info().location(),
                        reporter,
                    )? {
                        dest.push_comment(n);
                    }
                }
                ModuleChild::Unknown(block) => {
                    let location = block.info().location().clone();
                    report_warning(
                        reporter,
                        &location,
                        &format!(
                            "Unhandled element kind '{}' found in {}",
                            block.keyword, location.file
                        ),
                    );
                    dest.push_unknown(block);
                }
                ModuleChild::AxisPts(n) => self.insert(dest.add_axis_pts(n), reporter)?,
                ModuleChild::Measurement(n) => self.insert(dest.add_measurement(n), reporter)?,
                ModuleChild::Characteristic(n) => {
                    self.insert(dest.add_characteristic(n), reporter)?
                }
                ModuleChild::CompuTab(n) => self.insert(dest.add_compu_tab(n), reporter)?,
                ModuleChild::CompuVtab(n) => self.insert(dest.add_compu_vtab(n), reporter)?,
                ModuleChild::CompuVtabRange(n) => {
                    self.insert(dest.add_compu_vtab_range(n), reporter)?
                }
                ModuleChild::CompuMethod(n) => self.insert(dest.add_compu_method(n), reporter)?,
                ModuleChild::Frame(n) => self.insert(dest.add_frame(n), reporter)?,
                ModuleChild::Function(n) => self.insert(dest.add_function(n), reporter)?,
                ModuleChild::Group(n) => self.insert(dest.add_group(n), reporter)?,
                ModuleChild::RecordLayout(n) => self.insert(dest.add_record_layout(n), reporter)?,
                ModuleChild::Unit(n) => self.insert(dest.add_unit(n), reporter)?,
                ModuleChild::UserRights(n) => self.insert(dest.add_user_rights(n), reporter)?,
            }
        }
        Ok(())
    }

    /// Checks whether a single-occurrence block kind may still be inserted.
    /// A second occurrence either warns and is dropped, or aborts with both
    /// locations.
    fn singleton_slot_free(
        &self,
        dest: &Module,
        kind: &'static str,
        incoming: &Location,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<bool, MergeError> {
        let existing = match dest.first_of_kind(kind) {
            Some(child) => child.location().clone(),
            None => return Ok(true),
        };
        match self.options.conflict_policy {
            ConflictPolicy::KeepFirstAndWarn => {
                report_warning(
                    reporter,
                    incoming,
                    &format!(
                        "{} found in both {} and {}. Ignoring the version from {}",
                        kind, existing.file, incoming.file, incoming.file
                    ),
                );
                Ok(false)
            }
            ConflictPolicy::Abort => Err(MergeError::Singleton {
                kind,
                first: existing,
                second: incoming.clone(),
            }),
        }
    }

    fn insert(
        &self,
        result: Result<(), DuplicateName>,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), MergeError> {
        match result {
            Ok(()) => Ok(()),
            Err(collision) => self.on_collision(collision, reporter),
        }
    }

    fn on_collision(
        &self,
        collision: DuplicateName,
        reporter: &mut dyn ErrorReporter,
    ) -> Result<(), MergeError> {
        match self.options.conflict_policy {
            ConflictPolicy::KeepFirstAndWarn => {
                report_warning(reporter, &collision.incoming, &collision.to_string());
                Ok(())
            }
            ConflictPolicy::Abort => Err(MergeError::Collision(collision)),
        }
    }
}
