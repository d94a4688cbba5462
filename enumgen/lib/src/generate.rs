//! Drives the pipeline: parse, scan, then per marked type collect, detect,
//! synthesize and merge; finally render and write.

use std::path::Path;

use tracing::{debug, info, info_span, instrument};

use crate::collector::collect_values;
use crate::detector::{Accessor, existing_methods};
use crate::error::EnumGenError;
use crate::loader::{parse_source, read_source};
use crate::merge::{MergeAction, merge_method};
use crate::printer::render;
use crate::scanner::{MarkedType, marked_types};
use crate::syntax::{MethodDeclaration, SyntaxTree};
use crate::synth::synthesize;
use crate::writer::write_source;

/// Placeholder path used in errors for in-memory sources.
const IN_MEMORY: &str = "<memory>";

/// The outcome for one marked type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    pub type_name: String,
    pub values: Vec<String>,
    pub values_method: MergeAction,
    pub string_method: MergeAction,
}

/// The outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub types: Vec<TypeReport>,
    /// Whether the rendered text differs from the input.
    pub changed: bool,
}

/// Rendered source plus what was done to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub source: String,
    pub report: GenerationReport,
}

/// Generates accessors for every marked type in the file at `path` and
/// rewrites the file.
///
/// ## Errors
/// Returns an error if the file cannot be read, parsed or written, or if the
/// merge finds the tree in an inconsistent state. Nothing is written unless
/// every step before the write succeeded.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn generate<P: AsRef<Path>>(path: P) -> Result<GenerationReport, EnumGenError> {
    let path = path.as_ref();
    let generated = render_file(path)?;

    write_source(path, &generated.source)?;

    info!(
        types = generated.report.types.len(),
        "Code generation completed successfully"
    );
    Ok(generated.report)
}

/// Runs the pipeline on the file at `path` without writing it back.
///
/// ## Errors
/// Returns an error if the file cannot be read or parsed, or on an
/// inconsistent merge.
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<Generated, EnumGenError> {
    let path = path.as_ref();
    let original = read_source(path)?;
    run(&original, path)
}

/// Runs the pipeline on in-memory source text.
///
/// ## Errors
/// Returns an error if the source does not parse, or on an inconsistent merge.
pub fn generate_source(source: &str) -> Result<Generated, EnumGenError> {
    run(source, Path::new(IN_MEMORY))
}

fn run(original: &str, origin: &Path) -> Result<Generated, EnumGenError> {
    let mut tree = parse_source(original, origin)?;
    let types = apply(&mut tree)?;
    let source = render(&tree);
    let changed = source != original;

    debug!(changed, "Rendered source");

    Ok(Generated {
        source,
        report: GenerationReport { types, changed },
    })
}

/// Applies generation for every marked type to `tree` in place.
///
/// ## Errors
/// Returns [`EnumGenError::InconsistentState`] if a detected method cannot be
/// found for replacement. The run stops at the first failing type.
pub fn apply(tree: &mut SyntaxTree) -> Result<Vec<TypeReport>, EnumGenError> {
    let marked = marked_types(tree);
    let mut reports = Vec::with_capacity(marked.len());

    for MarkedType { name, .. } in marked {
        let span = info_span!("enum_type", type_name = %name);
        let _guard = span.enter();
        info!("Found enum type");

        let values = collect_values(tree, &name);
        info!(?values, "Collected enum values");

        let existing = existing_methods(tree, &name);
        let accessors = synthesize(&name, &values);

        let values_method = merge_accessor(
            tree,
            Accessor::Values,
            existing.has(Accessor::Values),
            accessors.values,
        )?;
        let string_method = merge_accessor(
            tree,
            Accessor::String,
            existing.has(Accessor::String),
            accessors.string,
        )?;

        reports.push(TypeReport {
            type_name: name,
            values,
            values_method,
            string_method,
        });
    }

    Ok(reports)
}

fn merge_accessor(
    tree: &mut SyntaxTree,
    accessor: Accessor,
    exists: bool,
    method: MethodDeclaration,
) -> Result<MergeAction, EnumGenError> {
    let action = merge_method(&mut tree.declarations, exists, method)?;
    match action {
        MergeAction::Replaced { index } => {
            info!(method = %accessor, index, "Replacing existing method")
        }
        MergeAction::Inserted { index } => info!(method = %accessor, index, "Inserting method"),
    }
    Ok(action)
}
