use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while generating enum accessors.
#[derive(Debug, Error)]
pub enum EnumGenError {
    #[error("Failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load the Go grammar: {source}")]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("Failed to parse `{path}` at {line}:{column}: {cause}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        cause: String,
    },

    #[error("Failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A method reported as existing could not be located when replacing it.
    #[error("Method `{method}` on `{type_name}` was detected but could not be found for replacement")]
    InconsistentState { type_name: String, method: String },
}
