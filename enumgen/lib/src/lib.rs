//! Generates `Values` and `String` accessors for Go types documented with
//! `@enumGenerated`.
//!
//! ```no_run
//! let report = enumgen_lib::generate("enum.go")?;
//! for ty in &report.types {
//!     println!("{}: {} values", ty.type_name, ty.values.len());
//! }
//! # Ok::<(), enumgen_lib::EnumGenError>(())
//! ```

pub mod collector;
pub mod detector;
pub mod directive;
pub mod error;
pub mod generate;
pub mod loader;
pub mod merge;
pub mod printer;
pub mod scanner;
pub mod synth;
pub mod syntax;
pub mod writer;

pub use detector::{Accessor, ExistingMethods};
pub use directive::{Directive, Directives};
pub use error::EnumGenError;
pub use generate::{
    GenerationReport, Generated, TypeReport, apply, generate, generate_source, render_file,
};
pub use merge::MergeAction;
pub use syntax::SyntaxTree;
