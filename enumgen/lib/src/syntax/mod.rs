//! Owned syntax tree for one Go source file.
//!
//! Declarations parsed from the input keep their exact source text so the
//! printer can re-emit them untouched. Only synthesized methods carry a
//! structured body.

pub mod expr;
pub mod visit;

pub use expr::{Expr, Statement, TypeExpr};
pub use visit::{Visitor, walk, walk_declaration};

use crate::directive::{Directive, Directives};

/// The parsed file: an ordered, index-addressable list of top-level declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub declarations: Vec<Declaration>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeDeclaration),
    Const(ConstDeclaration),
    Method(MethodDeclaration),
    /// Anything not inspected: package clause, imports, vars, functions,
    /// free-standing comments.
    Other(OtherDeclaration),
}

impl Declaration {
    /// Returns the method declaration when this is one.
    pub fn as_method(&self) -> Option<&MethodDeclaration> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// A `type` keyword with one spec or a parenthesized group of specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Directives from the documentation above the `type` keyword.
    pub directives: Directives,
    pub specs: Vec<TypeSpec>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    /// Directives from documentation directly above the spec inside a group.
    pub directives: Directives,
}

impl TypeSpec {
    /// True when either the spec or its enclosing group carries `directive`.
    pub fn has_directive(&self, group: &Directives, directive: Directive) -> bool {
        self.directives.contains(directive) || group.contains(directive)
    }
}

/// A `const` keyword with one spec or a parenthesized group of specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDeclaration {
    pub specs: Vec<ConstSpec>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstSpec {
    pub names: Vec<String>,
    /// Source text of the declared type, absent for untyped or implicitly
    /// repeated specs.
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    /// Documentation comments directly above the method, verbatim.
    pub doc: Option<String>,
    pub receiver: Receiver,
    pub name: String,
    pub body: MethodBody,
}

impl MethodDeclaration {
    /// True when the receiver type is `type_name` and the method is `name`.
    pub fn is(&self, type_name: &str, name: &str) -> bool {
        self.receiver.type_name == type_name && self.name == name
    }
}

/// The receiver binding of a method, e.g. `(g *gender)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub name: Option<String>,
    /// The receiver type without a leading `*`.
    pub type_name: String,
    pub pointer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// A method read from the input, kept verbatim.
    Parsed {
        text: String,
        /// Constant groups declared anywhere inside the method, in pre-order.
        nested: Vec<ConstDeclaration>,
    },
    /// A method built by the synthesizer: parameterless, with a value
    /// receiver and a single result.
    Synthesized {
        result: TypeExpr,
        statements: Vec<Statement>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDeclaration {
    pub text: String,
    /// Constant groups declared anywhere inside, in pre-order.
    pub nested: Vec<ConstDeclaration>,
}
