//! The Go expression subset the synthesizer emits.

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A plain type name such as `gender` or `string`.
    Named(String),
    /// `[]T`
    Slice(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn slice_of(element: TypeExpr) -> Self {
        Self::Slice(Box::new(element))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    /// An interpreted string literal; holds the unquoted value.
    Str(String),
    /// `operand.field`
    Selector { operand: Box<Expr>, field: String },
    Call { function: Box<Expr>, args: Vec<Expr> },
    /// `T{a, b, c}`
    CompositeLit { ty: TypeExpr, elements: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Builds `package.function(args...)`.
    pub fn qualified_call(package: &str, function: &str, args: Vec<Expr>) -> Self {
        Self::Call {
            function: Box::new(Self::Selector {
                operand: Box::new(Self::ident(package)),
                field: function.to_string(),
            }),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Vec<Expr>),
}
