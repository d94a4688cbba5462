//! Builds the `Values` and `String` accessors for an enum type.

use crate::detector::Accessor;
use crate::syntax::{Expr, MethodBody, MethodDeclaration, Receiver, Statement, TypeExpr};

/// The accessors synthesized for one type, sharing a receiver name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessors {
    pub values: MethodDeclaration,
    pub string: MethodDeclaration,
}

/// Builds both accessors for `type_name` and its ordered value names.
pub fn synthesize(type_name: &str, values: &[String]) -> Accessors {
    let receiver = receiver_name(type_name, values);

    Accessors {
        values: values_method(type_name, &receiver, values),
        string: string_method(type_name, &receiver),
    }
}

/// `func (r T) Values() []T { return []T{v1, v2, ...} }`
pub fn values_method(type_name: &str, receiver: &str, values: &[String]) -> MethodDeclaration {
    let slice = TypeExpr::slice_of(TypeExpr::named(type_name));

    method(
        type_name,
        receiver,
        Accessor::Values,
        slice.clone(),
        Expr::CompositeLit {
            ty: slice,
            elements: values.iter().map(|value| Expr::ident(value.as_str())).collect(),
        },
    )
}

/// `func (r T) String() string { return fmt.Sprintf("%v", r) }`
pub fn string_method(type_name: &str, receiver: &str) -> MethodDeclaration {
    method(
        type_name,
        receiver,
        Accessor::String,
        TypeExpr::named("string"),
        Expr::qualified_call(
            "fmt",
            "Sprintf",
            vec![Expr::Str("%v".to_string()), Expr::ident(receiver)],
        ),
    )
}

fn method(
    type_name: &str,
    receiver: &str,
    accessor: Accessor,
    result: TypeExpr,
    returned: Expr,
) -> MethodDeclaration {
    MethodDeclaration {
        doc: None,
        receiver: Receiver {
            name: Some(receiver.to_string()),
            type_name: type_name.to_string(),
            pointer: false,
        },
        name: accessor.method_name().to_string(),
        body: MethodBody::Synthesized {
            result,
            statements: vec![Statement::Return(vec![returned])],
        },
    }
}

/// Lower-cased first letter of the type, suffixed with `_` until it no
/// longer shadows one of the values.
fn receiver_name(type_name: &str, values: &[String]) -> String {
    let mut name = type_name
        .chars()
        .find(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect::<String>())
        .unwrap_or_else(|| "v".to_string());

    while values.iter().any(|value| *value == name) {
        name.push('_');
    }

    name
}
