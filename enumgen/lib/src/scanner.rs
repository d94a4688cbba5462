use crate::directive::Directive;
use crate::syntax::{Declaration, SyntaxTree};

/// A top-level type marked with `@enumGenerated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedType {
    pub name: String,
    /// Position of the declaring `type` group in the top-level sequence.
    pub index: usize,
}

/// Lists the marked types among top-level declarations, in source order.
///
/// Every spec of a group whose documentation carries the marker is marked,
/// as is any individual spec documented with it.
pub fn marked_types(tree: &SyntaxTree) -> Vec<MarkedType> {
    tree.declarations
        .iter()
        .enumerate()
        .filter_map(|(index, declaration)| match declaration {
            Declaration::Type(ty) => Some((index, ty)),
            _ => None,
        })
        .flat_map(|(index, ty)| {
            ty.specs
                .iter()
                .filter(|spec| spec.has_directive(&ty.directives, Directive::EnumGenerated))
                .map(move |spec| MarkedType {
                    name: spec.name.clone(),
                    index,
                })
        })
        .collect()
}
