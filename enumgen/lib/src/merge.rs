use std::fmt;

use crate::error::EnumGenError;
use crate::syntax::{Declaration, MethodDeclaration};

/// What happened to a synthesized method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// An existing method was overwritten in its slot.
    Replaced { index: usize },
    /// The method was appended to the declaration list.
    Inserted { index: usize },
}

impl MergeAction {
    pub fn index(&self) -> usize {
        match self {
            Self::Replaced { index } | Self::Inserted { index } => *index,
        }
    }
}

impl fmt::Display for MergeAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replaced { .. } => formatter.write_str("replaced"),
            Self::Inserted { .. } => formatter.write_str("inserted"),
        }
    }
}

/// Overwrites the first top-level method with the same receiver type and
/// name as `method`, returning its index. The replaced method's
/// documentation carries over when `method` has none.
///
/// ## Errors
/// Returns [`EnumGenError::InconsistentState`] if no such method exists.
pub fn replace_method(
    declarations: &mut [Declaration],
    mut method: MethodDeclaration,
) -> Result<usize, EnumGenError> {
    let index = declarations
        .iter()
        .position(|declaration| {
            declaration
                .as_method()
                .is_some_and(|existing| existing.is(&method.receiver.type_name, &method.name))
        })
        .ok_or_else(|| EnumGenError::InconsistentState {
            type_name: method.receiver.type_name.clone(),
            method: method.name.clone(),
        })?;

    if method.doc.is_none() {
        method.doc = declarations[index]
            .as_method()
            .and_then(|existing| existing.doc.clone());
    }

    declarations[index] = Declaration::Method(method);
    Ok(index)
}

/// Replaces the existing method when `exists`, otherwise appends it.
///
/// ## Errors
/// Returns [`EnumGenError::InconsistentState`] if `exists` is set but no
/// matching method is found; the method is never appended in that case.
pub fn merge_method(
    declarations: &mut Vec<Declaration>,
    exists: bool,
    method: MethodDeclaration,
) -> Result<MergeAction, EnumGenError> {
    if exists {
        let index = replace_method(declarations, method)?;
        return Ok(MergeAction::Replaced { index });
    }

    declarations.push(Declaration::Method(method));
    Ok(MergeAction::Inserted {
        index: declarations.len() - 1,
    })
}
