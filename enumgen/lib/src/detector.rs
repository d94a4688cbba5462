use std::fmt;

use crate::syntax::{Declaration, SyntaxTree};

/// The two accessor methods generated for each enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    Values,
    String,
}

impl Accessor {
    /// The Go method name.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Values => "Values",
            Self::String => "String",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.method_name())
    }
}

/// Which accessors a type already declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExistingMethods {
    pub values: bool,
    pub string: bool,
}

impl ExistingMethods {
    pub fn has(&self, accessor: Accessor) -> bool {
        match accessor {
            Accessor::Values => self.values,
            Accessor::String => self.string,
        }
    }
}

/// Detects top-level `Values` and `String` methods whose receiver type is
/// `type_name`. Signatures are not inspected.
pub fn existing_methods(tree: &SyntaxTree, type_name: &str) -> ExistingMethods {
    let mut existing = ExistingMethods::default();

    for method in tree.declarations.iter().filter_map(Declaration::as_method) {
        if method.receiver.type_name != type_name {
            continue;
        }
        if method.name == Accessor::Values.method_name() {
            existing.values = true;
        } else if method.name == Accessor::String.method_name() {
            existing.string = true;
        }
    }

    existing
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::loader::parse_source;

    fn detect(source: &str, type_name: &str) -> ExistingMethods {
        let tree = parse_source(source, Path::new("detect.go")).expect("source should parse");
        existing_methods(&tree, type_name)
    }

    #[test]
    fn reports_nothing_without_methods() {
        let existing = detect("package enum\n\ntype gender string\n", "gender");
        assert_eq!(existing, ExistingMethods::default());
    }

    #[test]
    fn detects_both_accessors_regardless_of_receiver_name() {
        let existing = detect(
            "package enum\n\nfunc (x gender) Values() int { return 0 }\n\nfunc (gender) String() string { return \"\" }\n",
            "gender",
        );
        assert!(existing.has(Accessor::Values));
        assert!(existing.has(Accessor::String));
    }

    #[test]
    fn treats_pointer_receivers_as_the_base_type() {
        let existing = detect(
            "package enum\n\nfunc (g *gender) String() string { return \"\" }\n",
            "gender",
        );
        assert_eq!(
            existing,
            ExistingMethods {
                values: false,
                string: true,
            }
        );
    }

    #[test]
    fn ignores_other_receivers_and_functions() {
        let existing = detect(
            "package enum\n\nfunc (c color) Values() []color { return nil }\n\nfunc String() string { return \"\" }\n",
            "gender",
        );
        assert_eq!(existing, ExistingMethods::default());
    }
}
