use crate::syntax::{ConstDeclaration, SyntaxTree, Visitor, walk};

/// Collects constant names declared with a given type.
struct ValueCollector<'a> {
    type_name: &'a str,
    values: Vec<String>,
}

impl Visitor for ValueCollector<'_> {
    fn visit_const(&mut self, declaration: &ConstDeclaration) {
        for spec in &declaration.specs {
            if spec.type_name.as_deref() != Some(self.type_name) {
                continue;
            }
            // `_` declares nothing and cannot be referenced.
            self.values.extend(
                spec.names
                    .iter()
                    .filter(|name| name.as_str() != "_")
                    .cloned(),
            );
        }
    }
}

/// Returns every constant whose declared type is exactly `type_name`, in
/// pre-order across the whole tree.
///
/// Duplicates are kept: a name declared in two groups appears twice.
pub fn collect_values(tree: &SyntaxTree, type_name: &str) -> Vec<String> {
    let mut collector = ValueCollector {
        type_name,
        values: Vec::new(),
    };
    walk(tree, &mut collector);
    collector.values
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::loader::parse_source;

    fn values(source: &str, type_name: &str) -> Vec<String> {
        let tree = parse_source(source, Path::new("collect.go")).expect("source should parse");
        collect_values(&tree, type_name)
    }

    #[test]
    fn collects_in_declaration_order() {
        let collected = values(
            "package enum\n\nconst (\n\tmale gender = \"male\"\n\tfemale gender = \"female\"\n\tunknown gender = \"unknown\"\n)\n",
            "gender",
        );
        assert_eq!(collected, vec!["male", "female", "unknown"]);
    }

    #[test]
    fn collects_across_groups_and_function_bodies() {
        let collected = values(
            "package enum\n\nconst a gender = 1\n\nfunc setup() {\n\tconst b gender = 2\n}\n\nconst (\n\tc, d gender = 3, 4\n)\n",
            "gender",
        );
        assert_eq!(collected, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_duplicates_from_separate_groups() {
        let collected = values(
            "package enum\n\nconst red color = 1\n\nfunc shadow() {\n\tconst red color = 2\n}\n",
            "color",
        );
        assert_eq!(collected, vec!["red", "red"]);
    }

    #[test]
    fn ignores_other_and_qualified_types() {
        let collected = values(
            "package enum\n\nconst (\n\tx int = 1\n\ty other.gender = 2\n\tz = 3\n)\n",
            "gender",
        );
        assert!(collected.is_empty());
    }

    #[test]
    fn skips_blank_identifiers() {
        let collected = values(
            "package enum\n\nconst (\n\t_ level = iota\n\tlow level = 1\n)\n",
            "level",
        );
        assert_eq!(collected, vec!["low"]);
    }
}
