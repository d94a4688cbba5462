use super::{
    ConstDeclaration, Declaration, MethodBody, MethodDeclaration, OtherDeclaration, SyntaxTree,
    TypeDeclaration,
};

/// Receives every declaration of a tree, nested constant groups included.
///
/// All methods default to doing nothing so implementors only override the
/// variants they care about.
pub trait Visitor {
    fn visit_type(&mut self, _declaration: &TypeDeclaration) {}

    fn visit_const(&mut self, _declaration: &ConstDeclaration) {}

    fn visit_method(&mut self, _declaration: &MethodDeclaration) {}

    fn visit_other(&mut self, _declaration: &OtherDeclaration) {}
}

/// Walks the whole tree in pre-order.
pub fn walk<V: Visitor + ?Sized>(tree: &SyntaxTree, visitor: &mut V) {
    for declaration in &tree.declarations {
        walk_declaration(declaration, visitor);
    }
}

/// Visits `declaration`, then any constant groups nested inside it.
pub fn walk_declaration<V: Visitor + ?Sized>(declaration: &Declaration, visitor: &mut V) {
    match declaration {
        Declaration::Type(declaration) => visitor.visit_type(declaration),
        Declaration::Const(declaration) => visitor.visit_const(declaration),
        Declaration::Method(declaration) => {
            visitor.visit_method(declaration);
            if let MethodBody::Parsed { nested, .. } = &declaration.body {
                for constant in nested {
                    visitor.visit_const(constant);
                }
            }
        }
        Declaration::Other(declaration) => {
            visitor.visit_other(declaration);
            for constant in &declaration.nested {
                visitor.visit_const(constant);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ConstSpec, Receiver};

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        fn visit_const(&mut self, declaration: &ConstDeclaration) {
            self.0.push(format!("const {}", declaration.text));
        }

        fn visit_method(&mut self, declaration: &MethodDeclaration) {
            self.0.push(format!("method {}", declaration.name));
        }

        fn visit_other(&mut self, declaration: &OtherDeclaration) {
            self.0.push(format!("other {}", declaration.text));
        }
    }

    fn constant(text: &str) -> ConstDeclaration {
        ConstDeclaration {
            specs: vec![ConstSpec {
                names: vec![text.to_string()],
                type_name: None,
            }],
            text: text.to_string(),
        }
    }

    #[test]
    fn visits_nested_constants_after_their_parent() {
        let tree = SyntaxTree {
            declarations: vec![
                Declaration::Other(OtherDeclaration {
                    text: "func main()".to_string(),
                    nested: vec![constant("a"), constant("b")],
                }),
                Declaration::Method(MethodDeclaration {
                    doc: None,
                    receiver: Receiver {
                        name: Some("g".to_string()),
                        type_name: "gender".to_string(),
                        pointer: false,
                    },
                    name: "Label".to_string(),
                    body: MethodBody::Parsed {
                        text: String::new(),
                        nested: vec![constant("c")],
                    },
                }),
                Declaration::Const(constant("d")),
            ],
        };

        let mut trace = Trace::default();
        walk(&tree, &mut trace);

        assert_eq!(
            trace.0,
            vec![
                "other func main()",
                "const a",
                "const b",
                "method Label",
                "const c",
                "const d",
            ]
        );
    }
}
