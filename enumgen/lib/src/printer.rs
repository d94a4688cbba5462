//! Renders a [`SyntaxTree`] back to canonical Go source.
//!
//! Parsed declarations are written from their retained text. Synthesized
//! methods follow gofmt layout: tab indentation and one composite literal
//! element per line with a trailing comma.

use crate::syntax::{
    Declaration, Expr, MethodBody, MethodDeclaration, Statement, SyntaxTree, TypeExpr,
};

/// Renders the whole file: declarations separated by one blank line and a
/// single trailing newline.
pub fn render(tree: &SyntaxTree) -> String {
    let mut output = String::new();

    for declaration in &tree.declarations {
        if !output.is_empty() {
            output.push_str("\n\n");
        }
        render_declaration(declaration, &mut output);
    }

    if !output.is_empty() {
        output.push('\n');
    }
    output
}

pub fn render_declaration(declaration: &Declaration, output: &mut String) {
    match declaration {
        Declaration::Type(declaration) => output.push_str(declaration.text.trim_end()),
        Declaration::Const(declaration) => output.push_str(declaration.text.trim_end()),
        Declaration::Other(declaration) => output.push_str(declaration.text.trim_end()),
        Declaration::Method(method) => render_method(method, output),
    }
}

fn render_method(method: &MethodDeclaration, output: &mut String) {
    let (result, statements) = match &method.body {
        MethodBody::Parsed { text, .. } => {
            output.push_str(text.trim_end());
            return;
        }
        MethodBody::Synthesized { result, statements } => (result, statements),
    };

    if let Some(doc) = &method.doc {
        output.push_str(doc.trim_end());
        output.push('\n');
    }

    let receiver = &method.receiver;
    output.push_str("func (");
    if let Some(name) = &receiver.name {
        output.push_str(name);
        output.push(' ');
    }
    output.push_str(&receiver.type_name);
    output.push_str(") ");
    output.push_str(&method.name);
    output.push_str("() ");
    render_type(result, output);
    output.push_str(" {\n");
    for statement in statements {
        render_statement(statement, 1, output);
    }
    output.push('}');
}

fn render_statement(statement: &Statement, depth: usize, output: &mut String) {
    indent(depth, output);
    match statement {
        Statement::Return(values) => {
            output.push_str("return");
            for (position, value) in values.iter().enumerate() {
                output.push_str(if position == 0 { " " } else { ", " });
                render_expr(value, depth, output);
            }
        }
    }
    output.push('\n');
}

fn render_expr(expr: &Expr, depth: usize, output: &mut String) {
    match expr {
        Expr::Ident(name) => output.push_str(name),
        Expr::Str(value) => quote(value, output),
        Expr::Selector { operand, field } => {
            render_expr(operand, depth, output);
            output.push('.');
            output.push_str(field);
        }
        Expr::Call { function, args } => {
            render_expr(function, depth, output);
            output.push('(');
            for (position, arg) in args.iter().enumerate() {
                if position > 0 {
                    output.push_str(", ");
                }
                render_expr(arg, depth, output);
            }
            output.push(')');
        }
        Expr::CompositeLit { ty, elements } => {
            render_type(ty, output);
            output.push('{');
            if !elements.is_empty() {
                output.push('\n');
                for element in elements {
                    indent(depth + 1, output);
                    render_expr(element, depth + 1, output);
                    output.push_str(",\n");
                }
                indent(depth, output);
            }
            output.push('}');
        }
    }
}

fn render_type(ty: &TypeExpr, output: &mut String) {
    match ty {
        TypeExpr::Named(name) => output.push_str(name),
        TypeExpr::Slice(element) => {
            output.push_str("[]");
            render_type(element, output);
        }
    }
}

/// Writes a Go interpreted string literal.
fn quote(value: &str, output: &mut String) {
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
}

fn indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push('\t');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize;
    use crate::syntax::OtherDeclaration;

    fn method_text(method: &MethodDeclaration) -> String {
        let mut output = String::new();
        render_method(method, &mut output);
        output
    }

    #[test]
    fn renders_values_method_one_element_per_line() {
        let values = ["male", "female", "unknown"].map(String::from);
        let accessors = synthesize("gender", &values);

        assert_eq!(
            method_text(&accessors.values),
            "func (g gender) Values() []gender {\n\treturn []gender{\n\t\tmale,\n\t\tfemale,\n\t\tunknown,\n\t}\n}"
        );
    }

    #[test]
    fn renders_empty_values_literal_inline() {
        let accessors = synthesize("level", &[]);

        assert_eq!(
            method_text(&accessors.values),
            "func (l level) Values() []level {\n\treturn []level{}\n}"
        );
    }

    #[test]
    fn renders_string_method() {
        let accessors = synthesize("gender", &[]);

        assert_eq!(
            method_text(&accessors.string),
            "func (g gender) String() string {\n\treturn fmt.Sprintf(\"%v\", g)\n}"
        );
    }

    #[test]
    fn renders_documentation_above_synthesized_methods() {
        let mut method = synthesize("gender", &[]).string;
        method.doc = Some("// String describes the gender.".to_string());

        assert_eq!(
            method_text(&method),
            "// String describes the gender.\nfunc (g gender) String() string {\n\treturn fmt.Sprintf(\"%v\", g)\n}"
        );
    }

    #[test]
    fn escapes_string_literals() {
        let mut output = String::new();
        quote("a \"b\"\\\n", &mut output);
        assert_eq!(output, r#""a \"b\"\\\n""#);
    }

    #[test]
    fn escapes_control_characters_as_unicode() {
        let mut output = String::new();
        quote("bell\u{7}", &mut output);
        assert_eq!(output, r#""bell\u0007""#);
    }

    #[test]
    fn separates_declarations_with_blank_lines() {
        let tree = SyntaxTree {
            declarations: vec![
                Declaration::Other(OtherDeclaration {
                    text: "package enum".to_string(),
                    nested: Vec::new(),
                }),
                Declaration::Other(OtherDeclaration {
                    text: "import \"fmt\"\n".to_string(),
                    nested: Vec::new(),
                }),
            ],
        };

        assert_eq!(render(&tree), "package enum\n\nimport \"fmt\"\n");
    }

    #[test]
    fn renders_empty_tree_as_empty_text() {
        assert_eq!(render(&SyntaxTree::default()), "");
    }
}
