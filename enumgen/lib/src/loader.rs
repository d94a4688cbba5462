//! Parses Go source text into the owned [`SyntaxTree`].

use std::path::Path;

use tracing::debug;
use tree_sitter::{Node, Parser, Point};

use crate::directive::Directives;
use crate::error::EnumGenError;
use crate::syntax::{
    ConstDeclaration, ConstSpec, Declaration, MethodBody, MethodDeclaration, OtherDeclaration,
    Receiver, SyntaxTree, TypeDeclaration, TypeSpec,
};

/// Reads a source file from disk.
///
/// ## Errors
/// Returns [`EnumGenError::Read`] if the file cannot be read as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, EnumGenError> {
    std::fs::read_to_string(path).map_err(|source| EnumGenError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses Go source text, keeping comments attached to their declarations.
///
/// `path` is only used to give errors context.
///
/// ## Errors
/// Returns [`EnumGenError::Parse`] pointing at the first syntax error, or
/// [`EnumGenError::Grammar`] if the Go grammar cannot be loaded.
pub fn parse_source(source: &str, path: &Path) -> Result<SyntaxTree, EnumGenError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|source| EnumGenError::Grammar { source })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| EnumGenError::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
            cause: "the parser produced no syntax tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        let node = first_error(root).unwrap_or(root);
        let position = node.start_position();
        return Err(EnumGenError::Parse {
            path: path.to_path_buf(),
            line: position.row.saturating_add(1),
            column: position.column.saturating_add(1),
            cause: describe_error(node, source),
        });
    }

    if let Some((node, cause)) = misplaced_top_level(root) {
        let position = node.map_or(Point { row: 0, column: 0 }, |node| node.start_position());
        return Err(EnumGenError::Parse {
            path: path.to_path_buf(),
            line: position.row.saturating_add(1),
            column: position.column.saturating_add(1),
            cause,
        });
    }

    let lowering = Lowering { source };
    let declarations = lowering
        .chunks(root)
        .into_iter()
        .map(|chunk| lowering.lower(chunk))
        .collect::<Vec<_>>();

    debug!(count = declarations.len(), "parsed top-level declarations");

    Ok(SyntaxTree { declarations })
}

/// Finds the first `ERROR` or `MISSING` node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }

        let mut cursor = node.walk();
        let children = node.children(&mut cursor).collect::<Vec<_>>();
        stack.extend(children.into_iter().rev());
    }

    None
}

/// Finds what the grammar accepts at the top level but Go does not: a
/// missing or repeated package clause, or a statement outside a function.
///
/// The node is `None` when the file has no package clause at all.
fn misplaced_top_level(root: Node<'_>) -> Option<(Option<Node<'_>>, String)> {
    let mut seen_package = false;
    let mut cursor = root.walk();

    for child in root.named_children(&mut cursor) {
        let cause = match child.kind() {
            "comment" => continue,
            "package_clause" if !seen_package => {
                seen_package = true;
                continue;
            }
            "package_clause" => "duplicate package clause".to_string(),
            _ if !seen_package => "expected `package` clause".to_string(),
            "import_declaration" | "function_declaration" | "method_declaration"
            | "type_declaration" | "const_declaration" | "var_declaration" => continue,
            kind => format!("unexpected `{kind}` outside a function body"),
        };
        return Some((Some(child), cause));
    }

    (!seen_package).then(|| (None, "missing package clause".to_string()))
}

fn describe_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing `{}`", node.kind());
    }

    let snippet = source
        .get(node.byte_range())
        .and_then(|text| text.lines().next())
        .map(str::trim)
        .unwrap_or_default();

    if snippet.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected `{}`", snippet.chars().take(40).collect::<String>())
    }
}

/// True when `lower` starts on the line `upper` ends on, or the one after.
fn directly_above(upper: Node<'_>, lower: Node<'_>) -> bool {
    lower.start_position().row <= upper.end_position().row.saturating_add(1)
}

/// A top-level unit before lowering.
enum Chunk<'t> {
    /// A comment group not attached to any declaration.
    Comments(Vec<Node<'t>>),
    Declaration {
        doc: Vec<Node<'t>>,
        node: Node<'t>,
        /// The node the declaration's text ends with; a trailing comment on
        /// the declaration's last line extends it.
        last: Node<'t>,
    },
}

struct Lowering<'s> {
    source: &'s str,
}

impl Lowering<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    fn span(&self, first: Node<'_>, last: Node<'_>) -> String {
        self.source
            .get(first.start_byte()..last.end_byte())
            .unwrap_or_default()
            .to_string()
    }

    fn directives(&self, comments: &[Node<'_>]) -> Directives {
        Directives::parse(comments.iter().map(|comment| self.text(*comment)))
    }

    /// Groups the root's children into declarations with their documentation.
    fn chunks<'t>(&self, root: Node<'t>) -> Vec<Chunk<'t>> {
        let mut chunks = Vec::new();
        let mut comments: Vec<Node<'t>> = Vec::new();
        let mut cursor = root.walk();

        for child in root.named_children(&mut cursor) {
            if child.kind() != "comment" {
                let attached = comments
                    .last()
                    .is_some_and(|last| directly_above(*last, child));
                let doc = if attached {
                    std::mem::take(&mut comments)
                } else {
                    if !comments.is_empty() {
                        chunks.push(Chunk::Comments(std::mem::take(&mut comments)));
                    }
                    Vec::new()
                };

                chunks.push(Chunk::Declaration {
                    doc,
                    node: child,
                    last: child,
                });
                continue;
            }

            if comments.is_empty() {
                if let Some(Chunk::Declaration { last, .. }) = chunks.last_mut() {
                    if last.end_position().row == child.start_position().row {
                        *last = child;
                        continue;
                    }
                }
            }

            if comments
                .last()
                .is_some_and(|last| !directly_above(*last, child))
            {
                chunks.push(Chunk::Comments(std::mem::take(&mut comments)));
            }
            comments.push(child);
        }

        if !comments.is_empty() {
            chunks.push(Chunk::Comments(comments));
        }

        chunks
    }

    fn lower(&self, chunk: Chunk<'_>) -> Declaration {
        let (doc, node, last) = match chunk {
            Chunk::Comments(comments) => {
                let text = match (comments.first(), comments.last()) {
                    (Some(first), Some(last)) => self.span(*first, *last),
                    _ => String::new(),
                };
                return Declaration::Other(OtherDeclaration {
                    text,
                    nested: Vec::new(),
                });
            }
            Chunk::Declaration { doc, node, last } => (doc, node, last),
        };

        let text = self.span(doc.first().copied().unwrap_or(node), last);

        match node.kind() {
            "type_declaration" => Declaration::Type(TypeDeclaration {
                directives: self.directives(&doc),
                specs: self.type_specs(node),
                text,
            }),
            "const_declaration" => Declaration::Const(ConstDeclaration {
                specs: self.const_specs(node),
                text,
            }),
            "method_declaration" => match self.method_header(node) {
                Some((receiver, name)) => Declaration::Method(MethodDeclaration {
                    doc: match (doc.first(), doc.last()) {
                        (Some(first), Some(last)) => Some(self.span(*first, *last)),
                        _ => None,
                    },
                    receiver,
                    name,
                    body: MethodBody::Parsed {
                        text,
                        nested: self.nested_constants(node),
                    },
                }),
                None => Declaration::Other(OtherDeclaration {
                    text,
                    nested: self.nested_constants(node),
                }),
            },
            _ => Declaration::Other(OtherDeclaration {
                text,
                nested: self.nested_constants(node),
            }),
        }
    }

    fn type_specs(&self, node: Node<'_>) -> Vec<TypeSpec> {
        let mut specs = Vec::new();
        let mut doc: Vec<Node<'_>> = Vec::new();
        let mut previous_end_row = None;
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    if previous_end_row == Some(child.start_position().row) {
                        continue;
                    }
                    if doc.last().is_some_and(|last| !directly_above(*last, child)) {
                        doc.clear();
                    }
                    doc.push(child);
                }
                "type_spec" | "type_alias" => {
                    let attached = doc.last().is_some_and(|last| directly_above(*last, child));
                    let directives = if attached {
                        self.directives(&doc)
                    } else {
                        Directives::default()
                    };
                    doc.clear();
                    previous_end_row = Some(child.end_position().row);

                    if let Some(name) = child.child_by_field_name("name") {
                        specs.push(TypeSpec {
                            name: self.text(name).to_string(),
                            directives,
                        });
                    }
                }
                _ => doc.clear(),
            }
        }

        specs
    }

    fn const_specs(&self, node: Node<'_>) -> Vec<ConstSpec> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() == "const_spec")
            .map(|spec| self.const_spec(spec))
            .collect()
    }

    fn const_spec(&self, spec: Node<'_>) -> ConstSpec {
        let mut cursor = spec.walk();
        let names = spec
            .children_by_field_name("name", &mut cursor)
            .filter(|name| name.kind() == "identifier")
            .map(|name| self.text(name).to_string())
            .collect();

        ConstSpec {
            names,
            type_name: spec
                .child_by_field_name("type")
                .map(|ty| self.text(ty).to_string()),
        }
    }

    /// Extracts the receiver binding and method name.
    fn method_header(&self, node: Node<'_>) -> Option<(Receiver, String)> {
        let receivers = node.child_by_field_name("receiver")?;
        let mut cursor = receivers.walk();
        let parameter = receivers
            .named_children(&mut cursor)
            .find(|child| child.kind() == "parameter_declaration")?;

        let binding = parameter
            .child_by_field_name("name")
            .map(|name| self.text(name).to_string());
        let ty = parameter.child_by_field_name("type")?;
        let (ty, pointer) = if ty.kind() == "pointer_type" {
            let mut inner_cursor = ty.walk();
            let inner = ty.named_children(&mut inner_cursor).next()?;
            (inner, true)
        } else {
            (ty, false)
        };

        let name = self.text(node.child_by_field_name("name")?).to_string();

        Some((
            Receiver {
                name: binding,
                type_name: self.text(ty).to_string(),
                pointer,
            },
            name,
        ))
    }

    /// Lowers every constant group below `node`, in pre-order.
    fn nested_constants(&self, node: Node<'_>) -> Vec<ConstDeclaration> {
        let mut found = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if current.kind() == "const_declaration" && current != node {
                found.push(ConstDeclaration {
                    specs: self.const_specs(current),
                    text: self.text(current).to_string(),
                });
                continue;
            }

            let mut cursor = current.walk();
            let children = current.named_children(&mut cursor).collect::<Vec<_>>();
            stack.extend(children.into_iter().rev());
        }

        found
    }
}
