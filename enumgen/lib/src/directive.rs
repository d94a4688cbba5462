//! Typed directives parsed out of documentation comments.

use std::collections::BTreeSet;
use std::fmt;

/// A recognized `@`-directive in a documentation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Directive {
    /// Requests `Values` and `String` generation for the documented type.
    EnumGenerated,
}

impl Directive {
    /// Returns the literal token, including the leading `@`.
    pub fn token(&self) -> &'static str {
        match self {
            Self::EnumGenerated => "@enumGenerated",
        }
    }

    /// Maps a token such as `@enumGenerated` to its directive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "@enumGenerated" => Some(Self::EnumGenerated),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.token())
    }
}

/// The set of directives attached to one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives(BTreeSet<Directive>);

impl Directives {
    /// Parses raw comment texts (with their `//` or `/* */` delimiters).
    ///
    /// Unknown `@` tokens are ignored.
    pub fn parse<'a, I>(comments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut directives = BTreeSet::new();

        for comment in comments {
            for token in directive_tokens(strip_delimiters(comment)) {
                if let Some(directive) = Directive::from_token(token) {
                    directives.insert(directive);
                }
            }
        }

        Self(directives)
    }

    pub fn contains(&self, directive: Directive) -> bool {
        self.0.contains(&directive)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Directive> + '_ {
        self.0.iter().copied()
    }
}

fn strip_delimiters(comment: &str) -> &str {
    let trimmed = comment.trim();
    if let Some(rest) = trimmed.strip_prefix("//") {
        return rest;
    }
    trimmed
        .strip_prefix("/*")
        .map(|rest| rest.strip_suffix("*/").unwrap_or(rest))
        .unwrap_or(trimmed)
}

/// Yields every `@identifier` token in `text`.
fn directive_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('@').filter_map(move |(start, _)| {
        let rest = &text[start + 1..];
        let length = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        (length > 0).then(|| &text[start..start + 1 + length])
    })
}
