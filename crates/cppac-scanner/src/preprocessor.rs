//! Directive filtering and `#include` discovery.
//!
//! The preprocessor does not expand macros or evaluate conditionals. It removes
//! directive lines from the token stream, so the parser only ever sees code,
//! and records the argument of each `#include` exactly as written
//! (`<stdio.h>`, `"point.h"`). Token spans keep pointing into the unmodified
//! text, which is what position queries are expressed against.

use tracing::trace;

use crate::{SyntaxKind, Token, tokenize};

/// The preprocessed view of a document.
#[derive(Clone, Debug, Default)]
pub struct PreprocessedSource {
    /// Code tokens in source order, directives removed.
    pub tokens: Vec<Token>,
    /// `#include` arguments in directive order, delimiters included.
    pub included_paths: Vec<String>,
}

pub struct Preprocessor<'a> {
    source: &'a str,
}

impl<'a> Preprocessor<'a> {
    pub fn new(source: &'a str) -> Self {
        Preprocessor { source }
    }

    pub fn process(&self) -> PreprocessedSource {
        let mut result = PreprocessedSource::default();

        for token in tokenize(self.source) {
            if token.kind != SyntaxKind::Directive {
                result.tokens.push(token);
                continue;
            }

            let text = token.text(self.source);
            if let Some(argument) = include_argument(text) {
                trace!(include = argument, "found include directive");
                result.included_paths.push(argument.to_string());
            }
        }

        result
    }
}

/// Extract the argument of an `#include` directive line.
///
/// Returns `None` for other directives. The argument is returned with its
/// delimiters; a malformed argument is returned as written so that include
/// resolution can reject it.
pub fn include_argument(directive: &str) -> Option<&str> {
    let rest = directive.trim_start().strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("include")?;
    // `#includes` is not an include directive
    if rest.starts_with(|ch: char| ch == '_' || ch.is_alphanumeric()) {
        return None;
    }
    let rest = rest.trim_start();

    let end = match rest.chars().next()? {
        '<' => rest.find('>').map(|idx| idx + 1),
        '"' => rest[1..].find('"').map(|idx| idx + 2),
        _ => None,
    };

    let argument = match end {
        Some(end) => &rest[..end],
        // Unterminated or macro-named include: keep the first word so the
        // resolver can reject it.
        None => rest.split_whitespace().next()?,
    };
    Some(argument)
}

#[cfg(test)]
#[path = "../tests/preprocessor_tests.rs"]
mod preprocessor_tests;
