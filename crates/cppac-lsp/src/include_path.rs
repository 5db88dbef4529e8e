//! Include directive resolution.
//!
//! `<name>` resolves under the system include root, `"name"` is taken as a
//! user path (relative paths are later resolved by the document source).
//! Anything else is unresolvable.

use once_cell::sync::Lazy;
use regex::Regex;

static INCLUDE_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:<([^<>"]+)>|"([^"]+)")$"#).expect("include pattern is valid"));

#[derive(Clone, Debug)]
pub struct IncludeResolver {
    system_root: String,
}

impl IncludeResolver {
    pub fn new(system_root: impl Into<String>) -> Self {
        IncludeResolver {
            system_root: system_root.into(),
        }
    }

    pub fn system_root(&self) -> &str {
        &self.system_root
    }

    /// Path named by an include argument (`<stdio.h>`, `"point.h"`), or
    /// `None` when the argument is malformed.
    pub fn resolve(&self, argument: &str) -> Option<String> {
        let captures = INCLUDE_ARGUMENT.captures(argument.trim())?;
        if let Some(system) = captures.get(1) {
            let root = self.system_root.trim_end_matches('/');
            return Some(format!("{root}/{}", system.as_str()));
        }
        captures.get(2).map(|user| user.as_str().to_string())
    }
}

#[cfg(test)]
#[path = "../tests/include_path_tests.rs"]
mod include_path_tests;
