use colored::Colorize;
use serde::Serialize;

use cppac_lsp::Suggestion;

/// How an entry of the include tree was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IncludeStatus {
    Loaded,
    /// The include points at a document the source could not supply.
    Missing,
    /// The document is already on the include path above this entry.
    Cycle,
    /// The document's includes were listed at an earlier occurrence.
    Repeated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IncludeEntry {
    pub depth: usize,
    pub path: String,
    pub status: IncludeStatus,
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One suggestion per line, with the already typed part highlighted.
    pub fn render_suggestions(&self, suggestions: &[Suggestion]) -> String {
        if suggestions.is_empty() {
            return self.dimmed("no suggestions");
        }

        let mut out = String::new();
        for suggestion in suggestions {
            let split = suggestion
                .text
                .char_indices()
                .nth(suggestion.partial_input_length)
                .map_or(suggestion.text.len(), |(idx, _)| idx);
            let (typed, rest) = suggestion.text.split_at(split);
            if self.color {
                out.push_str(&format!("{}{}", typed.bold(), rest));
            } else {
                out.push_str(typed);
                out.push_str(rest);
            }
            out.push('\n');
        }
        out
    }

    pub fn render_include_tree(&self, entries: &[IncludeEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            out.push_str(&"  ".repeat(entry.depth));
            out.push_str(&entry.path);
            match entry.status {
                IncludeStatus::Loaded => {}
                IncludeStatus::Missing => {
                    out.push(' ');
                    out.push_str(&self.error("(not found)"));
                }
                IncludeStatus::Cycle => {
                    out.push(' ');
                    out.push_str(&self.dimmed("(cycle)"));
                }
                IncludeStatus::Repeated => {
                    out.push(' ');
                    out.push_str(&self.dimmed("(see above)"));
                }
            }
            out.push('\n');
        }
        out
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
