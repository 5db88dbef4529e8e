//! Include relation between documents, tracked in both directions.
//!
//! When document A includes B we record:
//! - `includes`: A -> [B] (what A includes, in directive order)
//! - `includers`: B -> {A} (what includes B)
//!
//! Edges are keyed by canonical path and may point at documents that could
//! not be loaded; the relation is what the directives say, not what exists.

use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Default, Debug)]
pub struct IncludeGraph {
    /// Forward edges, in directive order without duplicates.
    includes: FxHashMap<String, Vec<String>>,
    /// Reverse edges.
    includers: FxHashMap<String, FxHashSet<String>>,
}

impl IncludeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the includes of `file` with `included`.
    pub fn update_file(&mut self, file: &str, included: &[String]) {
        if let Some(old) = self.includes.remove(file) {
            for target in old {
                if let Some(rev) = self.includers.get_mut(&target) {
                    rev.remove(file);
                    if rev.is_empty() {
                        self.includers.remove(&target);
                    }
                }
            }
        }

        if included.is_empty() {
            return;
        }

        let mut ordered: Vec<String> = Vec::with_capacity(included.len());
        for target in included {
            if !ordered.contains(target) {
                ordered.push(target.clone());
            }
            self.includers
                .entry(target.clone())
                .or_default()
                .insert(file.to_string());
        }
        self.includes.insert(file.to_string(), ordered);
    }

    /// Documents `file` includes directly, in directive order.
    pub fn includes_of(&self, file: &str) -> &[String] {
        self.includes.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Documents that include `file` directly, sorted by path.
    pub fn includers_of(&self, file: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .includers
            .get(file)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        out.sort();
        out
    }

    /// Every document that includes `file` directly or transitively.
    /// Does not contain `file` itself unless it is part of a cycle.
    pub fn affected_by(&self, file: &str) -> Vec<String> {
        let mut affected = FxHashSet::default();
        let mut stack = vec![file.to_string()];

        while let Some(current) = stack.pop() {
            if let Some(rev) = self.includers.get(&current) {
                for includer in rev {
                    if affected.insert(includer.clone()) {
                        stack.push(includer.clone());
                    }
                }
            }
        }

        let mut out: Vec<String> = affected.into_iter().collect();
        out.sort();
        out
    }

    pub fn contains_file(&self, file: &str) -> bool {
        self.includes.contains_key(file) || self.includers.contains_key(file)
    }
}

#[cfg(test)]
#[path = "../tests/include_graph_tests.rs"]
mod include_graph_tests;
