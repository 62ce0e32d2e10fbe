//! Registry lookups and dependency-closure computation (spec §4.2).

use crate::descriptor::ConstructDescriptor;
use crate::table::CONSTRUCTS;
use kinda_core::{Error, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

fn compiled_patterns() -> &'static HashMap<&'static str, Regex> {
    static PATTERNS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CONSTRUCTS
            .iter()
            .map(|c| {
                let re = Regex::new(c.pattern_src)
                    .unwrap_or_else(|e| panic!("invalid pattern for `{}`: {e}", c.name));
                (c.name, re)
            })
            .collect()
    })
}

/// Total lookup: unknown names return `None`, they never panic (spec
/// §4.2 "`get(name)` is total with `Unknown` failure").
pub fn get(name: &str) -> Option<&'static ConstructDescriptor> {
    CONSTRUCTS.iter().find(|c| c.name == name)
}

pub fn pattern_for(name: &str) -> Option<&'static Regex> {
    compiled_patterns().get(name)
}

pub fn all() -> &'static [ConstructDescriptor] {
    CONSTRUCTS
}

/// Topologically sort the transitive `depends_on` closure of `names`, ties
/// broken in lexical order (spec §4.5 step 2). Errors on an unregistered
/// name (spec §4.2/§7 `RegistryError`) or a dependency cycle (spec §7
/// `RuntimeEmitError`-class bug, surfaced here as `Error::Registry` since
/// it indicates the static table itself is malformed).
pub fn dependency_closure(names: &[&str]) -> Result<Vec<&'static str>> {
    let mut visited: HashSet<&'static str> = HashSet::new();
    let mut finished: Vec<&'static str> = Vec::new();
    let mut on_stack: HashSet<&'static str> = HashSet::new();

    let mut sorted_roots: Vec<&str> = names.to_vec();
    sorted_roots.sort_unstable();
    sorted_roots.dedup();

    for root in sorted_roots {
        visit(root, &mut visited, &mut on_stack, &mut finished)?;
    }
    Ok(finished)
}

fn visit<'a>(
    name: &str,
    visited: &mut HashSet<&'static str>,
    on_stack: &mut HashSet<&'static str>,
    finished: &mut Vec<&'static str>,
) -> Result<()> {
    let descriptor = get(name).ok_or_else(|| Error::Registry(name.to_string()))?;
    if visited.contains(descriptor.name) {
        return Ok(());
    }
    if on_stack.contains(descriptor.name) {
        return Err(Error::Registry(format!(
            "dependency cycle detected at `{}`",
            descriptor.name
        )));
    }
    on_stack.insert(descriptor.name);

    let mut deps: Vec<&str> = descriptor.depends_on.to_vec();
    deps.sort_unstable();
    for dep in deps {
        visit(dep, visited, on_stack, finished)?;
    }

    on_stack.remove(descriptor.name);
    visited.insert(descriptor.name);
    finished.push(descriptor.name);
    Ok(())
}

/// Validate the static table is well-formed: every `depends_on` name is
/// registered and the graph is acyclic (spec §3 invariant). Intended to run
/// once at process start; a failure here indicates a bug in `table.rs`,
/// never bad user input.
pub fn validate() -> Result<()> {
    let all_names: Vec<&str> = CONSTRUCTS.iter().map(|c| c.name).collect();
    dependency_closure(&all_names).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_acyclic_and_fully_resolved() {
        validate().expect("construct table must be acyclic and fully resolved");
    }

    #[test]
    fn unknown_construct_is_none_not_panic() {
        assert!(get("not_a_real_construct").is_none());
    }

    #[test]
    fn closure_includes_transitive_deps_in_dependency_order() {
        let closure = dependency_closure(&["ish"]).unwrap();
        let pos = |n: &str| closure.iter().position(|x| *x == n).unwrap();
        assert!(pos("kinda_float") < pos("ish"));
        assert!(pos("chaos_tolerance") < pos("ish"));
        assert!(pos("probably") < pos("ish"));
    }

    #[test]
    fn closure_is_deduplicated() {
        let closure = dependency_closure(&["sorta", "sometimes", "maybe"]).unwrap();
        let count = closure.iter().filter(|n| **n == "sometimes").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn closure_rejects_unknown_name() {
        assert!(dependency_closure(&["nonexistent"]).is_err());
    }

    #[test]
    fn every_construct_pattern_compiles() {
        for c in all() {
            assert!(pattern_for(c.name).is_some(), "missing compiled pattern for {}", c.name);
        }
    }
}
