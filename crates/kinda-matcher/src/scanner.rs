//! Line-head construct scanning (spec §4.2/§4.3): every construct whose
//! syntax is recognizable from a regex anchored at the start of its
//! occurrence (`~kinda int x = ...`, `~sometimes(cond):`, `x ~= 1`, ...).
//! `~ish` and `~welp` are infix operators with no fixed head shape and are
//! handled separately in [`crate::ish`] and [`crate::welp`].

use crate::string_literal::{is_inside_string_literal, strip_comment};
use kinda_core::Span;
use kinda_registry::{all, pattern_for, Category};

/// Constructs excluded from head scanning because they're infix operators
/// matched by their own dedicated scanners instead.
const INFIX_ONLY: &[&str] = &["ish_comparison", "ish_value", "welp_fallback"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructMatch {
    pub name: &'static str,
    pub span: Span,
}

/// Find every recognizable construct head in `line`, in left-to-right
/// order. Composite constructs (`sorta`, `ish`) are category markers for the
/// emitter's dependency closure, not independently matchable text, so they
/// never appear here.
pub fn find_constructs(line: &str) -> Vec<ConstructMatch> {
    let scan_area = strip_comment(line);
    let mut matches = Vec::new();
    for descriptor in all() {
        if descriptor.category == Category::Composite || INFIX_ONLY.contains(&descriptor.name) {
            continue;
        }
        let Some(pattern) = pattern_for(descriptor.name) else {
            continue;
        };
        if let Some(m) = pattern.find(scan_area) {
            if is_inside_string_literal(line, m.start()) {
                continue;
            }
            matches.push(ConstructMatch {
                name: descriptor.name,
                span: Span::new(m.start(), m.end()),
            });
        }
    }
    matches.sort_by_key(|m| m.span.start);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_kinda_int_declaration() {
        let matches = find_constructs("~kinda int health = 100");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "kinda_int");
    }

    #[test]
    fn finds_sometimes_block_head() {
        let matches = find_constructs("~sometimes(is_alive):");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "sometimes");
    }

    #[test]
    fn ignores_match_inside_string_literal() {
        let matches = find_constructs(r#"log("~kinda int fake = 1")"#);
        assert!(matches.is_empty());
    }

    #[test]
    fn ignores_match_after_comment_marker() {
        let matches = find_constructs("print(x)  # ~kinda int fake = 1");
        assert!(matches.is_empty());
    }

    #[test]
    fn never_surfaces_infix_only_or_composite_names() {
        let matches = find_constructs("a ~ish b ~welp c");
        assert!(matches.iter().all(|m| !INFIX_ONLY.contains(&m.name)));
        assert!(matches.iter().all(|m| m.name != "ish" && m.name != "sorta"));
    }
}
