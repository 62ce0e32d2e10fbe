//! `~ish` classification (spec §4.4): the same infix token means a fuzzy
//! equality comparison in boolean context and a fuzzy-nudge reassignment in
//! statement context. The matcher disambiguates from surrounding syntax so
//! the transformer never has to guess.

use crate::delimiters::{scan_expression_backward, scan_expression_forward};
use crate::string_literal::{is_inside_string_literal, strip_comment};
use kinda_core::Span;
use regex::Regex;
use std::sync::OnceLock;

const OPERATOR: &str = "~ish";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IshKind {
    /// `a ~ish b` used where a boolean is expected: `if`/`elif`/`while`,
    /// after `return`, or as an operand of `and`/`or`/`not`. Lowers to
    /// `ish_comparison`.
    Comparison,
    /// `var ~ish target` as a bare statement: the left-hand side is a lone
    /// identifier with nothing else on the line before it. Lowers to
    /// `ish_value`.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IshMatch {
    pub kind: IshKind,
    pub lhs: Span,
    pub operator: Span,
    pub rhs: Span,
}

fn bare_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+$").unwrap())
}

pub fn find_ish_constructs(line: &str) -> Vec<IshMatch> {
    let scan_area = strip_comment(line);
    let mut out = Vec::new();
    let mut cursor = 0usize;
    while let Some(rel) = scan_area[cursor..].find(OPERATOR) {
        let op_start = cursor + rel;
        let op_end = op_start + OPERATOR.len();
        if is_inside_string_literal(line, op_start) {
            cursor = op_end;
            continue;
        }

        let lhs_start = scan_expression_backward(scan_area, op_start);
        let rhs_end = scan_expression_forward(scan_area, op_end);
        let lhs_text = scan_area[lhs_start..op_start].trim();
        let preceding = scan_area[..lhs_start].trim_end();

        let kind = if preceding.is_empty() && bare_identifier().is_match(lhs_text) {
            IshKind::Value
        } else {
            IshKind::Comparison
        };

        out.push(IshMatch {
            kind,
            lhs: Span::new(lhs_start, op_start),
            operator: Span::new(op_start, op_end),
            rhs: Span::new(op_end, rhs_end),
        });
        cursor = rhs_end.max(op_end);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_assignment_is_value() {
        let matches = find_ish_constructs("target ~ish destination");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, IshKind::Value);
    }

    #[test]
    fn boolean_context_is_comparison() {
        let matches = find_ish_constructs("if score ~ish 100:");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, IshKind::Comparison);
    }

    #[test]
    fn compound_lhs_is_comparison() {
        let matches = find_ish_constructs("total + bonus ~ish expected");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, IshKind::Comparison);
    }

    #[test]
    fn respects_string_literals() {
        let matches = find_ish_constructs(r#"log("a ~ish b")"#);
        assert!(matches.is_empty());
    }

    #[test]
    fn finds_multiple_occurrences() {
        let matches = find_ish_constructs("a ~ish b and c ~ish d");
        assert_eq!(matches.len(), 2);
    }
}
