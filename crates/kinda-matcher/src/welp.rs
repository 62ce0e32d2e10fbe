//! `~welp` fallback-expression scanning (spec §4.3): `risky() ~welp default`
//! has no block syntax, just a left operand to try and a right operand to
//! fall back to if it raises or yields `Nothing`.

use crate::delimiters::{scan_expression_backward, scan_expression_forward};
use crate::string_literal::{is_inside_string_literal, strip_comment};
use kinda_core::Span;

const OPERATOR: &str = "~welp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelpMatch {
    pub expr: Span,
    pub operator: Span,
    pub fallback: Span,
}

pub fn find_welp_constructs(line: &str) -> Vec<WelpMatch> {
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

        let expr_start = scan_expression_backward(scan_area, op_start);
        let fallback_end = scan_expression_forward(scan_area, op_end);
        out.push(WelpMatch {
            expr: Span::new(expr_start, op_start),
            operator: Span::new(op_start, op_end),
            fallback: Span::new(op_end, fallback_end),
        });
        cursor = fallback_end.max(op_end);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_simple_fallback() {
        let line = "result = risky() ~welp default_value";
        let matches = find_welp_constructs(line);
        assert_eq!(matches.len(), 1);
        assert_eq!(&line[matches[0].expr.start..matches[0].expr.end], "risky()");
        assert_eq!(
            &line[matches[0].fallback.start..matches[0].fallback.end],
            "default_value"
        );
    }

    #[test]
    fn fallback_stops_at_statement_comma() {
        let line = "log(risky() ~welp 0, other_arg)";
        let matches = find_welp_constructs(line);
        assert_eq!(matches.len(), 1);
        assert_eq!(&line[matches[0].fallback.start..matches[0].fallback.end], "0");
    }

    #[test]
    fn respects_string_literals() {
        let matches = find_welp_constructs(r#"log("a ~welp b")"#);
        assert!(matches.is_empty());
    }

    #[test]
    fn expr_keeps_balanced_call_arguments() {
        let line = "fetch(url, timeout) ~welp cached";
        let matches = find_welp_constructs(line);
        assert_eq!(
            &line[matches[0].expr.start..matches[0].expr.end],
            "fetch(url, timeout)"
        );
    }
}
