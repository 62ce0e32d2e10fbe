//! Balanced-delimiter scanning helpers (spec §4.3) shared by the `~ish` and
//! `~welp` inline matchers.

use crate::string_literal::is_inside_string_literal;

fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn opening_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Does `line[..pos]` (scanned left to right) sit at bracket depth 0 at byte
/// `pos`? Used to decide whether a separator candidate (`,`, `=`, `;`) is a
/// real statement-level boundary or buried inside an argument list.
pub fn depth_at(line: &str, pos: usize) -> i32 {
    let mut depth = 0i32;
    for (i, ch) in line.char_indices() {
        if i >= pos {
            break;
        }
        if is_inside_string_literal(line, i) {
            continue;
        }
        if closing_for(ch).is_some() {
            depth += 1;
        } else if opening_for(ch).is_some() {
            depth -= 1;
        }
    }
    depth
}

const KEYWORD_BOUNDARIES: &[&str] = &["if", "elif", "while", "return", "and", "or", "not", "in"];

fn is_word_boundary(line: &str, idx: usize) -> bool {
    match line[..idx].chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || c == '_'),
        None => true,
    }
}

/// Scan forward from `start` (inclusive) for the end of an expression: a
/// balanced run of brackets that stops at the first depth-0 statement
/// separator (`,`, `;`, `:`) or end of string. Used for `~welp`'s fallback
/// operand and `~ish`'s right-hand operand.
pub fn scan_expression_forward(line: &str, start: usize) -> usize {
    let mut depth = 0i32;
    let bytes = line.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        let ch = line[i..].chars().next().unwrap();
        if !is_inside_string_literal(line, i) {
            if closing_for(ch).is_some() {
                depth += 1;
            } else if opening_for(ch).is_some() {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if depth == 0 && matches!(ch, ',' | ';' | ':') {
                break;
            }
        }
        i += ch.len_utf8();
    }
    i
}

/// Scan backward from `end` (exclusive) for the start of the preceding
/// expression: a balanced run of brackets stopping at a depth-0 statement
/// separator (`,`, `;`, `=` that isn't part of `==`/`!=`/`<=`/`>=`), or a
/// keyword boundary (spec §4.3's `~welp` left-operand rule).
pub fn scan_expression_backward(line: &str, end: usize) -> usize {
    let mut depth = 0i32;
    let mut i = end;
    while i > 0 {
        let ch = line[..i].chars().next_back().unwrap();
        let char_start = i - ch.len_utf8();
        if !is_inside_string_literal(line, char_start) {
            if opening_for(ch).is_some() {
                depth += 1;
            } else if closing_for(ch).is_some() {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            } else if depth == 0 {
                if matches!(ch, ',' | ';') {
                    break;
                }
                if ch == '=' {
                    let prev = line[..char_start].chars().next_back();
                    let next = line[i..].chars().next();
                    let is_comparison =
                        matches!(prev, Some('=') | Some('!') | Some('<') | Some('>'))
                            || matches!(next, Some('='));
                    if !is_comparison {
                        break;
                    }
                }
            }
        }
        i = char_start;

        if depth == 0 {
            for kw in KEYWORD_BOUNDARIES {
                if i >= kw.len()
                    && &line[i - kw.len()..i] == *kw
                    && is_word_boundary(line, i - kw.len())
                {
                    return i;
                }
            }
        }
    }
    i
}
