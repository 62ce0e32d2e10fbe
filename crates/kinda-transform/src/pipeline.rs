//! The four-pass transform (spec §4.5): inline `~ish`, inline `~welp`, the
//! line/block construct pass, then an import header for whatever helpers
//! got used. Operates top-to-bottom over the file, pairing block headers
//! with their indented bodies as it goes.

use crate::blocks::detect_block_head;
use crate::error::{Result, TransformError};
use crate::helpers::UsedHelperSet;
use crate::simple::rewrite_simple_construct;
use kinda_core::SourceLocation;
use kinda_matcher::{find_ish_constructs, find_welp_constructs, IshKind};
use tracing::debug;

pub struct TransformOutput {
    pub source: String,
    pub used_helpers: UsedHelperSet,
}

struct OpenBlock {
    header_indent: usize,
    body_indent: usize,
    header_line: usize,
    header_excerpt: String,
    closer: Option<String>,
    saw_body: bool,
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

pub fn transform_file(source: &str) -> Result<TransformOutput> {
    let mut used = UsedHelperSet::new();
    let mut out: Vec<String> = Vec::new();
    let mut open_blocks: Vec<OpenBlock> = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let indent = indent_width(raw_line);
        let is_blank = raw_line.trim().is_empty();

        if !is_blank {
            close_blocks_above(&mut open_blocks, &mut out, indent)?;
            if let Some(top) = open_blocks.last_mut() {
                top.saw_body = true;
            }
        }

        let inline_rewritten = transform_inline(raw_line, &mut used);
        let trimmed = inline_rewritten.trim_start();
        let indent_str = " ".repeat(indent);

        if let Some(block) = detect_block_head(trimmed, &mut used) {
            if let Some(prologue) = &block.prologue_before {
                out.push(format!("{indent_str}{prologue}"));
            }
            out.push(format!("{indent_str}{}", block.header_replacement));
            let body_indent = indent + 4;
            if let Some(body_prologue) = &block.body_prologue {
                out.push(format!("{}{body_prologue}", " ".repeat(body_indent)));
            }
            open_blocks.push(OpenBlock {
                header_indent: indent,
                body_indent,
                header_line: line_no,
                header_excerpt: raw_line.trim().to_string(),
                closer: block.closer,
                saw_body: false,
            });
            continue;
        }

        if let Some(simple) = rewrite_simple_construct(&inline_rewritten, &mut used) {
            out.push(simple);
            continue;
        }

        out.push(inline_rewritten);
    }

    close_blocks_above(&mut open_blocks, &mut out, 0)?;

    let mut body = out.join("\n");
    if source.ends_with('\n') && !body.is_empty() {
        body.push('\n');
    }

    let header = render_import_header(&used);
    let full = if header.is_empty() {
        body
    } else if body.is_empty() {
        header
    } else {
        format!("{header}\n{body}")
    };

    debug!(helpers = used.names().join(","), "transform complete");
    Ok(TransformOutput { source: full, used_helpers: used })
}

fn close_blocks_above(
    open_blocks: &mut Vec<OpenBlock>,
    out: &mut Vec<String>,
    indent: usize,
) -> Result<()> {
    while let Some(top) = open_blocks.last() {
        if indent > top.header_indent {
            break;
        }
        let closed = open_blocks.pop().unwrap();
        if !closed.saw_body {
            return Err(TransformError::EmptyBlockBody {
                location: SourceLocation::new(
                    closed.header_line,
                    closed.header_indent + 1,
                    closed.header_excerpt,
                ),
            });
        }
        if let Some(closer) = closed.closer {
            out.push(format!("{}{closer}", " ".repeat(closed.body_indent)));
        }
    }
    Ok(())
}

/// Rewrite inline `~ish` and `~welp` occurrences, right to left so earlier
/// byte offsets on the line stay valid as later ones are replaced.
fn transform_inline(line: &str, used: &mut UsedHelperSet) -> String {
    let mut rewritten = line.to_string();

    let ish_matches = find_ish_constructs(&rewritten);
    for m in ish_matches.into_iter().rev() {
        let lhs = rewritten[m.lhs.start..m.lhs.end].trim().to_string();
        let rhs = rewritten[m.rhs.start..m.rhs.end].trim().to_string();
        used.mark("ish");
        let replacement = match m.kind {
            IshKind::Comparison => {
                used.mark("ish_comparison");
                format!("ish_comparison({lhs}, {rhs})")
            }
            IshKind::Value => {
                used.mark("ish_value");
                format!("{lhs} = ish_value({lhs}, {rhs})")
            }
        };
        rewritten.replace_range(m.lhs.start..m.rhs.end, &replacement);
    }

    let welp_matches = find_welp_constructs(&rewritten);
    for m in welp_matches.into_iter().rev() {
        let expr = rewritten[m.expr.start..m.expr.end].trim().to_string();
        let fallback = rewritten[m.fallback.start..m.fallback.end].trim().to_string();
        used.mark("welp_fallback");
        let replacement = format!("welp_fallback(lambda: {expr}, {fallback})");
        rewritten.replace_range(m.expr.start..m.fallback.end, &replacement);
    }

    rewritten
}

fn render_import_header(used: &UsedHelperSet) -> String {
    if used.is_empty() {
        String::new()
    } else {
        "from kinda_runtime import *".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_kinda_int_and_adds_header() {
        let out = transform_file("~kinda int health = 100\n").unwrap();
        assert!(out.source.starts_with("from kinda_runtime import *"));
        assert!(out.source.contains("health = kinda_int(100)"));
        assert_eq!(out.used_helpers.names(), vec!["kinda_int"]);
    }

    #[test]
    fn sometimes_block_becomes_if_and_preserves_body() {
        let src = "~sometimes(is_alive):\n    print('still kicking')\n";
        let out = transform_file(src).unwrap();
        assert!(out.source.contains("if sometimes(is_alive):"));
        assert!(out.source.contains("print('still kicking')"));
    }

    #[test]
    fn eventually_until_wraps_body_with_prologue_and_closer() {
        let src = "~eventually_until error_rate < 0.01:\n    sample()\n";
        let out = transform_file(src).unwrap();
        assert!(out.source.contains("EventuallyEvaluator()"));
        assert!(out.source.contains("while True:"));
        assert!(out.source.contains("eventually_until_should_stop"));
    }

    #[test]
    fn empty_block_body_is_an_error() {
        let src = "~sometimes(is_alive):\nnext_statement()\n";
        assert!(transform_file(src).is_err());
    }

    #[test]
    fn plain_lines_pass_through_untouched() {
        let out = transform_file("print('hello')\n").unwrap();
        assert_eq!(out.source, "print('hello')\n");
        assert!(out.used_helpers.is_empty());
    }

    #[test]
    fn inline_ish_comparison_inside_if_head() {
        let out = transform_file("if score ~ish 100:\n    win()\n").unwrap();
        assert!(out.source.contains("if ish_comparison(score, 100):"));
    }

    #[test]
    fn nested_blocks_close_in_order() {
        let src = "~sometimes(a):\n    ~maybe(b):\n        act()\nafter()\n";
        let out = transform_file(src).unwrap();
        let lines: Vec<&str> = out.source.lines().collect();
        assert!(lines.iter().any(|l| l.trim() == "if sometimes(a):"));
        assert!(lines.iter().any(|l| l.trim() == "if maybe(b):"));
        assert!(lines.last().unwrap().trim() == "after()");
    }
}
