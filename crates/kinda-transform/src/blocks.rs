//! Block/indentation pairing (spec §4.2): constructs whose head opens an
//! indented body need their body wrapped, not just their head line rewritten
//! — a body-start guard for `~maybe_for`, an evaluator prologue plus
//! body-end guard for `~eventually_until`.

use crate::helpers::UsedHelperSet;
use kinda_registry::pattern_for;

pub const EVENTUALLY_EVALUATOR_VAR: &str = "_eventually_evaluator";

pub struct BlockHead {
    pub prologue_before: Option<String>,
    pub header_replacement: String,
    pub body_prologue: Option<String>,
    pub closer: Option<String>,
}

/// Try to recognize `trimmed` (leading whitespace already stripped) as a
/// block construct head. Returns `None` for anything else, including the
/// single-line declarative constructs handled by [`crate::simple`].
pub fn detect_block_head(trimmed: &str, used: &mut UsedHelperSet) -> Option<BlockHead> {
    for name in ["sometimes", "maybe", "probably", "rarely"] {
        if let Some(caps) = pattern_for(name).and_then(|re| re.captures(trimmed)) {
            used.mark(name);
            let condition = caps.name("condition").map(|m| m.as_str()).unwrap_or("True");
            return Some(BlockHead {
                prologue_before: None,
                header_replacement: format!("if {name}({condition}):"),
                body_prologue: None,
                closer: None,
            });
        }
    }

    if let Some(caps) = pattern_for("sometimes_while").and_then(|re| re.captures(trimmed)) {
        used.mark("sometimes_while");
        let condition = &caps["condition"];
        return Some(BlockHead {
            prologue_before: None,
            header_replacement: format!("while sometimes_while_continue() and ({condition}):"),
            body_prologue: None,
            closer: None,
        });
    }

    if let Some(caps) = pattern_for("maybe_for").and_then(|re| re.captures(trimmed)) {
        used.mark("maybe_for");
        let var = &caps["var"];
        let iterable = &caps["iterable"];
        return Some(BlockHead {
            prologue_before: None,
            header_replacement: format!("for {var} in {iterable}:"),
            body_prologue: Some("if not maybe_for_execute(): continue".to_string()),
            closer: None,
        });
    }

    if let Some(caps) = pattern_for("kinda_repeat").and_then(|re| re.captures(trimmed)) {
        used.mark("kinda_repeat");
        let count = caps["count"].trim();
        return Some(BlockHead {
            prologue_before: None,
            header_replacement: format!("for _ in range(kinda_repeat_count({count})):"),
            body_prologue: None,
            closer: None,
        });
    }

    if let Some(caps) = pattern_for("eventually_until").and_then(|re| re.captures(trimmed)) {
        used.mark("eventually_until");
        let condition = &caps["condition"];
        return Some(BlockHead {
            prologue_before: Some(format!("{EVENTUALLY_EVALUATOR_VAR} = EventuallyEvaluator()")),
            header_replacement: "while True:".to_string(),
            body_prologue: None,
            closer: Some(format!(
                "if eventually_until_should_stop({EVENTUALLY_EVALUATOR_VAR}, ({condition})): break"
            )),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sometimes_becomes_if() {
        let mut used = UsedHelperSet::new();
        let head = detect_block_head("~sometimes(is_alive):", &mut used).unwrap();
        assert_eq!(head.header_replacement, "if sometimes(is_alive):");
        assert!(head.closer.is_none());
    }

    #[test]
    fn maybe_for_injects_body_guard() {
        let mut used = UsedHelperSet::new();
        let head = detect_block_head("~maybe_for item in queue:", &mut used).unwrap();
        assert_eq!(head.header_replacement, "for item in queue:");
        assert_eq!(
            head.body_prologue.as_deref(),
            Some("if not maybe_for_execute(): continue")
        );
    }

    #[test]
    fn eventually_until_wraps_with_evaluator_and_closer() {
        let mut used = UsedHelperSet::new();
        let head = detect_block_head("~eventually_until error_rate < 0.01:", &mut used).unwrap();
        assert!(head.prologue_before.is_some());
        assert_eq!(head.header_replacement, "while True:");
        assert!(head.closer.unwrap().contains("eventually_until_should_stop"));
    }

    #[test]
    fn non_block_construct_is_none() {
        let mut used = UsedHelperSet::new();
        assert!(detect_block_head("~kinda int health = 100", &mut used).is_none());
    }
}
