//! Single-line declarative constructs (spec §4.2): `~kinda int/float/bool`,
//! `~=` fuzzy reassignment, `~sorta print`, `~drift`, `~time drift`. None of
//! these open a block, so each rewrites in place to one line of host text.

use crate::helpers::UsedHelperSet;
use kinda_registry::pattern_for;

pub fn rewrite_simple_construct(line: &str, used: &mut UsedHelperSet) -> Option<String> {
    let indent: String = line.chars().take_while(|c| *c == ' ').collect();

    if let Some(caps) = pattern_for("kinda_int").and_then(|re| re.captures(line)) {
        used.mark("kinda_int");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = kinda_int({value})"));
    }
    if let Some(caps) = pattern_for("kinda_float").and_then(|re| re.captures(line)) {
        used.mark("kinda_float");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = kinda_float({value})"));
    }
    if let Some(caps) = pattern_for("kinda_bool").and_then(|re| re.captures(line)) {
        used.mark("kinda_bool");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = kinda_bool({value})"));
    }
    if let Some(caps) = pattern_for("time_drift_int").and_then(|re| re.captures(line)) {
        used.mark("time_drift_int");
        used.mark("drift_access");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = time_drift_int('{var}', {value})"));
    }
    if let Some(caps) = pattern_for("time_drift_float").and_then(|re| re.captures(line)) {
        used.mark("time_drift_float");
        used.mark("drift_access");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = time_drift_float('{var}', {value})"));
    }
    if let Some(caps) = pattern_for("fuzzy_reassign").and_then(|re| re.captures(line)) {
        used.mark("fuzzy_reassign");
        let var = &caps["var"];
        let value = caps["value"].trim();
        return Some(format!("{indent}{var} = fuzzy_reassign('{var}', {value})"));
    }
    if let Some(caps) = pattern_for("sorta_print").and_then(|re| re.captures(line)) {
        used.mark("sorta_print");
        used.mark("sorta");
        let args = &caps["args"];
        return Some(format!("{indent}sorta_print({args})"));
    }
    if let Some(caps) = pattern_for("drift_access").and_then(|re| re.captures(line)) {
        used.mark("drift_access");
        let var = &caps["var"];
        return Some(format!("{indent}drift_access('{var}', {var})"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_kinda_int() {
        let mut used = UsedHelperSet::new();
        let out = rewrite_simple_construct("~kinda int health = 100", &mut used).unwrap();
        assert_eq!(out, "health = kinda_int(100)");
        assert_eq!(used.names(), vec!["kinda_int"]);
    }

    #[test]
    fn rewrites_fuzzy_reassign() {
        let mut used = UsedHelperSet::new();
        let out = rewrite_simple_construct("speed ~= speed + 1", &mut used).unwrap();
        assert_eq!(out, "speed = fuzzy_reassign('speed', speed + 1)");
    }

    #[test]
    fn preserves_indentation() {
        let mut used = UsedHelperSet::new();
        let out = rewrite_simple_construct("    ~kinda int x = 1", &mut used).unwrap();
        assert_eq!(out, "    x = kinda_int(1)");
    }

    #[test]
    fn plain_host_lines_are_not_touched() {
        let mut used = UsedHelperSet::new();
        assert!(rewrite_simple_construct("print('hello')", &mut used).is_none());
    }
}
