//! The built-in construct table (spec §4.2).

use crate::descriptor::{Category, ConstructDescriptor};

macro_rules! primitive {
    ($name:literal, $pattern:literal, $body:literal, [$($dep:literal),* $(,)?]) => {
        ConstructDescriptor {
            name: $name,
            pattern_src: $pattern,
            body: $body,
            depends_on: &[$($dep),*],
            category: Category::Primitive,
        }
    };
}

macro_rules! composite {
    ($name:literal, $pattern:literal, $body:literal, [$($dep:literal),* $(,)?]) => {
        ConstructDescriptor {
            name: $name,
            pattern_src: $pattern,
            body: $body,
            depends_on: &[$($dep),*],
            category: Category::Composite,
        }
    };
}

pub const CONSTRUCTS: &[ConstructDescriptor] = &[
    primitive!(
        "kinda_int",
        r"~kinda\s+int\s+(?P<var>\w+)\s*=\s*(?P<value>.+)",
        "def kinda_int(v):\n    lo, hi = personality.chaos_fuzz_range_int()\n    return fuzzy_saturate(v + rng.randint(lo, hi))\n",
        []
    ),
    primitive!(
        "kinda_float",
        r"~kinda\s+float\s+(?P<var>\w+)\s*=\s*(?P<value>.+)",
        "def kinda_float(v):\n    sigma = personality.chaos_fuzz_range_float()\n    return v + rng.normal(0.0, sigma)\n",
        []
    ),
    primitive!(
        "kinda_bool",
        r"~kinda\s+bool\s+(?P<var>\w+)\s*=\s*(?P<value>.+)",
        "def kinda_bool(v):\n    flip_prob = personality.chaos_probability('kinda_bool', v)\n    return (not v) if rng.uniform() < flip_prob else v\n",
        []
    ),
    primitive!(
        "fuzzy_reassign",
        r"(?P<var>\w+)\s*~=\s*(?P<value>.+)",
        "def fuzzy_reassign(name, value):\n    return kinda_float(value) if isinstance(value, float) else kinda_int(value)\n",
        ["kinda_int", "kinda_float"]
    ),
    primitive!(
        "sorta_print",
        r"~sorta\s+print\s*\((?P<args>.*)\)",
        "def sorta_print(*args):\n    if rng.uniform() < personality.chaos_probability('sorta_print', True):\n        print(*args)\n    else:\n        print(styled_message('sorta_shrug'))\n",
        []
    ),
    primitive!(
        "ish_comparison",
        r"(?P<lhs>.+?)\s*~ish\s*(?P<rhs>.+)",
        "def ish_comparison(a, b, tol=None):\n    tolerance = tol if tol is not None else personality.chaos_tolerance()\n    close = abs(kinda_float(a) - kinda_float(b)) <= tolerance\n    return probably(close)\n",
        ["kinda_float", "probably"]
    ),
    primitive!(
        "ish_value",
        r"(?P<var>\w+)\s*~ish\s*(?P<target>.+)",
        "def ish_value(cur, target=None):\n    if target is None:\n        return cur + kinda_float(personality.chaos_variance())\n    if sometimes(True):\n        return cur + (kinda_float(target - cur) * kinda_float(0.5))\n    return cur + kinda_float(personality.chaos_variance())\n",
        ["kinda_float", "sometimes"]
    ),
    primitive!(
        "welp_fallback",
        r"(?P<expr>.+?)\s*~welp\s*(?P<fallback>.+)",
        "def welp_fallback(thunk, fallback):\n    try:\n        result = thunk()\n        if result is NOTHING:\n            raise FuzzyNothing()\n        return result\n    except Exception:\n        print(styled_message('welp_fallback'))\n        return fallback\n",
        []
    ),
    primitive!(
        "drift_access",
        r"(?P<var>\w+)\s*~drift",
        "def drift_access(name, v):\n    return v + accumulated_drift(name)\n",
        []
    ),
    primitive!(
        "time_drift_int",
        r"~time\s+drift\s+int\s+(?P<var>\w+)\s*=\s*(?P<value>.+)",
        "def time_drift_int(name, v):\n    init_drift_state(name, v, kind='int')\n    return drift_access(name, v)\n",
        ["drift_access"]
    ),
    primitive!(
        "time_drift_float",
        r"~time\s+drift\s+float\s+(?P<var>\w+)\s*=\s*(?P<value>.+)",
        "def time_drift_float(name, v):\n    init_drift_state(name, v, kind='float')\n    return drift_access(name, v)\n",
        ["drift_access"]
    ),
    primitive!(
        "chaos_tolerance",
        r"chaos_tolerance\s*\(\s*\)",
        "def chaos_tolerance():\n    return personality.chaos_tolerance()\n",
        []
    ),
    primitive!(
        "chaos_variance",
        r"chaos_variance\s*\(\s*\)",
        "def chaos_variance():\n    return personality.chaos_variance()\n",
        []
    ),
    primitive!(
        "sometimes",
        r"~sometimes\s*\((?P<condition>.*)\)\s*:",
        "def sometimes(cond):\n    p = personality.chaos_probability('sometimes', bool(cond))\n    result = rng.uniform() < p and bool(cond)\n    personality.update_chaos_state(not result)\n    return result\n",
        []
    ),
    primitive!(
        "maybe",
        r"~maybe\s*\((?P<condition>.*)\)\s*:",
        "def maybe(cond):\n    p = personality.chaos_probability('maybe', bool(cond))\n    result = rng.uniform() < p and bool(cond)\n    personality.update_chaos_state(not result)\n    return result\n",
        []
    ),
    primitive!(
        "probably",
        r"~probably\s*\((?P<condition>.*)\)\s*:",
        "def probably(cond):\n    p = personality.chaos_probability('probably', bool(cond))\n    result = rng.uniform() < p and bool(cond)\n    personality.update_chaos_state(not result)\n    return result\n",
        []
    ),
    primitive!(
        "rarely",
        r"~rarely\s*\((?P<condition>.*)\)\s*:",
        "def rarely(cond):\n    p = personality.chaos_probability('rarely', bool(cond))\n    result = rng.uniform() < p and bool(cond)\n    personality.update_chaos_state(not result)\n    return result\n",
        []
    ),
    primitive!(
        "sometimes_while",
        r"~sometimes_while\s+(?P<condition>.+):",
        "def sometimes_while_continue():\n    p = personality.personality_loop_parameters().sometimes_while_probability\n    return rng.uniform() < p\n",
        []
    ),
    primitive!(
        "maybe_for",
        r"~maybe_for\s+(?P<var>\w+)\s+in\s+(?P<iterable>.+):",
        "def maybe_for_execute():\n    p = personality.personality_loop_parameters().maybe_for_probability\n    return rng.uniform() < p\n",
        []
    ),
    primitive!(
        "kinda_repeat",
        r"~kinda_repeat\s*\((?P<count>.+)\)",
        "def kinda_repeat_count(n):\n    sigma = personality.personality_loop_parameters().repeat_variance_pct * n\n    k = round(rng.normal(n, sigma))\n    return max(1 if n >= 1 else 0, k)\n",
        []
    ),
    primitive!(
        "eventually_until",
        r"~eventually_until\s+(?P<condition>.+):",
        "def eventually_until_should_stop(evaluator, cond_value):\n    evaluator.record(cond_value)\n    return evaluator.confidence_met(personality.personality_loop_parameters().eventually_until_confidence)\n",
        []
    ),
    composite!(
        "sorta",
        r"~sorta\b",
        "def sorta_apply(cond, thunk):\n    return sometimes(cond) or maybe(cond)\n",
        ["sometimes", "maybe"]
    ),
    composite!(
        "ish",
        r"~ish\b",
        "def ish_apply(mode, *args):\n    return ish_comparison(*args) if mode == 'comparison' else ish_value(*args)\n",
        ["kinda_float", "chaos_tolerance", "probably"]
    ),
];
