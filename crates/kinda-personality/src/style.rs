//! Error-message tone selection (spec §4.1, §7).

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStyle {
    Professional,
    Friendly,
    Snarky,
    Chaotic,
}

impl ErrorStyle {
    /// Bucket `error_snark_level` (spec §4.1: "bucket into quartiles").
    pub fn from_snark_level(level: f64) -> Self {
        if level < 0.25 {
            ErrorStyle::Professional
        } else if level < 0.5 {
            ErrorStyle::Friendly
        } else if level < 0.75 {
            ErrorStyle::Snarky
        } else {
            ErrorStyle::Chaotic
        }
    }
}

/// The kind of styled diagnostic being emitted. Each kind has its own
/// per-style template set so `~welp` messages read differently from
/// `~eventually_until` safety-cap messages, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// `welp_fallback` caught a failure and is using the fallback value.
    WelpFallback,
    /// `sorta_print` decided not to print.
    SortaShrug,
    /// `~eventually_until` hit its safety cap without reaching confidence.
    EventuallyUntilCap,
    /// `~kinda_repeat(n)` got a non-numeric `n` and fell back to 1.
    RepeatFallback,
}

fn templates(kind: MessageKind, style: ErrorStyle) -> &'static [&'static str] {
    use ErrorStyle::*;
    use MessageKind::*;
    match (kind, style) {
        (WelpFallback, Professional) => &["Expression returned no value; using fallback."],
        (WelpFallback, Friendly) => &["Got nothing there, trying fallback."],
        (WelpFallback, Snarky) => &[
            "Well that was useless, falling back to the default.",
            "Bold of that expression to fail. Falling back.",
        ],
        (WelpFallback, Chaotic) => &[
            "BOOM 💥 whatever, here's the fallback.",
            "Nope! Exploded. Using the fallback instead.",
        ],
        (SortaShrug, Professional) => &["Output suppressed for this call."],
        (SortaShrug, Friendly) => &["Eh, skipping this print."],
        (SortaShrug, Snarky) => &["Didn't feel like printing that one.", "*shrug* not today."],
        (SortaShrug, Chaotic) => &["🤷 maybe later, who knows."],
        (EventuallyUntilCap, Professional) => {
            &["Loop terminated: iteration limit reached before target confidence."]
        }
        (EventuallyUntilCap, Friendly) => &["Giving up on waiting, hit the iteration cap."],
        (EventuallyUntilCap, Snarky) => {
            &["This was never going to converge. Bailing out."]
        }
        (EventuallyUntilCap, Chaotic) => &["😵 ran out of patience, just stopping."],
        (RepeatFallback, Professional) => {
            &["Repeat count was not numeric; defaulting to 1 iteration."]
        }
        (RepeatFallback, Friendly) => &["Couldn't read that repeat count, doing it once."],
        (RepeatFallback, Snarky) => &["That's not a number. Doing it once and moving on."],
        (RepeatFallback, Chaotic) => &["🎲 no idea what that was, one lap it is."],
    }
}

/// Pick a template for `(style, kind)` via `rng`, so the exact wording is
/// reproducible under a fixed seed while still varying run to run.
pub fn render<R: Rng + ?Sized>(rng: &mut R, kind: MessageKind, style: ErrorStyle) -> &'static str {
    let options = templates(kind, style);
    let idx = rng.gen_range(0..options.len());
    options[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartile_boundaries() {
        assert_eq!(ErrorStyle::from_snark_level(0.0), ErrorStyle::Professional);
        assert_eq!(ErrorStyle::from_snark_level(0.24), ErrorStyle::Professional);
        assert_eq!(ErrorStyle::from_snark_level(0.25), ErrorStyle::Friendly);
        assert_eq!(ErrorStyle::from_snark_level(0.5), ErrorStyle::Snarky);
        assert_eq!(ErrorStyle::from_snark_level(0.75), ErrorStyle::Chaotic);
        assert_eq!(ErrorStyle::from_snark_level(1.0), ErrorStyle::Chaotic);
    }

    #[test]
    fn every_kind_has_every_style() {
        use ErrorStyle::*;
        use MessageKind::*;
        for kind in [WelpFallback, SortaShrug, EventuallyUntilCap, RepeatFallback] {
            for style in [Professional, Friendly, Snarky, Chaotic] {
                assert!(!templates(kind, style).is_empty());
            }
        }
    }
}
