//! `ConstructDescriptor` (spec §3, §4.2): the value type backing every row
//! of the construct table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Primitive,
    Composite,
}

/// One registered construct. `pattern_src` recognizes the construct's
/// *head* (enough to classify which construct is present and where it
/// starts) — per spec §9's redesign note, the actual argument spans for
/// balanced/contextual constructs come from `kinda-matcher`'s dedicated
/// scanner, not from regex capture groups (regex can't express the
/// delimiter-balancing and string-literal-awareness the matcher needs).
///
/// `body` is the host-language source text for the emitted runtime helper
/// (spec §3's "host-source-text" descriptor, kept literally per the data
/// model rather than replaced by function references — `kinda-runtime`
/// carries the directly-compiled Rust implementation separately, used for
/// native execution/testing, per spec §9's redesign note).
#[derive(Debug, Clone, Copy)]
pub struct ConstructDescriptor {
    pub name: &'static str,
    pub pattern_src: &'static str,
    pub body: &'static str,
    pub depends_on: &'static [&'static str],
    pub category: Category,
}
