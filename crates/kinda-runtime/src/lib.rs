//! The Fuzzy Runtime (C6) and its loop constructs (C6.L): native Rust
//! implementations used by `kinda run`/`kinda interpret` to execute a
//! transformed program directly, without shelling out to a host
//! interpreter for the emitted runtime text.

pub mod drift;
pub mod loops;
pub mod primitives;

pub use drift::{drift_access, time_drift_float, time_drift_int, DriftState};
pub use loops::{
    eventually_until_should_stop, kinda_repeat_count, maybe_for_execute, sometimes_while_continue,
};
pub use primitives::{
    fuzzy_reassign_float, fuzzy_reassign_int, ish_comparison, ish_value, kinda_bool, kinda_float,
    kinda_int, maybe, probably, rarely, sometimes, sorta_print, welp_fallback, PrintOutcome,
};
