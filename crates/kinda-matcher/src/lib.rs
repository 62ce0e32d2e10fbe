//! The Matcher (C3): string-literal-aware, delimiter-balanced construct
//! scanning over a single source line. Operates on one line at a time; the
//! Transformer (`kinda-transform`) is responsible for joining multi-line
//! blocks before handing lines here.

pub mod delimiters;
pub mod ish;
pub mod scanner;
pub mod string_literal;
pub mod welp;

pub use ish::{find_ish_constructs, IshKind, IshMatch};
pub use scanner::{find_constructs, ConstructMatch};
pub use string_literal::{is_inside_string_literal, strip_comment};
pub use welp::{find_welp_constructs, WelpMatch};
