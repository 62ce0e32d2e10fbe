//! Error taxonomy for Kinda-Lang (spec §7).

use crate::span::SourceLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Matcher hit unbalanced delimiters, an unterminated string, or a
    /// construct used in an unparseable position.
    #[error("parse error at {location}")]
    Parse { location: SourceLocation },

    /// Construct recognized but cannot be rewritten.
    #[error("transform error at {location}: {cause}")]
    Transform {
        location: SourceLocation,
        cause: String,
    },

    /// Unknown construct name referenced from a dependency closure. Always
    /// indicates a bug in the registry itself, never bad user input.
    #[error("registry error: unknown construct `{0}`")]
    Registry(String),

    /// Dependency cycle or I/O failure while writing the runtime file.
    #[error("runtime emit error: {0}")]
    RuntimeEmit(String),

    /// Unknown mood name. Recovered by the caller (falls back to `playful`);
    /// never fatal, but still worth surfacing as a typed value.
    #[error("unknown personality profile `{0}`")]
    UnknownProfile(String),

    /// A runtime primitive could not compute its normal result (e.g.
    /// `~eventually_until` hit its safety cap). Handled locally.
    #[error("fuzzy operation failure: {0}")]
    FuzzyOperation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, column: usize, excerpt: impl Into<String>) -> Self {
        Self::Parse {
            location: SourceLocation::new(line, column, excerpt),
        }
    }

    pub fn transform(
        line: usize,
        column: usize,
        excerpt: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self::Transform {
            location: SourceLocation::new(line, column, excerpt),
            cause: cause.into(),
        }
    }
}
