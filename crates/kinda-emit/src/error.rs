use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("registry error while resolving runtime dependencies: {0}")]
    Registry(#[from] kinda_core::Error),
    #[error("failed to write runtime file at {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EmitError>;
