use kinda_core::SourceLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("block opened at {location} has no indented body")]
    EmptyBlockBody { location: SourceLocation },
}

pub type Result<T> = std::result::Result<T, TransformError>;
