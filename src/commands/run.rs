//! `kinda run`: transform a `.knda` file, write it and its runtime helper
//! file, then hand the result to `python3` (spec §6). The Rust side never
//! interprets the host language itself — it stops at producing text a host
//! interpreter can execute, same boundary as `kinda transform`.

use crate::CliError;
use kinda_core::Config;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

pub fn run(input: &Path, out_dir: &Path, config: &Config) -> Result<(), CliError> {
    super::transform::run(input, out_dir, config)?;

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("program");
    let transformed_path = out_dir.join(format!("{stem}.py"));

    let status = Command::new("python3").arg(&transformed_path).status();
    match status {
        Ok(status) if status.success() => {
            info!(path = %transformed_path.display(), "program exited successfully");
            Ok(())
        }
        Ok(status) => Err(CliError::Other(format!(
            "python3 exited with status {status}"
        ))),
        Err(err) => {
            warn!(%err, "python3 not available, leaving transformed output on disk");
            fs::metadata(&transformed_path)?;
            Ok(())
        }
    }
}
