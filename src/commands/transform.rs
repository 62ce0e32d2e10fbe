//! `kinda transform`: rewrite a `.knda` file and emit its runtime helper
//! file next to it, without executing anything (spec §6).

use crate::CliError;
use kinda_core::Config;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(input: &Path, out_dir: &Path, _config: &Config) -> Result<(), CliError> {
    let source = fs::read_to_string(input)?;
    let output = kinda_transform::transform_file(&source)?;

    fs::create_dir_all(out_dir)?;
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("program");
    let transformed_path = out_dir.join(format!("{stem}.py"));
    fs::write(&transformed_path, &output.source)?;

    if !output.used_helpers.is_empty() {
        let runtime_path = kinda_emit::emit_runtime(&output.used_helpers, out_dir)?;
        info!(path = %runtime_path.display(), "runtime helpers emitted");
    }

    info!(path = %transformed_path.display(), "transformed source written");
    println!("{}", transformed_path.display());
    Ok(())
}
