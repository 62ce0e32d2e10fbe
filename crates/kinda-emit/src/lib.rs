//! The Runtime Emitter (C5): takes the set of helpers a transformed program
//! actually calls, resolves it to a dependency-ordered closure over the
//! Construct Registry, and writes the concatenated runtime source as one
//! file next to the transformed program.

pub mod error;

pub use error::{EmitError, Result};

use kinda_registry::get;
use kinda_transform::UsedHelperSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

pub const RUNTIME_FILE_NAME: &str = "kinda_runtime.py";

/// Render the ordered runtime source text for `used` without touching the
/// filesystem. Exposed separately from [`emit_runtime`] so callers (and
/// tests) can inspect the generated text directly.
pub fn render_runtime(used: &UsedHelperSet) -> Result<String> {
    let names = used.names();
    let closure = kinda_registry::dependency_closure(&names)?;

    let mut out = String::new();
    out.push_str("# Generated by kinda-emit. Do not edit by hand.\n\n");
    for name in closure {
        let descriptor = get(name).expect("dependency_closure only returns registered names");
        out.push_str("# --- ");
        out.push_str(name);
        out.push_str(" ---\n");
        out.push_str(descriptor.body);
        out.push('\n');
    }
    Ok(out)
}

/// Write the rendered runtime to `out_dir/kinda_runtime.py`, atomically:
/// write to a sibling temp file first, then rename into place, so a reader
/// of the runtime file never observes a partial write.
pub fn emit_runtime(used: &UsedHelperSet, out_dir: &Path) -> Result<PathBuf> {
    let rendered = render_runtime(used)?;
    let final_path = out_dir.join(RUNTIME_FILE_NAME);
    let temp_path = out_dir.join(temp_file_name());

    fs::write(&temp_path, &rendered).map_err(|source| EmitError::Write {
        path: temp_path.clone(),
        source,
    })?;
    fs::rename(&temp_path, &final_path).map_err(|source| EmitError::Write {
        path: final_path.clone(),
        source,
    })?;

    debug!(path = %final_path.display(), helpers = used.names().len(), "runtime emitted");
    Ok(final_path)
}

fn temp_file_name() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(".{RUNTIME_FILE_NAME}.{}.{seq}.tmp", std::process::id())
}
