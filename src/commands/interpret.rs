//! `kinda interpret`: transform a `.knda` file in memory and print the
//! result plus the personality context it would run under, without writing
//! any files (spec §6's read-only preview mode).

use crate::CliError;
use kinda_core::Config;
use kinda_personality::PersonalityContext;
use std::fs;
use std::path::Path;

pub fn run(input: &Path, config: &Config) -> Result<(), CliError> {
    let source = fs::read_to_string(input)?;
    let output = kinda_transform::transform_file(&source)?;
    let ctx = PersonalityContext::from_config(config);
    let snapshot = ctx.snapshot();

    println!("# profile: {}", snapshot.profile_name);
    println!("# seed: {}", snapshot.seed.map(|s| s.to_string()).unwrap_or_else(|| "none".to_string()));
    if output.used_helpers.is_empty() {
        println!("# helpers: none");
    } else {
        println!("# helpers: {}", output.used_helpers.names().join(", "));
    }
    println!();
    print!("{}", output.source);
    Ok(())
}
