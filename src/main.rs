//! `kinda`: the Kinda-Lang transformer and runtime CLI (spec §6).

use clap::{Parser, Subcommand};
use kinda_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "kinda", version, about = "Transformer and runtime for the Kinda-Lang fuzzy scripting superset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite a .knda file into host-language text plus its runtime helper file.
    Transform {
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Transform a .knda file and execute the result with `python3`.
    Run {
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Transform a .knda file and print the result without writing files.
    Interpret { input: PathBuf },
    /// Print one example line per registered construct.
    Examples,
    /// Print the construct registry table (name, category, dependencies).
    Syntax,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match cli.command {
        Command::Transform { input, out_dir } => commands::transform::run(&input, &out_dir, &config),
        Command::Run { input, out_dir } => commands::run::run(&input, &out_dir, &config),
        Command::Interpret { input } => commands::interpret::run(&input, &config),
        Command::Examples => {
            commands::examples::run();
            Ok(())
        }
        Command::Syntax => {
            commands::syntax::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(err) => {
            error!(%err, "command failed");
            ExitCode::from(err.exit_code())
        }
    }
}

pub(crate) use self::exit::CliError;

mod exit {
    use std::fmt;

    /// Maps onto spec §6's exit codes: 1 transform/parse failure, 2 I/O
    /// failure, 3 everything else (registry/emit/usage-level problems the
    /// CLI itself detects, as opposed to clap's own arg-parsing errors).
    #[derive(Debug)]
    pub enum CliError {
        Transform(String),
        Io(String),
        Other(String),
    }

    impl CliError {
        pub fn exit_code(&self) -> u8 {
            match self {
                CliError::Transform(_) => 1,
                CliError::Io(_) => 2,
                CliError::Other(_) => 3,
            }
        }
    }

    impl fmt::Display for CliError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CliError::Transform(m) | CliError::Io(m) | CliError::Other(m) => write!(f, "{m}"),
            }
        }
    }

    impl std::error::Error for CliError {}

    impl From<kinda_transform::TransformError> for CliError {
        fn from(err: kinda_transform::TransformError) -> Self {
            CliError::Transform(err.to_string())
        }
    }

    impl From<std::io::Error> for CliError {
        fn from(err: std::io::Error) -> Self {
            CliError::Io(err.to_string())
        }
    }

    impl From<kinda_emit::EmitError> for CliError {
        fn from(err: kinda_emit::EmitError) -> Self {
            match err {
                kinda_emit::EmitError::Write { source, .. } => CliError::Io(source.to_string()),
                other => CliError::Other(other.to_string()),
            }
        }
    }
}
