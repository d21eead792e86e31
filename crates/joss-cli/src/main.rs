/// `joss` command-line tool — inspect Java object-serialization streams
/// without a JVM.
///
/// # Command overview
///
/// ```text
/// joss <COMMAND> [OPTIONS]
///
/// Commands:
///   dump       Decode a stream and print it as JSON or indented text
///   validate   Check a stream for structural correctness
///   hex        Print a raw hex + ASCII dump of the input
///   help       Print help information
/// ```
///
/// Inputs that start with the gzip magic (`1F 8B`) are decompressed
/// transparently — serialized BLOBs pulled out of gateway databases are
/// usually gzip-wrapped.
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid stream)     |
///
/// Error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_dump;
mod cmd_hex;
mod cmd_validate;
mod input;

/// The `joss` (Java Object Serialization Stream) command-line tool.
#[derive(Parser)]
#[command(name = "joss", version, about = "Java object-serialization stream inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a stream and print the value tree.
    Dump(DumpArgs),
    /// Check a stream for structural correctness.
    Validate(ValidateArgs),
    /// Print a raw hex + ASCII dump of the input bytes.
    Hex(HexArgs),
}

/// Arguments for `joss dump`.
///
/// Decodes the stream and prints one tree per top-level element. When
/// decoding fails partway, the error goes to stderr and a hex dump of
/// the whole buffer goes to stdout, so a corrupt stream still yields
/// something to look at.
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the serialized stream (optionally gzip-wrapped).
    pub file: PathBuf,

    /// Output format: `json` (pretty-printed) or `text`.
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Do not fall back to a hex dump when decoding fails.
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for `joss validate`.
///
/// Attempts a full decode and reports either success checkmarks or a
/// diagnostic error line. Exit code 0 on a valid stream, 1 otherwise.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the serialized stream (optionally gzip-wrapped).
    pub file: PathBuf,
}

/// Arguments for `joss hex`.
#[derive(clap::Args)]
pub struct HexArgs {
    /// Path to the file to dump.
    pub file: PathBuf,

    /// Dump the raw file bytes even when they are gzip-wrapped.
    #[arg(long)]
    pub raw: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dump(args) => cmd_dump::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Hex(args) => cmd_hex::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
