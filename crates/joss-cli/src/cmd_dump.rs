/// Implementation of `joss dump`.
///
/// Decodes the stream and prints the value tree in the requested
/// format. On a decode failure the error is reported to stderr and —
/// unless `--no-fallback` is set — the raw buffer is hex-dumped to
/// stdout so the user still sees the bytes that refused to parse.
use anyhow::{Result, anyhow, bail};
use joss_decoder::StreamReader;
use joss_render::{hex_dump, json, text};

use crate::DumpArgs;
use crate::input;

/// Run the `joss dump` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the format flag is
/// unrecognised, or the stream fails to decode (after the fallback
/// dump has been printed).
pub fn run(args: &DumpArgs) -> Result<()> {
    let bytes = input::read_stream(&args.file)?;

    let values = match StreamReader::new(&bytes).and_then(StreamReader::read_all) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("decode failed: {e}");
            if !args.no_fallback {
                print!("{}", hex_dump(&bytes));
            }
            bail!("failed to decode {}", args.file.display());
        }
    };

    match args.format.as_str() {
        "json" => {
            let rendered = json::render_all(&values);
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        "text" => print!("{}", text::render_all(&values)),
        other => return Err(anyhow!("unknown format {other:?} (expected json or text)")),
    }

    Ok(())
}
