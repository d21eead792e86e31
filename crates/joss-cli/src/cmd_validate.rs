/// Implementation of `joss validate`.
///
/// Attempts a full structural decode and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`).
///
/// # Success output
///
/// ```text
/// ✓ Header: valid (magic 0xACED, version 0x0005)
/// ✓ Content: 2 top-level elements decoded
/// ✓ Handles: 4 assigned, all references resolved
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unexpected tag byte 0x20 at offset 4
/// ```
use anyhow::{Result, anyhow};
use joss_decoder::StreamReader;

use crate::ValidateArgs;
use crate::input;

/// Run the `joss validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the stream fails any
/// structural check; the main dispatcher converts that to exit code 1.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = input::read_stream(&args.file)?;

    let mut reader = match StreamReader::new(&bytes) {
        Ok(reader) => reader,
        Err(e) => {
            println!("✗ Error: {e}");
            return Err(anyhow!("validation failed"));
        }
    };

    let header = reader.header();
    let mut elements = 0usize;

    while let Some(item) = reader.next() {
        match item {
            Ok(_) => elements += 1,
            Err(e) => {
                println!("✗ Error: {e}");
                return Err(anyhow!("validation failed"));
            }
        }
    }

    println!(
        "✓ Header: valid (magic {:#06X}, version {:#06X})",
        header.magic, header.version
    );
    println!(
        "✓ Content: {elements} top-level element{} decoded",
        if elements == 1 { "" } else { "s" }
    );
    println!(
        "✓ Handles: {} assigned, all references resolved",
        reader.handle_count()
    );

    Ok(())
}
