/// Implementation of `joss hex` — the byte-level view, useful on its
/// own and as the manual counterpart of `dump`'s automatic fallback.
use anyhow::Result;
use joss_render::hex_dump;

use crate::HexArgs;
use crate::input;

/// Run the `joss hex` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read (or gunzipped, unless
/// `--raw` is set).
pub fn run(args: &HexArgs) -> Result<()> {
    let bytes = if args.raw {
        input::read_raw(&args.file)?
    } else {
        input::read_stream(&args.file)?
    };

    print!("{}", hex_dump(&bytes));
    Ok(())
}
