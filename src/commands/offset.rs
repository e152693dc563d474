//! `seekback offset`

use anyhow::Result;

use seekback::cli::OffsetArgs;
use seekback::seek_back_seconds_for_elapsed;

/// Print the seek-back offset for the given elapsed seconds.
pub fn handle(args: &OffsetArgs) -> Result<()> {
    println!("{}", seek_back_seconds_for_elapsed(args.elapsed));
    Ok(())
}
