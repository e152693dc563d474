//! `seekback since`

use anyhow::Result;
use serde_json::json;

use seekback::cli::SinceArgs;
use seekback::player_time::format_elapsed;
use seekback::SeekBackCalculator;

use super::clock_for;

/// Print how long ago playback last happened.
pub fn handle(args: &SinceArgs) -> Result<()> {
    let clock = clock_for(&args.timestamps);
    let calc = SeekBackCalculator::with_clock(&*clock);
    let elapsed = calc.time_since_last_played(args.timestamps.last_played_ms);

    if args.json {
        let formatted = elapsed.map(format_elapsed);
        println!(
            "{}",
            json!({ "elapsed_seconds": elapsed, "formatted": formatted })
        );
        return Ok(());
    }

    match elapsed {
        Some(seconds) => println!("{} ({} ago)", seconds, format_elapsed(seconds)),
        None => println!("never played"),
    }
    Ok(())
}
