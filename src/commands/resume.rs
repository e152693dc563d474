//! `seekback resume`

use anyhow::Result;

use seekback::cli::ResumeArgs;
use seekback::{Config, SeekBackCalculator};

use super::clock_for;

/// Print the playhead to resume from.
pub fn handle(config: &Config, args: &ResumeArgs) -> Result<()> {
    let clock = clock_for(&args.timestamps);
    let calc = SeekBackCalculator::with_clock(&*clock).with_resume_config(&config.resume);
    let point = calc.resume(args.current_time, args.timestamps.last_played_ms);

    if args.json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        println!("{}", point.position);
    }
    Ok(())
}
