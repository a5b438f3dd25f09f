use crate::libs::formatter::compute_duration;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Start reading (HH:MM)
    start: String,

    /// End reading (HH:MM); earlier than start means the next day
    end: String,
}

/// Prints the elapsed time, or an empty line when it cannot be computed.
pub fn cmd(args: DurationArgs) -> Result<()> {
    let duration = compute_duration(&args.start, &args.end);
    tracing::debug!(start = %args.start, end = %args.end, %duration, "duration computed");

    println!("{}", duration);
    Ok(())
}
