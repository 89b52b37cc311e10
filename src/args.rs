use std::path::PathBuf;

use clap::Parser;

use crate::api::VALORANT_API_ROOT;

#[derive(Parser, Clone)]
#[command(
    display_name = "Team Balancer",
    long_about = "Splits the group's roster into two rating-even teams and suggests a map \
    from the catalog's current rotation pool"
)]
pub struct Args {
    /// Root URL of the map catalog service
    #[arg(short, long, env = "API_ROOT", default_value = VALORANT_API_ROOT)]
    pub api_root: String,

    /// Path to a roster file containing a JSON array of player names.
    /// Falls back to the built-in roster when omitted
    #[arg(short, long, env = "ROSTER_PATH")]
    pub roster: Option<PathBuf>,

    /// Seed for the map pick. Omit to draw from OS entropy
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
