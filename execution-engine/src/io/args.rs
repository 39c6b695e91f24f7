use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Runs one directional batch campaign", long_about = None)]
pub struct Args {
    /// TOML file with [risk], [execution], [credentials] and [paper] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Instrument list override, e.g. "XAUUSD, EURUSD"
    #[arg(long)]
    pub pairs: Option<String>,

    /// Broker API token (overrides the config file)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Broker account id (overrides the config file)
    #[arg(long)]
    pub account_id: Option<String>,

    /// Print the event log as JSON lines instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
