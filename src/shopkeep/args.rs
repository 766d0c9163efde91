use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(about = "Interactive inventory console with soft delete and restore", long_about = None)]
pub struct Cli {
    /// JSON fixture to load into the store at startup
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Skip the introduction banner
    #[arg(long)]
    pub no_banner: bool,
}
