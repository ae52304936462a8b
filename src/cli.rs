use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tick",
    about = concat!("[/] ticklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for one sitting"),
    version
)]
pub struct Cli {
    /// Initial filter: all, favourite, active, completed
    #[arg(long)]
    pub filter: Option<String>,

    /// Initial sort order: date, alpha
    #[arg(long)]
    pub sort: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}
