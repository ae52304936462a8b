use clap::Parser;
use ticklist::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = ticklist::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
