use clap::Parser;
use taskgrid::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = taskgrid::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
