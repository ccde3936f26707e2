use std::process::ExitCode;

use clap::Parser;
use fontwidth_cli::Cli;
use log::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.run() {
        Ok(report) => {
            info!("{report}");
            info!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
