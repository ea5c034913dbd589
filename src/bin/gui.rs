use std::process::ExitCode;

use clap::Parser;
use tracing::error;

/// Opens the interactive viewer window.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start in borderless fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Start with vsync off
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> ExitCode {
    fractal_viewer::init_tracing();
    let cli = Cli::parse();

    let presenter_factory = fractal_viewer::PixelsPresenterFactory::new();
    let command = fractal_viewer::RunGuiCommand::new(presenter_factory)
        .with_fullscreen(cli.fullscreen)
        .with_vsync(!cli.no_vsync);

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "viewer failed");
            ExitCode::FAILURE
        }
    }
}
