//! Gomoku GUI and console front end

use std::io;

use anyhow::Result;
use clap::Parser;
use gomoku::config::Cli;
use gomoku::ui::GomokuApp;
use gomoku::GameController;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the console board stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();

    info!(depth = cli.depth, breadth = cli.breadth, console = cli.console, "starting gomoku");
    let oracle = cli.oracle();

    if cli.console {
        let mut controller = GameController::new(oracle);
        let stdin = io::stdin();
        gomoku::console::run(&mut controller, stdin.lock(), &mut io::stdout())?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, oracle)))),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}
