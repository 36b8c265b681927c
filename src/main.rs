use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use block_palette::Palette;
use mineart::models::RenderOptions;
use mineart::services::{OutputTarget, RenderService};

#[derive(Parser)]
#[command(name = "mineart", version)]
#[command(about = "Simple program for translating images to Minecraft blocks")]
struct Cli {
    /// Image to process
    filename: PathBuf,

    /// Use abbreviated names
    #[arg(short, long)]
    abbreviate: bool,

    /// Guess the closest block color when there is no exact match
    #[arg(short, long)]
    guess: bool,

    /// Save to the specified file instead of printing
    #[arg(short, long, value_name = "PATH")]
    save: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the grid
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mineart=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Runtime error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Render the image named on the command line
fn run(cli: Cli) -> anyhow::Result<()> {
    let options = RenderOptions::from_flags(cli.abbreviate, cli.guess);
    let target = OutputTarget::from_save_path(cli.save);
    let service = RenderService::new(Palette::blocks());

    tracing::debug!(
        input = %cli.filename.display(),
        ?options,
        ?target,
        "Rendering image"
    );

    service.render(&cli.filename, options, &target)?;
    Ok(())
}
