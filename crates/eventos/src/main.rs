// Desktop binary: unwrap/expect/panic acceptable outside the library crates.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod command;
mod driver;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use platform::config::{APP_NAME, APP_VERSION};
use platform::{AppConfig, Services};
use tracing_subscriber::EnvFilter;
use ui::{App, RouteKind};
use ui_render::Framebuffer;

#[derive(Parser)]
#[command(name = "eventos")]
#[command(about = "Eventos UDB navigation driver", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the final screen to this PGM image
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered route patterns
    Routes,
    /// Open one route from a fresh start and write it as a PGM image
    Render {
        /// Route path, e.g. `event_detail/2`
        path: String,
        /// Output image
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    init_tracing(&config);
    tracing::info!(version = APP_VERSION, "{APP_NAME}");

    let services = Services::with_catalog(config.catalog()?);
    let mut app = App::new(services);

    match cli.command {
        Some(Commands::Routes) => {
            for kind in RouteKind::ALL {
                println!("{}", kind.pattern());
            }
            Ok(())
        }
        Some(Commands::Render { path, out }) => {
            app.open(&path)?;
            snapshot(&app, &out)
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = match &cli.script {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("opening script {}", path.display()))?;
                    driver::run(&mut app, BufReader::new(file), &mut out)?
                }
                None => driver::run(&mut app, io::stdin().lock(), &mut out)?,
            };
            tracing::info!(
                commands = summary.commands,
                errors = summary.errors,
                "session finished"
            );
            if let Some(path) = &cli.snapshot {
                snapshot(&app, path)?;
            }
            Ok(())
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn snapshot(app: &App, path: &Path) -> Result<()> {
    let mut frame = Framebuffer::phone();
    frame.render(app.screen());
    std::fs::write(path, frame.to_pgm())
        .with_context(|| format!("writing snapshot {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        route = %app.current_route(),
        components = frame.components().len(),
        "snapshot written"
    );
    Ok(())
}
