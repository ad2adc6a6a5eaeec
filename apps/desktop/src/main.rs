#![windows_subsystem = "windows"]

use clap::Parser;
use folio_desktop::DesktopApp;
use folio_kernel::config::load_config;
use folio_kernel::domain::config::SiteConfig;
use folio_logger::Logger;
use std::path::PathBuf;

/// Personal portfolio, desktop edition.
#[derive(Debug, Parser)]
#[command(name = "folio-desktop", version, about)]
struct Args {
    /// Config file (TOML). Defaults to `folio.toml` when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open at: `home`, `projects` or `contact`.
    #[arg(short, long)]
    page: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config: SiteConfig = load_config(args.config.as_deref())?;
    let _logger =
        Logger::builder(env!("CARGO_PKG_NAME")).with_config(&config.logging).init()?;

    let start = args.page.or(config.start_page).unwrap_or_default();

    DesktopApp::from_config(&config.window).with_start_fragment(start).launch();

    Ok(())
}
