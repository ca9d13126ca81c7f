//! # render-landing
//!
//! Renders the landing page to a single static HTML file.
//!
//! ```bash
//! # Built-in Toronto Caulking & Grout config, to stdout
//! render-landing
//!
//! # Custom config, wasm lead form, written to disk
//! render-landing --config business.toml --lead-form-module /pkg/caulking_landing_wasm.js --output dist/index.html
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use caulking_landing::{
    BusinessConfig, BusinessConfigDraft, PageContent, PageOptions, PageState, render_page,
};

#[derive(Parser, Debug)]
#[command(name = "render-landing")]
#[command(about = "Render the caulking & grout landing page to static HTML")]
#[command(version)]
struct Args {
    /// Business config (TOML). Built-in Toronto config when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file. Writes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// URL of the wasm lead-form module's JS entry
    #[arg(long)]
    lead_form_module: Option<String>,

    /// Copyright year in the footer (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = match &args.config {
        Some(path) => BusinessConfig::load_from_path(path)
            .with_context(|| format!("Invalid business config {}", path.display()))?,
        None => BusinessConfig::try_from(BusinessConfigDraft::toronto_caulking())
            .context("Built-in business config is invalid")?,
    };
    info!(business = config.display_name(), "Loaded business config");

    let content = PageContent::toronto_caulking();
    let state = PageState::initial(&content);
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let mut options = PageOptions::new(year);
    if let Some(module) = args.lead_form_module {
        options = options.with_lead_form_module(module);
    }

    let html = render_page(&config, &content, &state, &options);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Landing page written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes()).context("Failed to write page to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
