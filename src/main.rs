//! wavelab: generate sine/square/sawtooth test signals, add Gaussian noise,
//! smooth them with a moving average and show the result in a 4 × 3
//! time/frequency dashboard, followed by a text report on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wavelab::cli::Cli;
use wavelab::components::app;
use wavelab::{logging, report};
use wavelab_core::Analysis;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.to_config()?;
    let analysis = Analysis::run(&config).context("signal analysis failed")?;

    let rendered = if cli.json {
        report::render_json(&analysis).context("serializing report")?
    } else {
        report::render_text(&analysis)
    };

    if !cli.headless {
        info!("opening dashboard window");
        app::run(analysis).map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))?;
    }

    println!("{rendered}");
    Ok(())
}
