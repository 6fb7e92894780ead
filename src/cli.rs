use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wavelab_core::{EdgePolicy, SignalConfig, WaveformKind};

#[derive(Parser, Debug)]
#[command(name = "wavelab")]
#[command(author, version, about = "Synthesize, corrupt, filter and inspect test waveforms", long_about = None)]
pub struct Cli {
    /// JSON file with any subset of the configuration fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Waveform frequency in Hz [default: 2]
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// Peak amplitude [default: 1]
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Duration in seconds [default: 2]
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Sample rate in Hz [default: 1000]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<f64>,

    /// Standard deviation of the additive Gaussian noise [default: 0.2]
    #[arg(short, long)]
    pub noise_level: Option<f64>,

    /// Moving-average window in samples [default: 20]
    #[arg(short = 'w', long)]
    pub filter_window: Option<usize>,

    /// Filter edge handling: same, valid or shrink [default: same]
    #[arg(long)]
    pub edge_policy: Option<EdgePolicy>,

    /// Waveform to analyse: sine, square or sawtooth [default: sine]
    #[arg(long)]
    pub waveform: Option<WaveformKind>,

    /// Noise generator seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report without opening the dashboard window
    #[arg(long)]
    pub headless: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn to_config(&self) -> Result<SignalConfig> {
        let mut config = match &self.config {
            Some(path) => SignalConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => SignalConfig::default(),
        };

        if let Some(v) = self.frequency {
            config.frequency = v;
        }
        if let Some(v) = self.amplitude {
            config.amplitude = v;
        }
        if let Some(v) = self.duration {
            config.duration = v;
        }
        if let Some(v) = self.sample_rate {
            config.sample_rate = v;
        }
        if let Some(v) = self.noise_level {
            config.noise_level = v;
        }
        if let Some(v) = self.filter_window {
            config.filter_window = v;
        }
        if let Some(v) = self.edge_policy {
            config.edge_policy = v;
        }
        if let Some(v) = self.waveform {
            config.analysed = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}
